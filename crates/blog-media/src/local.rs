//! Content-addressed local media store

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use blog_core::traits::{MediaStore, RepoResult, UploadedMedia};
use sha2::{Digest, Sha256};
use tokio::fs;
use tracing::{debug, info, instrument};

use crate::error::MediaError;

/// Top-level directory a file is stored under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub const fn dir(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

/// Stores uploads on the local filesystem and serves them from a URL prefix
#[derive(Debug, Clone)]
pub struct LocalMediaStore {
    root: PathBuf,
    public_url: String,
    max_file_size: u64,
}

impl LocalMediaStore {
    pub fn new(root: impl Into<PathBuf>, public_url: impl Into<String>, max_file_size: u64) -> Self {
        let public_url: String = public_url.into();
        Self {
            root: root.into(),
            public_url: public_url.trim_end_matches('/').to_string(),
            max_file_size,
        }
    }

    pub fn from_config(config: &blog_common::StorageConfig) -> Self {
        Self::new(
            &config.upload_dir,
            &config.public_url,
            config.max_file_size_bytes(),
        )
    }

    /// Root directory uploads are written below
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `{kind}/ab/cd/{hash}` relative path shared by disk layout and URL
    fn relative_path(kind: MediaKind, hash: &str) -> String {
        format!("{}/{}/{}/{hash}", kind.dir(), &hash[0..2], &hash[2..4])
    }

    fn digest(data: &[u8]) -> String {
        format!("{:x}", Sha256::digest(data))
    }

    /// Persist `data` and return its public URL
    #[instrument(skip(self, data), fields(kind = kind.dir(), size = data.len()))]
    pub async fn store(&self, kind: MediaKind, data: Vec<u8>) -> Result<String, MediaError> {
        let size = data.len() as u64;
        if size == 0 {
            return Err(MediaError::Empty);
        }
        if size > self.max_file_size {
            return Err(MediaError::TooLarge {
                size,
                limit: self.max_file_size,
            });
        }

        let hash = Self::digest(&data);
        let relative = Self::relative_path(kind, &hash);
        let target = self.root.join(&relative);

        if fs::try_exists(&target).await? {
            debug!(%hash, "Media already stored");
        } else {
            let dir = target
                .parent()
                .map_or_else(|| self.root.clone(), Path::to_path_buf);
            fs::create_dir_all(&dir).await?;

            let path = target.clone();
            tokio::task::spawn_blocking(move || write_staged(&dir, &path, &data)).await??;
            info!(%hash, "Media stored");
        }

        Ok(format!("{}/{relative}", self.public_url))
    }
}

/// Write `data` to a uniquely named file in `dir`, then move it onto `target`
/// so readers never see a partial file. Concurrent writers of the same
/// content race harmlessly: whichever lands last, the bytes are identical.
fn write_staged(dir: &Path, target: &Path, data: &[u8]) -> Result<(), MediaError> {
    let mut staging = tempfile::Builder::new()
        .suffix(".part")
        .tempfile_in(dir)?;
    staging.write_all(data)?;

    match staging.persist(target) {
        Ok(_) => Ok(()),
        // Platforms that refuse to replace an existing file
        Err(_) if target.exists() => Ok(()),
        Err(e) => Err(e.error.into()),
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn upload_image(&self, bytes: Vec<u8>) -> RepoResult<UploadedMedia> {
        let url = self.store(MediaKind::Image, bytes).await?;
        Ok(UploadedMedia { url })
    }

    async fn upload_video(&self, bytes: Vec<u8>) -> RepoResult<UploadedMedia> {
        let url = self.store(MediaKind::Video, bytes).await?;
        Ok(UploadedMedia { url })
    }
}
