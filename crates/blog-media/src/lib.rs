//! # blog-media
//!
//! Local filesystem implementation of the `MediaStore` port.
//!
//! Files are content addressed: the SHA-256 of the bytes is the file name and
//! the first two byte pairs of the hash shard the directory tree, so uploading
//! the same bytes twice yields the same URL and one file on disk.
//!
//! ```text
//! {upload_dir}/image/ab/cd/abcd1234...
//! {public_url}/image/ab/cd/abcd1234...
//! ```

mod error;
mod local;

pub use error::MediaError;
pub use local::{LocalMediaStore, MediaKind};
