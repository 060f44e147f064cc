//! Seed tool entry point
//!
//! Creates the default and admin roles, plus any tags listed in `SEED_TAGS`.
//! Safe to run repeatedly: existing rows are left untouched.
//!
//! ```bash
//! DATABASE_URL=postgres://... SEED_TAGS=rust,java cargo run -p blog-seed
//! ```

use blog_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use blog_core::entities::{Role, Tag};
use blog_core::traits::{RoleRepository, TagRepository};
use blog_core::value_objects::TagId;
use blog_db::{create_pool, DatabaseConfig, PgRoleRepository, PgTagRepository};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(&config).await {
        error!(error = %e, "Seeding failed");
        std::process::exit(1);
    }
}

async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let pool = create_pool(&DatabaseConfig::from(&config.database)).await?;

    let roles = PgRoleRepository::new(pool.clone());
    for role in [
        Role::new(&config.accounts.default_role).with_description("Default account role"),
        Role::new(&config.accounts.admin_role).with_description("Administrator"),
    ] {
        roles.create(&role).await?;
        info!(role = %role.name, "Role ensured");
    }

    let tags = PgTagRepository::new(pool);
    for name in &config.seed.tags {
        tags.create(&Tag::new(TagId::generate(), name)).await?;
        info!(tag = %name, "Tag ensured");
    }

    info!(
        roles = 2,
        tags = config.seed.tags.len(),
        "Seed complete"
    );
    Ok(())
}
