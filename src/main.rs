//! MultiEdge CMS - bilingual site content server
//!
//! Serves English/Spanish page content with database overrides on top of the
//! bundled defaults, plus the admin endpoints that edit it.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `i18n` - Translation trees, path codec, merge and fallback resolution
//! - `database` - MongoDB integration (content, images, sessions)
//! - `storage` - Object storage for uploaded images
//! - `cms` - Content, image and auth services
//! - `server` - Axum routes and handlers

mod cms;
mod config;
mod database;
mod error;
mod i18n;
mod server;
mod storage;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cms::{AuthService, ContentService, ImageService};
use config::Config;
use database::{ContentRepository, Database, ImageRepository, SessionRepository};
use i18n::Translations;
use server::AppState;
use storage::{FileObjectStore, IMAGE_BUCKET};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("multiedge_cms=info,mongodb=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Starting MultiEdge CMS...");

    let config = Config::from_env()?;
    info!("Configuration loaded successfully");

    let defaults = match &config.translations_dir {
        Some(dir) => {
            info!("Loading translations from {}", dir.display());
            Translations::load_dir(dir)?
        }
        None => Translations::embedded()?,
    };
    let defaults = Arc::new(defaults);

    info!("Connecting to MongoDB...");
    let db = Database::connect(&config.mongodb_uri, &config.mongodb_database).await?;
    info!("Database connected");

    let content_repo = ContentRepository::new(&db);
    content_repo.ensure_indexes().await?;
    let image_repo = ImageRepository::new(&db);
    image_repo.ensure_indexes().await?;
    let session_repo = SessionRepository::new(&db);

    let objects = FileObjectStore::open(
        &config.storage_dir,
        IMAGE_BUCKET,
        config.public_base_url.clone(),
    )
    .await?;
    info!("Image bucket ready under {}", config.storage_dir.display());

    let state = AppState {
        content: Arc::new(ContentService::new(defaults, Arc::new(content_repo))),
        images: Arc::new(ImageService::new(Arc::new(objects), Arc::new(image_repo))),
        auth: Arc::new(AuthService::new(Arc::new(session_repo))),
        login_path: Arc::from(config.login_path.as_str()),
    };

    server::serve(config.bind_addr, state).await
}
