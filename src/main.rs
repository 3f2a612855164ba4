//! SOLID Showcase server
//!
//! Serves each principle's bad and good demonstration at
//! `GET /api/{principle}/{variant}`.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use solid_showcase::{server, ShowcaseConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("solid_showcase=info,tower_http=info")),
        )
        .with_target(true)
        .init();

    let config = ShowcaseConfig::from_env()?;
    server::run_server(config).await
}
