//! Wiring & DI. Entry point: load config, pick the directory backend, serve HTTP.
//! No business logic here; resolution is delegated to ResolutionService.

use dotenv::dotenv;
use meet_library::adapters::http::{AppState, MeetLinks, create_router};
use meet_library::adapters::persistence::{MemoryDirectory, SqliteDirectory};
use meet_library::ports::{CommandPort, Directory};
use meet_library::shared::config::{AppConfig, StoreKind};
use meet_library::usecases::ResolutionService;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "failed to load config, using defaults");
        AppConfig::default()
    });

    // --- Directory backend ---
    let directory: Arc<dyn Directory> = match cfg.store_kind() {
        StoreKind::Sqlite => {
            let data_path = PathBuf::from(cfg.data_dir_or_default());
            Arc::new(
                SqliteDirectory::connect(&data_path)
                    .await
                    .map_err(|e| anyhow::anyhow!("SQLite connect failed: {}", e))?,
            )
        }
        StoreKind::Memory => {
            warn!("using in-memory directory; entries are lost on restart");
            Arc::new(MemoryDirectory::new())
        }
    };

    // --- Services ---
    let commands: Arc<dyn CommandPort> = Arc::new(ResolutionService::new(directory));
    let links = MeetLinks::new(cfg.base_meet_url_or_default());
    info!(base_url = %cfg.base_meet_url_or_default(), "meeting links configured");

    let app = create_router(Arc::new(AppState { commands, links }));

    let addr: SocketAddr = cfg.bind_addr_or_default().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "meet-library listening");
    axum::serve(listener, app).await?;

    Ok(())
}
