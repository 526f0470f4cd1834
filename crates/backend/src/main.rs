pub mod dashboards;
pub mod handlers;
pub mod shared;
pub mod system;
pub mod usecases;

use std::sync::Arc;

use crate::usecases::u101_probe_board::fetch_gateway::RelayFetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::routing::get;
    use axum::Router;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let catalogue = shared::catalogue::catalogue();
    tracing::info!(
        "Catalogue loaded: {} services, {} probeable cells",
        catalogue.len(),
        shared::catalogue::probeable_cell_count(catalogue)
    );

    let state = handlers::AppState {
        fetcher: Arc::new(RelayFetcher::new(&config.probe)?),
        config: Arc::new(config.clone()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route(
            "/health",
            get(|| async { "ok" }),
        )
        // ========================================
        // STATUS BOARD
        // ========================================
        .route("/api/board", get(handlers::board::get_board))
        .route("/api/summary", get(handlers::board::get_summary))
        .route("/api/catalogue", get(handlers::board::get_catalogue))
        .layer(cors)
        .with_state(state);

    let addr: SocketAddr = config.server.bind.parse()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: {} is already in use. Please ensure no other process is using this address.",
                    config.server.bind
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", config.server.bind, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
