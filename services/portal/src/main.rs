use sea_orm::Database;
use tracing::info;

use campus_core::tracing::init_tracing;
use campus_portal::config::PortalConfig;
use campus_portal::infra::blob::FsBlobStore;
use campus_portal::router::build_router;
use campus_portal::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = PortalConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        blob: FsBlobStore::new(&config.blob_root),
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.portal_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("portal service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
