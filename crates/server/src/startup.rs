use std::net::SocketAddr;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use common::utils::logging::init_logging;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

use crate::{routes, state::AppState};

/// CORS for the configured origins; with none configured no cross-origin
/// request is allowed, so browsers cannot submit mutations from other sites.
pub fn build_cors(origins: &[String]) -> anyhow::Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::new());
    }
    let origins = origins
        .iter()
        .map(|o| HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin {o:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Public entry: connect, migrate, then build and serve the HTTP app.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    init_logging(cfg.logging.json);

    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!("migrations applied");
    }

    let state = AppState::new(db, cfg.pagination.page_size);
    let cors = build_cors(&cfg.server.cors_allowed_origins)?;
    let app: Router = routes::build_router(state, cors);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .context("invalid server.host/server.port")?;
    info!(%addr, page_size = cfg.pagination.page_size, "starting adboard server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
