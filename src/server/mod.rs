//! HTTP host for the dashboard.
//!
//! Serves the page and re-runs the pie/scatter callbacks on demand. The
//! dataset and pre-rendered page are shared read-only across handlers.

mod config;
mod handlers;

use std::future::Future;
use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::{Dashboard, PIE_ENDPOINT, SCATTER_ENDPOINT};
use crate::error::{DashError, DashResult};
use crate::render::render_page;

pub use config::{DEFAULT_HOST, DEFAULT_PORT, DashboardArgs, DashboardConfig};

#[derive(Clone)]
pub(crate) struct AppState {
    dashboard: Arc<Dashboard>,
    page: Arc<String>,
}

/// Builds the router; the page is rendered once here.
pub fn router(dashboard: Arc<Dashboard>) -> DashResult<Router> {
    let page = Arc::new(render_page(dashboard.layout())?);
    let state = AppState { dashboard, page };

    Ok(Router::new()
        .route("/", get(handlers::index))
        .route("/api/layout", get(handlers::layout))
        .route(PIE_ENDPOINT, get(handlers::pie_figure))
        .route(SCATTER_ENDPOINT, get(handlers::scatter_figure))
        .route("/api/figure-contract/{kind}", get(handlers::figure_contract))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Serves on an already-bound listener until `shutdown` resolves.
pub async fn serve_on(
    listener: TcpListener,
    dashboard: Arc<Dashboard>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> DashResult<()> {
    let app = router(dashboard)?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| DashError::Server(format!("server terminated: {e}")))
}

/// Binds `config`'s address and serves until Ctrl-C.
pub async fn serve(config: &DashboardConfig, dashboard: Dashboard) -> DashResult<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| DashError::Server(format!("failed to bind {addr}: {e}")))?;
    info!(
        url = %format!("http://{addr}"),
        rows = dashboard.dataset().len(),
        "dashboard server ready"
    );
    serve_on(listener, Arc::new(dashboard), shutdown_signal()).await?;
    info!("dashboard server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c; shutting down");
    }
}
