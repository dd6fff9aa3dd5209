//! HTTP API serving the health and users endpoints.
//!
//! The routing table is fixed at startup: two read-only JSON routes plus a
//! JSON 404 fallback. Requests are traced with `tracing`, counted with
//! `metrics`, and handler panics are turned into opaque 500 responses.

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use config::Config;
use error::ServerError;

/// Creates the Axum application router with all routes.
///
/// Known paths answer only `GET` (and `HEAD`); any other method gets the
/// method router's default 405 with an `Allow` header. Unknown paths get
/// a JSON 404.
pub fn create_app() -> Router {
    let router = Router::new()
        .route("/api/health", get(routes::health::check))
        .route("/api/users", get(routes::users::list))
        .fallback(routes::fallback::not_found);

    with_middleware(router)
}

/// Wraps a router in the panic-catching and tracing layers.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Binds a TCP listener, mapping failure to a fatal [`ServerError::Bind`].
pub async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serves `app` on `listener` until `shutdown` resolves.
///
/// Each accepted connection runs on its own task, so a stalled client
/// never holds up the others.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Binds the configured listeners and serves until `shutdown` resolves.
///
/// The metrics listener, when enabled, drains alongside the API listener.
pub async fn run<F>(config: &Config, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.addr();
    let listener = bind(&addr).await?;
    let (stop_tx, stop_rx) = watch::channel(false);

    let metrics_task = match config.metrics_addr() {
        Some(metrics_addr) => {
            let handle = telemetry::install_recorder()?;
            let metrics_listener = bind(&metrics_addr).await?;
            tracing::info!(addr = %metrics_addr, "starting metrics listener");
            Some(tokio::spawn(serve(
                metrics_listener,
                telemetry::metrics_app(handle),
                stopped(stop_rx),
            )))
        }
        None => None,
    };

    tracing::info!(%addr, "starting API server");
    let result = serve(listener, create_app(), async move {
        shutdown.await;
        let _ = stop_tx.send(true);
    })
    .await;

    if let Some(task) = metrics_task {
        match task.await {
            Ok(Err(err)) => tracing::error!(error = %err, "metrics listener stopped"),
            Err(err) => tracing::error!(error = %err, "metrics listener task failed"),
            Ok(Ok(())) => {}
        }
    }

    result
}

/// Resolves once the stop flag is raised or its sender is gone.
async fn stopped(mut rx: watch::Receiver<bool>) {
    let _ = rx.wait_for(|stop| *stop).await;
}
