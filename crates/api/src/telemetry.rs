//! Logging setup and the Prometheus scrape listener.

use axum::Router;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, DEFAULT_LOG_LEVEL, LogFormat};
use crate::error::ServerError;

/// Builds the log filter from the configured directive.
///
/// A directive that does not parse falls back to [`DEFAULT_LOG_LEVEL`].
pub fn log_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|err| {
        eprintln!("ignoring invalid log filter {log_level:?}: {err}");
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    })
}

/// Installs the global tracing subscriber.
pub fn init_tracing(config: &Config) {
    let registry = tracing_subscriber::registry().with(log_filter(&config.log_level));

    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Installs the global Prometheus recorder.
pub fn install_recorder() -> Result<PrometheusHandle, ServerError> {
    PrometheusBuilder::new().install_recorder().map_err(ServerError::from)
}

/// Router for the scrape listener. Kept off the public API listener.
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new()
        .route("/metrics", get(render))
        .with_state(handle)
}

async fn render(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        handle.render(),
    )
}
