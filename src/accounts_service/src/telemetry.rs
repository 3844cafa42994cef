use std::time::Duration;

use axum::{body::Body, extract::Request, response::Response};
use color_eyre::eyre::Result;
use tracing::{Level, Span};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Install the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}

pub fn make_span_with_request_id(request: &Request<Body>) -> Span {
    let request_id = Uuid::new_v4();
    tracing::span!(
        Level::INFO,
        "[REQUEST]",
        method = tracing::field::display(request.method()),
        uri = tracing::field::display(request.uri()),
        version = tracing::field::debug(request.version()),
        request_id = tracing::field::display(request_id),
    )
}

pub fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::event!(Level::INFO, "[REQUEST START]");
}

pub fn on_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    let status = response.status();

    if status.is_server_error() {
        tracing::event!(Level::ERROR, latency = ?latency, status = status.as_u16(), "[REQUEST END]");
    } else if status.is_client_error() {
        tracing::event!(Level::WARN, latency = ?latency, status = status.as_u16(), "[REQUEST END]");
    } else {
        tracing::event!(Level::INFO, latency = ?latency, status = status.as_u16(), "[REQUEST END]");
    }
}
