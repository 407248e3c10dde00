//! Prometheus exposition endpoint.
//! Used by: server.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::Result;
use crate::model::Resource;
use crate::state::AppState;
use crate::telemetry::PROMETHEUS_CONTENT_TYPE;

pub async fn export<T: Resource>(State(state): State<AppState<T>>) -> Result<Response> {
    let body = state.metrics.render()?;
    Ok(([(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], body).into_response())
}
