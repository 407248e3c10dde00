//! Liveness endpoint. Reads no store state, so it cannot false-negative.
//! Used by: server.

use axum::Json;
use serde_json::{json, Value};

use crate::model::Resource;

pub async fn health<T: Resource>() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": T::SERVICE }))
}
