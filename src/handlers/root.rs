//! Service identity banner.
//! Used by: server.

use axum::Json;
use serde_json::{json, Value};

use crate::model::Resource;

pub async fn root<T: Resource>() -> Json<Value> {
    Json(json!({
        "message": format!("{} is running!", T::TITLE),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
