//! Collection endpoints: list, get by id, create.
//! Used by: server.

use axum::extract::{Path, State};
use axum::Json;

use crate::error::Result;
use crate::model::Resource;
use crate::state::AppState;

pub async fn list<T: Resource>(State(state): State<AppState<T>>) -> Result<Json<Vec<T>>> {
    Ok(Json(state.store.list()?))
}

pub async fn get_by_id<T: Resource>(
    State(state): State<AppState<T>>,
    Path(id): Path<u64>,
) -> Result<Json<T>> {
    Ok(Json(state.store.get(id)?))
}

/// A payload missing a required field never reaches this point: the `Json`
/// extractor rejects it with a 422 before the store is touched.
pub async fn create<T: Resource>(
    State(state): State<AppState<T>>,
    Json(draft): Json<T::Draft>,
) -> Result<Json<T>> {
    let entity = state.store.create(draft)?;
    tracing::info!(kind = T::KIND, id = entity.id(), "resource created");
    Ok(Json(entity))
}
