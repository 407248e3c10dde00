//! Shared application state.

use std::sync::Arc;

use crate::error::Result;
use crate::model::Resource;
use crate::store::ResourceStore;
use crate::telemetry::HttpMetrics;

pub struct AppStateInner<T: Resource> {
    pub store: ResourceStore<T>,
    pub metrics: HttpMetrics,
}

pub type AppState<T> = Arc<AppStateInner<T>>;

/// Seeded store plus a fresh metrics registry, built once at startup.
pub fn build_state<T: Resource>() -> Result<AppState<T>> {
    Ok(Arc::new(AppStateInner {
        store: ResourceStore::seeded(),
        metrics: HttpMetrics::new(T::SERVICE)?,
    }))
}
