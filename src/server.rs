//! Axum router and server setup.
//! Used by: service binaries.

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::model::Resource;
use crate::state::AppState;
use crate::telemetry;

pub fn build_router<T: Resource>(state: AppState<T>) -> Router {
    let collection = format!("/{}", T::COLLECTION);
    let item = format!("{collection}/:id");
    Router::new()
        .route("/", get(handlers::root::root::<T>))
        .route("/health", get(handlers::health::health::<T>))
        .route(
            &collection,
            get(handlers::resources::list::<T>).post(handlers::resources::create::<T>),
        )
        .route(&item, get(handlers::resources::get_by_id::<T>))
        .route("/metrics", get(handlers::metrics::export::<T>))
        .layer(from_fn_with_state(
            state.clone(),
            telemetry::track_requests::<T>,
        ))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run<T: Resource>(state: AppState<T>, addr: &str) -> std::io::Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, router).await
}
