//! Product catalog service entrypoint.

use storefront::model::product::Product;
use storefront::{server, state};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let state = state::build_state::<Product>()?;
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8001".into());
    tracing::info!("starting product-service on {}", addr);

    server::run(state, &addr).await?;
    Ok(())
}
