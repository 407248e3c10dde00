//! User account service entrypoint.

use storefront::model::user::User;
use storefront::{server, state};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let state = state::build_state::<User>()?;
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
    tracing::info!("starting user-service on {}", addr);

    server::run(state, &addr).await?;
    Ok(())
}
