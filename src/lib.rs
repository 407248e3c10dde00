//! Storefront: small instrumented HTTP services over in-memory collections.
//! Used by: service binaries.

pub mod error;
pub mod handlers;
pub mod model;
pub mod server;
pub mod state;
pub mod store;
pub mod telemetry;
