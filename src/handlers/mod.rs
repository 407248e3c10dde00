//! HTTP handler modules.
//! Used by: server.

pub mod health;
pub mod metrics;
pub mod resources;
pub mod root;
