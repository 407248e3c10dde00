//! Entity schemas served by the resource services.
//! Used by: store, handlers, server, binaries.

pub mod product;
pub mod user;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Schema description for one collection. `ResourceStore`, the handlers and
/// the router are generic over this, so each service binary is only bootstrap.
pub trait Resource: Clone + Serialize + Send + Sync + 'static {
    /// Creation payload: the entity's fields minus `id`. Client-supplied ids
    /// are discarded by construction since the draft has no `id` field.
    type Draft: DeserializeOwned + Send + 'static;

    /// URL path segment, e.g. "products".
    const COLLECTION: &'static str;
    /// Singular display name used in error messages, e.g. "Product".
    const KIND: &'static str;
    /// Service identifier reported by `/health` and used as the metric prefix.
    const SERVICE: &'static str;
    /// Human-readable title for the root banner.
    const TITLE: &'static str;

    fn id(&self) -> u64;

    /// Construct the stored entity from a draft and the assigned id.
    fn assign(draft: Self::Draft, id: u64) -> Self;

    /// Fixed rows every store starts with.
    fn seed() -> Vec<Self>;
}
