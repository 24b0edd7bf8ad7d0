use async_trait::async_trait;
use snaplink_core::repository::Result;
use snaplink_core::{Mapping, ShortCode};

/// The outcome of a lookup.
///
/// Absence and expiry are expected steady-state results, so they are
/// variants here rather than errors; only storage failures are errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveOutcome {
    /// The code is live; redirect to the mapping's long URL.
    Found(Mapping),
    /// The code was never assigned.
    NotFound,
    /// The code was assigned but its mapping is past expiry.
    Expired,
}

#[async_trait]
pub trait Resolver: Send + Sync + 'static {
    /// Resolves a short code against the store.
    ///
    /// A pure read: never creates, deletes, or refreshes a mapping.
    async fn resolve(&self, code: &ShortCode) -> Result<ResolveOutcome>;
}
