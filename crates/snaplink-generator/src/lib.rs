//! Short code generation for the Snaplink URL shortener.

pub mod random;

use snaplink_core::ShortCode;

pub use random::RandomGenerator;

/// Trait for generating candidate short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// Uniqueness of the produced code is the assigner's concern: it checks
/// the candidate against the repository before persisting it.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;

    /// Generates a candidate short code.
    fn generate(&self) -> Self::Output;
}
