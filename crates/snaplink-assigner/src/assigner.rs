use crate::error::AssignError;
use async_trait::async_trait;
use snaplink_core::{Mapping, ShortCode};

/// Parameters for assigning a short code to a long URL.
#[derive(Debug, Clone)]
pub struct AssignParams {
    /// The long URL to shorten. Required; stored opaquely.
    pub long_url: String,
    /// Optional caller-chosen short code. Validated before use.
    pub custom_code: Option<String>,
    /// Requested lifetime in minutes. Absent or non-positive values fall
    /// back to the default TTL.
    pub expires_in_minutes: Option<i64>,
}

/// The outcome of a successful assignment.
#[derive(Debug, Clone)]
pub struct Assignment {
    /// The short code now bound to the URL.
    pub short_code: ShortCode,
    /// Fully qualified short URL, built from the configured base URL.
    pub short_url: String,
    /// The mapping as persisted.
    pub mapping: Mapping,
}

#[async_trait]
pub trait Assigner: Send + Sync + 'static {
    /// Binds a long URL to a unique short code and persists the mapping.
    ///
    /// Exactly one record is persisted per successful call; a failed
    /// call persists nothing.
    async fn assign(&self, params: AssignParams) -> Result<Assignment, AssignError>;
}
