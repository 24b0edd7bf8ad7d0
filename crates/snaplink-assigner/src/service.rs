use crate::assigner::{AssignParams, Assigner, Assignment};
use crate::config::AssignerConfig;
use crate::error::AssignError;
use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use snaplink_core::{Mapping, Repository, ShortCode};
use snaplink_generator::Generator;
use std::sync::Arc;
use tracing::debug;

/// A concrete implementation of the [`Assigner`] trait.
///
/// This service wraps a [`Repository`] and a [`Generator`] to handle:
/// - short code selection (caller-provided or generated)
/// - input and code validation
/// - the TTL policy
/// - persistence, treating a storage conflict as a recoverable error
///
/// The repository owns uniqueness. The pre-insert existence check is a
/// fast path for a clear conflict answer; a concurrent assigner may
/// still win the insert, and that also surfaces as
/// [`AssignError::Conflict`].
#[derive(Debug, Clone)]
pub struct AssignerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    config: AssignerConfig,
}

impl<R: Repository, G: Generator> AssignerService<R, G> {
    /// Creates a new `AssignerService`.
    pub fn new(repository: R, generator: G, config: AssignerConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            config,
        }
    }

    /// Resolves the requested lifetime to a concrete duration.
    ///
    /// Only strictly positive minute counts are honored; anything else
    /// falls back to the configured default rather than producing a
    /// past or instant expiry.
    fn ttl(&self, requested_minutes: Option<i64>) -> SignedDuration {
        match requested_minutes {
            Some(minutes) if minutes > 0 => SignedDuration::from_secs(minutes.saturating_mul(60)),
            _ => self.config.default_ttl,
        }
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Assigner for AssignerService<R, G> {
    async fn assign(&self, params: AssignParams) -> Result<Assignment, AssignError> {
        if params.long_url.is_empty() {
            return Err(AssignError::Validation("long url is required".to_string()));
        }

        // Custom codes are validated; generated ones only draw from the
        // allowed charset.
        let short_code = match params.custom_code {
            Some(custom) => ShortCode::new(custom)?,
            None => self.generator.generate().into(),
        };

        if self.repository.exists(&short_code).await? {
            return Err(AssignError::Conflict(short_code.to_string()));
        }

        let created_at = Timestamp::now();
        let expires_at = created_at
            .checked_add(self.ttl(params.expires_in_minutes))
            .map_err(|e| AssignError::Validation(format!("expiry out of range: {e}")))?;

        let mapping = Mapping {
            long_url: params.long_url,
            created_at,
            expires_at,
        };

        // The insert can still lose a race with a concurrent assigner;
        // the repository signals that with a conflict, mapped to
        // `AssignError::Conflict` by the `From` impl.
        self.repository.insert(&short_code, mapping.clone()).await?;

        debug!(code = %short_code, expires_at = %expires_at, "assigned short code");

        let short_url = short_code.to_url(&self.config.base_url);

        Ok(Assignment {
            short_code,
            short_url,
            mapping,
        })
    }
}
