use crate::resolver::{ResolveOutcome, Resolver};
use async_trait::async_trait;
use jiff::Timestamp;
use snaplink_core::repository::Result;
use snaplink_core::{ReadRepository, ShortCode};
use std::sync::Arc;
use tracing::{debug, trace};

/// Service answering short code lookups.
///
/// Uses a read-only repository view and evaluates expiry lazily against
/// the current wall clock. Nothing in storage changes when a code
/// expires; it simply starts resolving to [`ResolveOutcome::Expired`].
#[derive(Debug, Clone)]
pub struct ResolverService<R> {
    repository: Arc<R>,
}

impl<R: ReadRepository> ResolverService<R> {
    /// Creates a new `ResolverService` with the given repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

#[async_trait]
impl<R: ReadRepository> Resolver for ResolverService<R> {
    async fn resolve(&self, code: &ShortCode) -> Result<ResolveOutcome> {
        trace!(code = %code, "resolving short code");

        let Some(mapping) = self.repository.get(code).await? else {
            trace!(code = %code, "short code not found");
            return Ok(ResolveOutcome::NotFound);
        };

        if mapping.is_expired_at(Timestamp::now()) {
            debug!(code = %code, "short code has expired");
            return Ok(ResolveOutcome::Expired);
        }

        debug!(code = %code, url = %mapping.long_url, "resolved short code");
        Ok(ResolveOutcome::Found(mapping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;
    use snaplink_core::{Mapping, Repository};
    use snaplink_storage::InMemoryRepository;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    fn mapping(url: &str, expires_at: Timestamp) -> Mapping {
        Mapping {
            long_url: url.to_string(),
            created_at: expires_at - SignedDuration::from_mins(30),
            expires_at,
        }
    }

    async fn service_with_mapping(
        code: &ShortCode,
        mapping: Mapping,
    ) -> ResolverService<InMemoryRepository> {
        let repo = InMemoryRepository::new();
        repo.insert(code, mapping).await.unwrap();
        ResolverService::new(repo)
    }

    #[tokio::test]
    async fn resolve_live_code() {
        let c = code("abc123");
        let future = Timestamp::now() + SignedDuration::from_hours(1);
        let service = service_with_mapping(&c, mapping("https://example.com", future)).await;

        let outcome = service.resolve(&c).await.unwrap();
        let ResolveOutcome::Found(found) = outcome else {
            panic!("expected Found, got {outcome:?}");
        };
        assert_eq!(found.long_url, "https://example.com");
    }

    #[tokio::test]
    async fn resolve_unknown_code() {
        let service = ResolverService::new(InMemoryRepository::new());

        let outcome = service.resolve(&code("nope")).await.unwrap();
        assert_eq!(outcome, ResolveOutcome::NotFound);
    }

    #[tokio::test]
    async fn resolve_expired_code() {
        let c = code("expired");
        let past = Timestamp::now() - SignedDuration::from_secs(1);
        let service = service_with_mapping(&c, mapping("https://example.com", past)).await;

        let outcome = service.resolve(&c).await.unwrap();
        assert_eq!(outcome, ResolveOutcome::Expired);
    }

    #[tokio::test]
    async fn resolve_is_idempotent() {
        let c = code("abc123");
        let future = Timestamp::now() + SignedDuration::from_hours(1);
        let service = service_with_mapping(&c, mapping("https://example.com", future)).await;

        let first = service.resolve(&c).await.unwrap();
        let second = service.resolve(&c).await.unwrap();

        // Same outcome, same expiry: resolving never refreshes the TTL.
        assert_eq!(first, second);
        let ResolveOutcome::Found(found) = second else {
            panic!("expected Found");
        };
        assert_eq!(found.expires_at, future);
    }
}
