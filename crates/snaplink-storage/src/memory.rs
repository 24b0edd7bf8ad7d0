use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use snaplink_core::error::StorageError;
use snaplink_core::repository::{ReadRepository, Repository, Result};
use snaplink_core::{Mapping, ShortCode};
use std::sync::Arc;

/// In-memory implementation of the repository contract using DashMap.
///
/// Clones share the same underlying map, so an assigner and a resolver
/// built from clones of one repository see the same mappings.
///
/// Expired mappings are returned as stored and still occupy their code;
/// judging expiry is the resolver's job, not the store's.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<DashMap<String, Mapping>>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Arc::new(DashMap::with_capacity(capacity)),
        }
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<Mapping>> {
        Ok(self
            .storage
            .get(code.as_str())
            .map(|entry| entry.value().clone()))
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        Ok(self.storage.contains_key(code.as_str()))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, code: &ShortCode, mapping: Mapping) -> Result<()> {
        // The entry API makes check-and-insert atomic for the key.
        match self.storage.entry(code.as_str().to_owned()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(code.to_string())),
            Entry::Vacant(vacant) => {
                vacant.insert(mapping);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::{SignedDuration, Timestamp};

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

    fn live_mapping(url: &str) -> Mapping {
        mapping(url, Timestamp::now() + SignedDuration::from_hours(1))
    }

    fn expired_mapping(url: &str) -> Mapping {
        mapping(url, Timestamp::now() - SignedDuration::from_secs(1))
    }

    #[tokio::test]
    async fn insert_and_get() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc123"), live_mapping("https://example.com"))
            .await
            .unwrap();

        let result = repo.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.long_url, "https://example.com");
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        let result = repo.get(&code("nope")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn insert_conflict() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc123"), live_mapping("https://example.com"))
            .await
            .unwrap();

        let err = repo
            .insert(&code("abc123"), live_mapping("https://other.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Conflict(_)));
    }

    #[tokio::test]
    async fn insert_conflict_even_when_expired() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc123"), expired_mapping("https://old.com"))
            .await
            .unwrap();

        // Codes are never reused, so expiry does not free the slot.
        let err = repo
            .insert(&code("abc123"), live_mapping("https://new.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Conflict(_)));

        let kept = repo.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(kept.long_url, "https://old.com");
    }

    #[tokio::test]
    async fn get_returns_expired_mapping_as_stored() {
        let repo = InMemoryRepository::new();
        let expired = expired_mapping("https://example.com");

        repo.insert(&code("abc123"), expired.clone()).await.unwrap();

        let result = repo.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result, expired);
    }

    #[tokio::test]
    async fn exists_checks() {
        let repo = InMemoryRepository::new();

        assert!(!repo.exists(&code("abc123")).await.unwrap());

        repo.insert(&code("abc123"), live_mapping("https://example.com"))
            .await
            .unwrap();

        assert!(repo.exists(&code("abc123")).await.unwrap());
    }

    #[tokio::test]
    async fn exists_counts_expired_codes() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc123"), expired_mapping("https://example.com"))
            .await
            .unwrap();

        assert!(repo.exists(&code("abc123")).await.unwrap());
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let repo = InMemoryRepository::new();
        let view = repo.clone();

        repo.insert(&code("abc123"), live_mapping("https://example.com"))
            .await
            .unwrap();

        assert!(view.exists(&code("abc123")).await.unwrap());
    }

    #[tokio::test]
    async fn concurrent_access() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            let handle = tokio::spawn(async move {
                let c = ShortCode::new_unchecked(format!("code-{:03}", i));
                repo.insert(&c, live_mapping(&format!("https://example{}.com", i)))
                    .await
                    .unwrap();
            });
            handles.push(handle);
        }

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            let handle = tokio::spawn(async move {
                let c = ShortCode::new_unchecked(format!("code-{:03}", i));
                let _ = repo.get(&c).await;
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let c = ShortCode::new_unchecked(format!("code-{:03}", i));
            let result = repo.get(&c).await.unwrap().unwrap();
            assert_eq!(result.long_url, format!("https://example{}.com", i));
        }
    }
}
