use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A persisted association between a short code and its target URL.
///
/// Mappings are created once and never mutated. An expired mapping stays
/// in storage so its code is never handed out again; it simply stops
/// resolving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    /// The long URL the short code redirects to. Stored opaquely, not
    /// validated as a well-formed URL.
    pub long_url: String,
    /// When the mapping was created.
    pub created_at: Timestamp,
    /// When the mapping stops resolving. Always later than `created_at`.
    pub expires_at: Timestamp,
}

impl Mapping {
    /// Whether the mapping is past its expiry at `now`.
    ///
    /// The comparison is strict: a mapping resolved at exactly
    /// `expires_at` is still live.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;

    fn mapping_expiring_at(expires_at: Timestamp) -> Mapping {
        Mapping {
            long_url: "https://example.com".to_string(),
            created_at: expires_at - SignedDuration::from_mins(30),
            expires_at,
        }
    }

    #[test]
    fn live_before_expiry() {
        let expires_at = Timestamp::from_second(1_700_000_000).unwrap();
        let mapping = mapping_expiring_at(expires_at);

        assert!(!mapping.is_expired_at(expires_at - SignedDuration::from_secs(1)));
    }

    #[test]
    fn live_at_exact_expiry() {
        let expires_at = Timestamp::from_second(1_700_000_000).unwrap();
        let mapping = mapping_expiring_at(expires_at);

        assert!(!mapping.is_expired_at(expires_at));
    }

    #[test]
    fn expired_after_expiry() {
        let expires_at = Timestamp::from_second(1_700_000_000).unwrap();
        let mapping = mapping_expiring_at(expires_at);

        assert!(mapping.is_expired_at(expires_at + SignedDuration::from_secs(1)));
    }
}
