use jiff::SignedDuration;
use typed_builder::TypedBuilder;

/// Mappings live for half an hour unless the caller asks otherwise.
pub const DEFAULT_TTL: SignedDuration = SignedDuration::from_mins(30);

/// Configuration for an assigner service.
///
/// Passed in at construction; the service reads no ambient process
/// state.
#[derive(Debug, Clone, TypedBuilder)]
pub struct AssignerConfig {
    /// Base URL prefixed to short codes when building the short URL.
    #[builder(setter(into))]
    pub base_url: String,
    /// Lifetime applied when the caller does not request a valid one.
    #[builder(default = DEFAULT_TTL)]
    pub default_ttl: SignedDuration,
}
