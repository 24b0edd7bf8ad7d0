pub mod health;
pub mod url;

pub use health::HealthResponse;
pub use url::{ShortenRequest, ShortenResponse};
