use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /shorten`.
///
/// `expiresIn` is accepted as any JSON value. Callers of the original
/// service sent numbers and numeric strings interchangeably, so both
/// are honored here; anything else falls back to the default TTL.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[serde(default)]
    pub long_url: Option<String>,
    #[serde(default)]
    pub custom_code: Option<String>,
    #[serde(default)]
    pub expires_in: Option<Value>,
}

impl ShortenRequest {
    /// Extracts the requested lifetime in whole minutes, if the caller
    /// sent something numeric.
    pub fn expires_in_minutes(&self) -> Option<i64> {
        match &self.expires_in {
            Some(Value::Number(n)) => n.as_f64().map(|minutes| minutes as i64),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok().map(|minutes| minutes as i64),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
    pub expires_at: Timestamp,
}
