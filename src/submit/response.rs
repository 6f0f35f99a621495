//! Response body of the lead API.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Body returned by the API for a submitted lead.
///
/// Every field is optional on the wire. Missing, `null` or mistyped values read
/// as their defaults without affecting the other fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeadSendingResponse {
    #[serde(deserialize_with = "lenient")]
    pub status: String,
    #[serde(deserialize_with = "lenient")]
    pub message: String,
    #[serde(deserialize_with = "lenient")]
    pub version: String,
    #[serde(deserialize_with = "lenient")]
    pub code: i64,
    #[serde(deserialize_with = "lenient")]
    pub data: LeadSendingResponseData,
}

/// Lead-level part of the response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeadSendingResponseData {
    #[serde(deserialize_with = "lenient")]
    pub lead_status: String,
    #[serde(deserialize_with = "lenient")]
    pub reject_reason: String,
    #[serde(deserialize_with = "lenient")]
    pub lead_id: Option<i64>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value.clone()).unwrap_or_else(|e| {
        log::debug!("Ignoring response field {} ({})", value, e);
        T::default()
    }))
}

/// Parses a response body, falling back to an empty response.
///
/// Fields of the wrong type are dropped one by one. A body that is not a JSON
/// object at all is logged and treated as if all fields were empty; it never
/// fails the lead.
pub fn parse_response_body(body: &[u8]) -> LeadSendingResponse {
    match serde_json::from_slice(body) {
        Ok(response) => response,
        Err(e) => {
            log::warn!(
                "Failed to parse lead API response ({}): {}",
                e,
                String::from_utf8_lossy(body)
            );
            LeadSendingResponse::default()
        }
    }
}
