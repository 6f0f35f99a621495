//! HTTP client for the lead API.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use super::reply::Reply;
use super::response::parse_response_body;
use crate::config::{Config, CONTENT_TYPE_JSON, HEADER_TOOL_VERSION, TOOL_VERSION};
use crate::error_handling::TransportError;
use crate::lead::Lead;

/// Sends leads to the configured endpoint with the run's token.
///
/// Holds no per-request state, so one instance is shared by all workers.
#[derive(Clone)]
pub struct LeadClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl LeadClient {
    /// Creates a client for `config.api_url` authenticated with `token`.
    pub fn new(http: reqwest::Client, config: &Config, token: String) -> Self {
        Self {
            http,
            endpoint: config.api_url.clone(),
            token,
        }
    }

    /// Submits one lead.
    ///
    /// A 200 response is parsed into a [`Reply`] (an unparsable body gives an
    /// empty reply); any other status gives an `error` reply. No retries.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` when the request cannot be sent or the body
    /// cannot be read (connection refused, TLS failure, reset, ...).
    pub async fn send(&self, lead: &Lead) -> Result<Reply, TransportError> {
        let payload = serde_json::to_vec(lead)?;
        log::debug!("Lead payload: {}", String::from_utf8_lossy(&payload));

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(HEADER_TOOL_VERSION, TOOL_VERSION)
            .body(payload)
            .send()
            .await
            .map_err(|source| self.request_error(source))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|source| self.request_error(source))?;

        log::debug!("request Url: {}", self.endpoint);
        log::debug!("response Status: {}", status);
        log::debug!("response Headers: {:?}", headers);
        log::debug!("response Body: {}", String::from_utf8_lossy(&body));

        if status != StatusCode::OK {
            log::warn!("Lead API answered {} for a lead", status);
            return Ok(Reply::http_error(status));
        }
        let parsed = parse_response_body(&body);
        log::debug!("API version: {}, code: {}", parsed.version, parsed.code);
        Ok(Reply::from_response(parsed))
    }

    fn request_error(&self, source: reqwest::Error) -> TransportError {
        TransportError::Request {
            url: self.endpoint.clone(),
            source,
        }
    }
}
