//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Initializes the HTTP client shared by all workers.
///
/// No request timeout is set; transport defaults apply.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new().user_agent(USER_AGENT).build()?;
    Ok(client)
}
