//! API token loading and validation.

use std::path::Path;

use crate::config::{Config, TOKEN_LENGTH};
use crate::error_handling::ConfigError;

/// Resolves the API token for this run.
///
/// The `--token` flag wins; otherwise the last line of the token file is used.
/// Either way the token must be exactly [`TOKEN_LENGTH`] characters long.
///
/// # Errors
///
/// Returns `ConfigError::TokenFileUnreadable` if the fallback file cannot be
/// read, or `ConfigError::InvalidTokenLength` for a token of the wrong size.
pub fn resolve_token(config: &Config) -> Result<String, ConfigError> {
    let token = match &config.token {
        Some(token) => token.clone(),
        None => read_token_file(&config.token_file)?,
    };
    validate_token(&token)?;
    Ok(token)
}

fn read_token_file(path: &Path) -> Result<String, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| ConfigError::TokenFileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(contents.lines().last().unwrap_or_default().to_string())
}

fn validate_token(token: &str) -> Result<(), ConfigError> {
    let length = token.chars().count();
    if length != TOKEN_LENGTH {
        return Err(ConfigError::InvalidTokenLength { length });
    }
    Ok(())
}
