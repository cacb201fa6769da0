//! HTTP client initialization.

use reqwest::redirect::Policy;
use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS};
use crate::error_handling::InitializationError;

/// Builds the shared upstream HTTP client.
///
/// Configured with:
/// - User-Agent from the config
/// - Redirect following (up to `MAX_REDIRECT_HOPS`)
///
/// No client-wide timeout is set: every request carries its own (profile page,
/// story page and existence check differ).
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be built,
/// e.g. when the User-Agent is not a valid header value.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .user_agent(config.user_agent.clone())
        .redirect(Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_default_config() {
        assert!(init_client(&Config::default()).is_ok());
    }

    #[test]
    fn test_init_client_rejects_invalid_user_agent() {
        let config = Config {
            user_agent: "bad\nagent".to_string(),
            ..Default::default()
        };
        let result = init_client(&config);
        assert!(matches!(result, Err(InitializationError::HttpClientError(_))));
    }
}
