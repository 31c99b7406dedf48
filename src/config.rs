/// Startup configuration: the OpenHub API key.
use thiserror::Error;

/// Environment variable holding the OpenHub API key.
pub const API_KEY_VAR: &str = "OH_API_KEY";

/// Fatal configuration errors detected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `OH_API_KEY` is unset or empty.
    #[error(
        "Set {API_KEY_VAR} to your OpenHub API key. If you don't have one, \
         see https://www.openhub.net/accounts/<your_login>/api_keys/new"
    )]
    MissingApiKey,
}

/// Read the API key from the process environment.
///
/// # Errors
///
/// Returns `ConfigError::MissingApiKey` when the variable is unset or empty.
pub fn api_key_from_env() -> Result<String, ConfigError> {
    api_key_from(std::env::var(API_KEY_VAR).ok())
}

/// An empty key is as useless as an absent one; treat both as missing.
fn api_key_from(raw: Option<String>) -> Result<String, ConfigError> {
    match raw {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_present() {
        let key = api_key_from(Some("s3cret".to_owned())).unwrap();
        assert_eq!(key, "s3cret");
    }

    #[test]
    fn test_key_absent() {
        assert!(matches!(api_key_from(None), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_key_empty() {
        assert!(matches!(
            api_key_from(Some(String::new())),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn test_message_points_at_key_page() {
        let msg = ConfigError::MissingApiKey.to_string();
        assert!(msg.contains(API_KEY_VAR));
        assert!(msg.contains("api_keys/new"));
    }
}
