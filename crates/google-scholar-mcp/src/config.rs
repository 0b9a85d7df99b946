//! Configuration and credential resolution for the SerpAPI client.

use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for SerpAPI.
    pub const BASE_URL: &str = "https://serpapi.com";

    /// JSON search endpoint path.
    pub const SEARCH_PATH: &str = "/search.json";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default number of results per search.
    pub const DEFAULT_NUM_RESULTS: u32 = 10;

    /// Maximum results SerpAPI returns per Scholar page. Values above the
    /// cap are clamped, not rejected.
    pub const MAX_NUM_RESULTS: u32 = 20;

    /// Environment variable holding the SerpAPI key.
    pub const KEY_ENV_VAR: &str = "SERPAPI_KEY";
}

/// Client configuration.
///
/// The API key is an explicit value resolved once and handed to the client
/// at construction; there is no process-global credential state.
#[derive(Debug, Clone)]
pub struct Config {
    /// SerpAPI key.
    pub api_key: String,

    /// Base URL (overridable for testing with mock servers).
    pub base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration with the given API key.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: "test-key".to_string(),
            base_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration by resolving the key from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if no key is found through any
    /// channel.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(resolve_key(None)?))
    }
}

/// Resolve the SerpAPI key.
///
/// Resolution order, first non-empty match wins:
/// 1. the `explicit` value supplied by the caller,
/// 2. the `SERPAPI_KEY` environment variable,
/// 3. a `.env` file in the current working directory.
///
/// # Errors
///
/// Returns [`ConfigError::MissingKey`] when no channel yields a key.
pub fn resolve_key(explicit: Option<&str>) -> Result<String, ConfigError> {
    resolve_key_from(explicit, std::env::var(api::KEY_ENV_VAR).ok(), Path::new(".env"))
}

/// Resolution with injectable sources, so tests never touch process state.
fn resolve_key_from(
    explicit: Option<&str>,
    env_value: Option<String>,
    dotenv_path: &Path,
) -> Result<String, ConfigError> {
    if let Some(key) = explicit {
        let key = key.trim();
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }

    if let Some(key) = env_value {
        let key = key.trim();
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }

    if let Some(key) = read_dotenv_key(dotenv_path) {
        return Ok(key);
    }

    Err(ConfigError::MissingKey)
}

/// Read `SERPAPI_KEY` from a `.env` file without mutating the process
/// environment.
fn read_dotenv_key(path: &Path) -> Option<String> {
    let iter = dotenv::from_path_iter(path).ok()?;
    for item in iter {
        let Ok((name, value)) = item else { continue };
        if name == api::KEY_ENV_VAR && !value.trim().is_empty() {
            return Some(value.trim().to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_uses_defaults() {
        let config = Config::new("key".to_string());
        assert_eq!(config.base_url, api::BASE_URL);
        assert_eq!(config.request_timeout, api::REQUEST_TIMEOUT);
    }

    #[test]
    fn test_explicit_key_wins() {
        let key = resolve_key_from(
            Some("explicit"),
            Some("from-env".to_string()),
            Path::new("/nonexistent/.env"),
        )
        .unwrap();
        assert_eq!(key, "explicit");
    }

    #[test]
    fn test_blank_explicit_key_falls_through_to_env() {
        let key = resolve_key_from(
            Some("   "),
            Some("from-env".to_string()),
            Path::new("/nonexistent/.env"),
        )
        .unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn test_no_key_anywhere_fails() {
        let err = resolve_key_from(None, None, Path::new("/nonexistent/.env")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey));
    }

    #[test]
    fn test_env_value_beats_dotenv_file() {
        let dir = tempfile::tempdir().unwrap();
        let dotenv = dir.path().join(".env");
        std::fs::write(&dotenv, "SERPAPI_KEY=from-file\n").unwrap();

        let key = resolve_key_from(None, Some("from-env".to_string()), &dotenv).unwrap();
        assert_eq!(key, "from-env");

        let key = resolve_key_from(None, None, &dotenv).unwrap();
        assert_eq!(key, "from-file");
    }

    #[test]
    fn test_dotenv_file_ignores_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let dotenv = dir.path().join(".env");
        std::fs::write(&dotenv, "OTHER_KEY=abc\nSERPAPI_KEY=scholar-key\n").unwrap();

        assert_eq!(read_dotenv_key(&dotenv).as_deref(), Some("scholar-key"));
    }
}
