//! View configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "";
pub const DEFAULT_PLACEHOLDER_TITLE: &str = "Account name";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₽";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The API base URL is neither absolute nor root-relative.
    #[error("invalid api base url: {0}")]
    InvalidBaseUrl(String),
}

/// Runtime settings shared by pages and the HTTP resource client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    /// Prefix for resource endpoints, without a trailing slash. Empty means
    /// same-origin root.
    pub api_base_url: String,
    /// Title shown when no account is loaded.
    pub placeholder_title: String,
    /// Symbol rendered after each transaction sum.
    pub currency_symbol: String,
    pub request_timeout_secs: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            placeholder_title: DEFAULT_PLACEHOLDER_TITLE.to_owned(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ViewConfig {
    /// Build config from environment variables.
    ///
    /// All optional:
    /// - `LEDGERVIEW_API_BASE_URL`: `http(s)://...` or `/prefix`; default same-origin root
    /// - `LEDGERVIEW_PLACEHOLDER_TITLE`: default `"Account name"`
    /// - `LEDGERVIEW_CURRENCY`: default `"₽"`
    /// - `LEDGERVIEW_REQUEST_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for a malformed base URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = match std::env::var("LEDGERVIEW_API_BASE_URL") {
            Ok(raw) => parse_base_url(&raw)?,
            Err(_) => DEFAULT_API_BASE_URL.to_owned(),
        };
        let placeholder_title =
            std::env::var("LEDGERVIEW_PLACEHOLDER_TITLE").unwrap_or_else(|_| DEFAULT_PLACEHOLDER_TITLE.to_owned());
        let currency_symbol =
            std::env::var("LEDGERVIEW_CURRENCY").unwrap_or_else(|_| DEFAULT_CURRENCY_SYMBOL.to_owned());
        let request_timeout_secs = env_parse_u64("LEDGERVIEW_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS);

        Ok(Self { api_base_url, placeholder_title, currency_symbol, request_timeout_secs })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key).map_or(default, |v| v.trim().parse::<u64>().unwrap_or(default))
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") || trimmed.starts_with('/') {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::InvalidBaseUrl(raw.to_owned()))
    }
}
