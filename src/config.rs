//! Auth configuration parsed from environment variables.

pub const DEFAULT_BASE_URL: &str = "https://identitytoolkit.googleapis.com";
pub const DEFAULT_IDENTITY_DOMAIN: &str = "rentsync.app";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var: {var}")]
    MissingApiKey { var: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Provider API key, sent as the `key` query parameter.
    pub api_key: String,
    /// Provider base URL (no trailing slash).
    pub base_url: String,
    /// Local auth emulator `host:port`; overrides `base_url` when set.
    pub emulator_host: Option<String>,
    /// Fixed domain appended to usernames to form identity handles.
    pub identity_domain: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl AuthConfig {
    /// Build typed auth config from environment variables.
    ///
    /// Required:
    /// - `AUTH_API_KEY`
    ///
    /// Optional:
    /// - `AUTH_BASE_URL`: provider base URL (default identity toolkit)
    /// - `AUTH_EMULATOR_HOST`: `host:port` of a local auth emulator
    /// - `AUTH_IDENTITY_DOMAIN`: default `rentsync.app`
    /// - `AUTH_REQUEST_TIMEOUT_SECS`: default 30
    /// - `AUTH_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `AUTH_API_KEY` is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            std::env::var("AUTH_API_KEY").map_err(|_| ConfigError::MissingApiKey { var: "AUTH_API_KEY".into() })?;
        let base_url = std::env::var("AUTH_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let emulator_host = std::env::var("AUTH_EMULATOR_HOST").ok().filter(|v| !v.is_empty());
        let identity_domain =
            std::env::var("AUTH_IDENTITY_DOMAIN").unwrap_or_else(|_| DEFAULT_IDENTITY_DOMAIN.to_string());

        Ok(Self {
            api_key,
            base_url,
            emulator_host,
            identity_domain,
            request_timeout_secs: env_parse_u64("AUTH_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout_secs: env_parse_u64("AUTH_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        })
    }

    /// Base URL with the emulator override applied. The emulator proxies
    /// the provider API under its own hostname-prefixed path.
    #[must_use]
    pub fn effective_base_url(&self) -> String {
        match &self.emulator_host {
            Some(host) => format!("http://{host}/identitytoolkit.googleapis.com"),
            None => self.base_url.clone(),
        }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
