use super::*;

// =============================================================================
// AuthConfig::from_env — env manipulation requires unsafe in edition 2024.
// We wrap in unsafe blocks; these tests run serially (single test thread).
// =============================================================================

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_auth_env() {
    unsafe {
        std::env::remove_var("AUTH_API_KEY");
        std::env::remove_var("AUTH_BASE_URL");
        std::env::remove_var("AUTH_EMULATOR_HOST");
        std::env::remove_var("AUTH_IDENTITY_DOMAIN");
        std::env::remove_var("AUTH_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("AUTH_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_missing_api_key_errors() {
    unsafe { clear_auth_env() };
    let err = AuthConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("AUTH_API_KEY"));
}

#[test]
fn from_env_api_key_only_uses_defaults() {
    unsafe {
        clear_auth_env();
        std::env::set_var("AUTH_API_KEY", "key123");
    }
    let config = AuthConfig::from_env().unwrap();
    assert_eq!(config.api_key, "key123");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert!(config.emulator_host.is_none());
    assert_eq!(config.identity_domain, DEFAULT_IDENTITY_DOMAIN);
    assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(config.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
    unsafe { clear_auth_env() };
}

#[test]
fn from_env_strips_trailing_slash_from_base_url() {
    unsafe {
        clear_auth_env();
        std::env::set_var("AUTH_API_KEY", "key123");
        std::env::set_var("AUTH_BASE_URL", "https://auth.example.com/");
    }
    let config = AuthConfig::from_env().unwrap();
    assert_eq!(config.base_url, "https://auth.example.com");
    unsafe { clear_auth_env() };
}

#[test]
fn from_env_empty_emulator_host_treated_as_unset() {
    unsafe {
        clear_auth_env();
        std::env::set_var("AUTH_API_KEY", "key123");
        std::env::set_var("AUTH_EMULATOR_HOST", "");
    }
    let config = AuthConfig::from_env().unwrap();
    assert!(config.emulator_host.is_none());
    unsafe { clear_auth_env() };
}

#[test]
fn from_env_invalid_timeout_falls_back_to_default() {
    unsafe {
        clear_auth_env();
        std::env::set_var("AUTH_API_KEY", "key123");
        std::env::set_var("AUTH_REQUEST_TIMEOUT_SECS", "not-a-number");
    }
    let config = AuthConfig::from_env().unwrap();
    assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    unsafe { clear_auth_env() };
}

// =============================================================================
// effective_base_url
// =============================================================================

fn base_config() -> AuthConfig {
    AuthConfig {
        api_key: "key123".into(),
        base_url: DEFAULT_BASE_URL.into(),
        emulator_host: None,
        identity_domain: DEFAULT_IDENTITY_DOMAIN.into(),
        request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
    }
}

#[test]
fn effective_base_url_without_emulator_is_base() {
    let config = base_config();
    assert_eq!(config.effective_base_url(), DEFAULT_BASE_URL);
}

#[test]
fn effective_base_url_with_emulator_is_proxied() {
    let mut config = base_config();
    config.emulator_host = Some("127.0.0.1:9099".into());
    assert_eq!(
        config.effective_base_url(),
        "http://127.0.0.1:9099/identitytoolkit.googleapis.com"
    );
}
