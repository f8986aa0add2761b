//! Identity provider boundary — password sign-in over the provider's REST API.
//!
//! DESIGN
//! ======
//! The provider is an opaque external service behind the [`IdentityProvider`]
//! trait so the session client and login flow can run against mocks or a
//! local fake in tests. [`HttpIdentityProvider`] is the production
//! implementation: one `signInWithPassword` call, JSON in and out, with the
//! provider's rejection message carried through verbatim.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::session::Session;

const SIGN_IN_PATH: &str = "/v1/accounts:signInWithPassword";

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider rejected the credentials. Display is the provider's
    /// message verbatim — this is what the user sees.
    #[error("{message}")]
    Rejected { message: String },
    #[error("provider unreachable: {0}")]
    Transport(String),
    #[error("unexpected provider response: {0}")]
    UnexpectedResponse(String),
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
}

/// External identity provider seam: exactly one operation.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange an identity handle and password for a session.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Rejected`] when the provider refuses the
    /// credentials, [`ProviderError::Transport`] when it is unreachable.
    async fn sign_in(&self, identity_handle: &str, password: &str) -> Result<Session, ProviderError>;
}

/// REST client for the provider's password sign-in endpoint.
pub struct HttpIdentityProvider {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpIdentityProvider {
    /// Build the HTTP provider from config, honoring the emulator override.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: &AuthConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| ProviderError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.effective_base_url(), api_key: config.api_key.clone() })
    }
}

#[async_trait::async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn sign_in(&self, identity_handle: &str, password: &str) -> Result<Session, ProviderError> {
        let url = format!("{}{}?key={}", self.base_url, SIGN_IN_PATH, self.api_key);
        let body = SignInRequest { email: identity_handle, password, return_secure_token: true };

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if status.is_success() {
            parse_session(&text)
        } else {
            Err(parse_rejection(status.as_u16(), &text))
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    email: String,
    id_token: String,
    refresh_token: String,
    /// Seconds until `id_token` expires, as a decimal string.
    expires_in: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

fn parse_session(text: &str) -> Result<Session, ProviderError> {
    let resp: SignInResponse =
        serde_json::from_str(text).map_err(|_| ProviderError::UnexpectedResponse(text.to_owned()))?;
    let expires_in_secs = resp
        .expires_in
        .parse::<u64>()
        .map_err(|_| ProviderError::UnexpectedResponse(format!("bad expiresIn: {}", resp.expires_in)))?;
    Ok(Session {
        uid: resp.local_id,
        email: resp.email,
        id_token: resp.id_token,
        refresh_token: resp.refresh_token,
        expires_in_secs,
    })
}

fn parse_rejection(status: u16, text: &str) -> ProviderError {
    match serde_json::from_str::<ErrorBody>(text) {
        Ok(body) => ProviderError::Rejected { message: body.error.message },
        Err(_) => ProviderError::UnexpectedResponse(format!("{status}: {text}")),
    }
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod tests;
