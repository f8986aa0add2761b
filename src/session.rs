//! Session types and the session client.
//!
//! The session client is a pure boundary adapter: it derives the
//! provider-addressable identity handle, makes exactly one provider call,
//! and returns the outcome. It never touches the session store — applying
//! results is the caller's job (see [`crate::login`]).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::provider::{IdentityProvider, ProviderError};
use crate::routing::Role;
use crate::validate::Credentials;

/// Provider-issued authenticated identity. Owned by the session store once
/// established; destroyed on sign-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub uid: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in_secs: u64,
}

/// A successful authentication: the provider session paired with the role
/// that was selected at the moment of success.
///
/// The role is client-chosen, not derived from provider claims. That is a
/// known gap carried over from the product design — routing trusts the UI
/// selection and no server-side enforcement is assumed.
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub session: Session,
    pub role: Role,
}

/// Maps a username to a provider-addressable identity handle.
///
/// The fixed-domain policy below is a stand-in for a real directory
/// lookup; keeping it behind this trait means swapping it out never
/// touches [`SessionClient`] control flow.
pub trait HandleResolver: Send + Sync {
    fn resolve(&self, username: &str) -> String;
}

/// Appends a fixed domain: `alice` -> `alice@rentsync.app`.
#[derive(Debug, Clone)]
pub struct FixedDomainResolver {
    domain: String,
}

impl FixedDomainResolver {
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self { domain: domain.into() }
    }
}

impl HandleResolver for FixedDomainResolver {
    fn resolve(&self, username: &str) -> String {
        format!("{}@{}", username, self.domain)
    }
}

/// Translates validated credentials into one provider sign-in call.
pub struct SessionClient {
    provider: Arc<dyn IdentityProvider>,
    resolver: Arc<dyn HandleResolver>,
}

impl SessionClient {
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProvider>, resolver: Arc<dyn HandleResolver>) -> Self {
        Self { provider, resolver }
    }

    /// Authenticate against the provider. Exactly one outbound call; no
    /// retry — resubmission is user-initiated.
    ///
    /// # Errors
    ///
    /// Propagates the provider failure unchanged; the rejection message is
    /// the provider's, verbatim.
    pub async fn authenticate(&self, credentials: &Credentials, role: Role) -> Result<Authenticated, ProviderError> {
        let handle = self.resolver.resolve(&credentials.username);
        tracing::debug!(%handle, ?role, "sign-in attempt");
        let session = self.provider.sign_in(&handle, &credentials.password).await?;
        tracing::debug!(uid = %session.uid, "sign-in accepted");
        Ok(Authenticated { session, role })
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
