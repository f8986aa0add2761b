//! Login flow — the authentication screen's state machine.
//!
//! STATE MACHINE
//! =============
//! `Idle` -> (submit, validation passes) -> `Submitting` -> `Authenticated`
//! (terminal, navigates away) or back to `Idle` with a single error
//! message. `Submitting` rejects further submissions, which is the core's
//! only concurrency invariant: at most one outstanding provider call per
//! form.
//!
//! The submit future is owned by the screen driving it. Dropping the
//! future mid-flight cancels the provider call and returns the form to
//! `Idle`, so a result can never be applied after the screen has been
//! torn down and a surviving form can still resubmit.

use std::sync::Arc;

use crate::routing::{Navigator, Role, RoutePath};
use crate::session::SessionClient;
use crate::store::SessionStore;
use crate::validate::{FieldErrors, validate};

/// Form lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    /// Terminal: the flow has navigated away.
    Authenticated,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Submission attempted while a provider call is outstanding.
    #[error("a submission is already in flight")]
    InFlight,
    /// Submission attempted after the flow already navigated away.
    #[error("already authenticated")]
    AlreadyAuthenticated,
    /// Field-scoped validation failures; no network contact was made.
    #[error("validation failed")]
    Invalid(FieldErrors),
    /// The provider rejected the attempt; the message is user-visible.
    #[error("{0}")]
    Rejected(String),
}

/// Drives one login form: validation, submission, store writes, and the
/// post-authentication redirect.
pub struct LoginFlow {
    client: SessionClient,
    store: SessionStore,
    navigator: Arc<dyn Navigator>,
    pub username: String,
    pub password: String,
    /// Role toggle; owner is the form's initial selection.
    pub role: Role,
    phase: Phase,
}

impl LoginFlow {
    #[must_use]
    pub fn new(client: SessionClient, store: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            client,
            store,
            navigator,
            username: String::new(),
            password: String::new(),
            role: Role::Owner,
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Submit the form. On success the session and role are written to the
    /// store and navigation replaces to the role's area; the returned
    /// target is what was navigated to.
    ///
    /// Validation failure keeps the typed fields; any completed provider
    /// attempt (accepted or rejected) clears them.
    ///
    /// # Errors
    ///
    /// [`LoginError::Invalid`] before any network call,
    /// [`LoginError::Rejected`] with the provider's message when the
    /// attempt fails, [`LoginError::InFlight`] while a call is
    /// outstanding, [`LoginError::AlreadyAuthenticated`] after success.
    pub async fn submit(&mut self) -> Result<RoutePath, LoginError> {
        match self.phase {
            Phase::Idle => {}
            Phase::Submitting => return Err(LoginError::InFlight),
            Phase::Authenticated => return Err(LoginError::AlreadyAuthenticated),
        }
        let credentials = validate(&self.username, &self.password).map_err(LoginError::Invalid)?;
        let role = self.role;

        self.phase = Phase::Submitting;
        let result = {
            // If this future is dropped at the await below, the guard
            // restores `Idle` so the form is not wedged in `Submitting`.
            let mut guard = PhaseGuard { phase: &mut self.phase, completed: false };
            let result = self.client.authenticate(&credentials, role).await;
            guard.completed = true;
            result
        };
        self.clear_fields();

        match result {
            Ok(auth) => {
                let target = auth.role.home();
                self.store.set_user(Some(auth.session));
                self.store.set_role(Some(auth.role));
                self.navigator.replace(target);
                self.phase = Phase::Authenticated;
                Ok(target)
            }
            Err(e) => {
                self.phase = Phase::Idle;
                tracing::debug!(error = %e, "sign-in failed");
                Err(LoginError::Rejected(e.to_string()))
            }
        }
    }

    fn clear_fields(&mut self) {
        self.username.clear();
        self.password.clear();
    }
}

/// Restores `Idle` unless the provider call ran to completion.
struct PhaseGuard<'a> {
    phase: &'a mut Phase,
    completed: bool,
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        if !self.completed {
            *self.phase = Phase::Idle;
        }
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
