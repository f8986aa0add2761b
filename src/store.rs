//! Observable session store — the single source of truth for auth state.
//!
//! DESIGN
//! ======
//! The original design used an implicit process-wide singleton. Here the
//! store is an injectable handle over a `tokio::sync::watch` channel:
//! tests build isolated instances, cloning the handle shares the same
//! state, and observers subscribe explicitly. The watch channel gives the
//! "last writer wins, observers see a consistent snapshot" contract in a
//! multi-threaded runtime, and notifies on every mutation whether or not
//! the value changed.
//!
//! Only session-client result handling (the login flow) and the
//! process-level bootstrap step may call the mutators — UI code routes
//! through the login flow.

use tokio::sync::watch;

use crate::routing::Role;
use crate::session::Session;

/// Consistent copy of the store state.
#[derive(Debug, Clone)]
pub struct AuthSnapshot {
    pub user: Option<Session>,
    pub role: Option<Role>,
    /// True only during the indeterminate window before the provider's
    /// initial auth state is known. No role-based routing while true.
    pub loading: bool,
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self { user: None, role: None, loading: true }
    }
}

/// Injectable, observable auth state container. Clones share state.
#[derive(Clone)]
pub struct SessionStore {
    tx: watch::Sender<AuthSnapshot>,
}

impl SessionStore {
    /// New store in the initial state: no user, no role, loading.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(AuthSnapshot::default());
        Self { tx }
    }

    /// Replace the current user. Independent of the other fields.
    pub fn set_user(&self, user: Option<Session>) {
        self.tx.send_modify(|s| s.user = user);
    }

    /// Replace the current role. Independent of the other fields.
    pub fn set_role(&self, role: Option<Role>) {
        self.tx.send_modify(|s| s.role = role);
    }

    /// Replace the loading flag. Independent of the other fields.
    pub fn set_loading(&self, loading: bool) {
        self.tx.send_modify(|s| s.loading = loading);
    }

    #[must_use]
    pub fn snapshot(&self) -> AuthSnapshot {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes. Every mutation marks the receiver
    /// changed, including writes of an equal value.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.tx.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the provider's initial auth state and end the loading window.
///
/// This is the process-level provider-state step: any session the provider
/// restored is written first, then `loading` clears so routing may begin.
pub fn bootstrap(store: &SessionStore, restored: Option<Session>) {
    match restored {
        Some(session) => {
            tracing::debug!(uid = %session.uid, "restored provider session");
            store.set_user(Some(session));
        }
        None => tracing::debug!("no restored session"),
    }
    store.set_loading(false);
}

/// Clear the authenticated identity and role.
pub fn sign_out(store: &SessionStore) {
    store.set_user(None);
    store.set_role(None);
    tracing::debug!("signed out");
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
