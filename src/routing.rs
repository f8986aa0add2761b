//! Routing policy — roles, route targets, and the startup redirect.
//!
//! DESIGN
//! ======
//! Navigation is a one-way `replace` behind the [`Navigator`] trait; the
//! policy never pushes, so back-navigation cannot return to the login
//! screen. The startup redirect runs as a spawned task held by an RAII
//! guard: dropping the guard (screen teardown) aborts the timer, so a
//! stale navigation can never fire after the screen has left.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::store::{AuthSnapshot, SessionStore};

/// Delay between the provider's initial auth state becoming known and the
/// automatic redirect to the login screen.
pub const STARTUP_REDIRECT_DELAY: Duration = Duration::from_millis(2500);

/// Application area selected by the user before submission. Exactly one
/// role is active at a time; it is not validated server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Renter,
}

impl Role {
    /// The application area entered after authenticating with this role.
    #[must_use]
    pub const fn home(self) -> RoutePath {
        match self {
            Role::Owner => RoutePath::OwnerHome,
            Role::Renter => RoutePath::RenterHome,
        }
    }
}

/// Navigation targets used by this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePath {
    Login,
    OwnerHome,
    RenterHome,
}

impl RoutePath {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RoutePath::Login => "/auth/login",
            RoutePath::OwnerHome => "/admin",
            RoutePath::RenterHome => "/client",
        }
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Navigation seam: one-way, non-stacking replacement of the current route.
pub trait Navigator: Send + Sync {
    fn replace(&self, target: RoutePath);
}

/// Pure routing decision from store state.
///
/// Returns `None` while the initial auth state is indeterminate — no
/// screen may perform role-based routing during that window. A user
/// without a resolved role routes to login, not to an area.
#[must_use]
pub fn route_for(snapshot: &AuthSnapshot) -> Option<RoutePath> {
    if snapshot.loading {
        return None;
    }
    match (&snapshot.user, snapshot.role) {
        (Some(_), Some(role)) => Some(role.home()),
        _ => Some(RoutePath::Login),
    }
}

/// Handle for the pending startup redirect. Dropping it cancels the timer.
pub struct RedirectGuard {
    handle: JoinHandle<()>,
}

impl Drop for RedirectGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Arm the startup redirect: once `loading` is false, wait
/// [`STARTUP_REDIRECT_DELAY`], then replace to the login route — unless an
/// authenticated session has arrived in the meantime, which supersedes it.
#[must_use = "dropping the guard cancels the startup redirect"]
pub fn spawn_startup_redirect(store: &SessionStore, navigator: Arc<dyn Navigator>) -> RedirectGuard {
    let mut rx = store.subscribe();
    let handle = tokio::spawn(async move {
        while rx.borrow_and_update().loading {
            if rx.changed().await.is_err() {
                return;
            }
        }
        tokio::time::sleep(STARTUP_REDIRECT_DELAY).await;
        if rx.borrow().user.is_some() {
            tracing::debug!("startup redirect superseded by authenticated session");
            return;
        }
        tracing::debug!(target = %RoutePath::Login, "startup redirect");
        navigator.replace(RoutePath::Login);
    });
    RedirectGuard { handle }
}

#[cfg(test)]
#[path = "routing_test.rs"]
mod tests;
