use super::*;
use std::sync::Mutex;

use tokio::time::{Instant, timeout};

use crate::session::Session;
use crate::store::bootstrap;

// =============================================================================
// RecordingNavigator
// =============================================================================

#[derive(Default)]
struct RecordingNavigator {
    targets: Mutex<Vec<RoutePath>>,
    notify: tokio::sync::Notify,
}

impl RecordingNavigator {
    fn targets(&self) -> Vec<RoutePath> {
        self.targets.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, target: RoutePath) {
        self.targets.lock().unwrap().push(target);
        self.notify.notify_one();
    }
}

fn dummy_session() -> Session {
    Session {
        uid: "uid-1".into(),
        email: "alice@rentsync.app".into(),
        id_token: "id-token".into(),
        refresh_token: "refresh".into(),
        expires_in_secs: 3600,
    }
}

// =============================================================================
// Role / RoutePath
// =============================================================================

#[test]
fn owner_home_is_admin() {
    assert_eq!(Role::Owner.home(), RoutePath::OwnerHome);
    assert_eq!(RoutePath::OwnerHome.as_str(), "/admin");
}

#[test]
fn renter_home_is_client() {
    assert_eq!(Role::Renter.home(), RoutePath::RenterHome);
    assert_eq!(RoutePath::RenterHome.as_str(), "/client");
}

#[test]
fn login_path() {
    assert_eq!(RoutePath::Login.as_str(), "/auth/login");
    assert_eq!(RoutePath::Login.to_string(), "/auth/login");
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"owner\"");
    assert_eq!(serde_json::from_str::<Role>("\"renter\"").unwrap(), Role::Renter);
}

// =============================================================================
// route_for
// =============================================================================

#[test]
fn route_for_loading_is_none() {
    let snap = crate::store::AuthSnapshot::default();
    assert!(snap.loading);
    assert_eq!(route_for(&snap), None);
}

#[test]
fn route_for_unauthenticated_is_login() {
    let snap = crate::store::AuthSnapshot { user: None, role: None, loading: false };
    assert_eq!(route_for(&snap), Some(RoutePath::Login));
}

#[test]
fn route_for_owner_is_owner_home() {
    let snap = crate::store::AuthSnapshot {
        user: Some(dummy_session()),
        role: Some(Role::Owner),
        loading: false,
    };
    assert_eq!(route_for(&snap), Some(RoutePath::OwnerHome));
}

#[test]
fn route_for_renter_is_renter_home() {
    let snap = crate::store::AuthSnapshot {
        user: Some(dummy_session()),
        role: Some(Role::Renter),
        loading: false,
    };
    assert_eq!(route_for(&snap), Some(RoutePath::RenterHome));
}

#[test]
fn route_for_user_without_role_is_login() {
    let snap = crate::store::AuthSnapshot { user: Some(dummy_session()), role: None, loading: false };
    assert_eq!(route_for(&snap), Some(RoutePath::Login));
}

// =============================================================================
// startup redirect — paused clock
// =============================================================================

#[tokio::test(start_paused = true)]
async fn startup_redirect_fires_after_full_delay() {
    let store = SessionStore::new();
    let nav = Arc::new(RecordingNavigator::default());
    let _guard = spawn_startup_redirect(&store, nav.clone());

    bootstrap(&store, None);
    let armed_at = Instant::now();

    timeout(Duration::from_secs(10), nav.notify.notified())
        .await
        .expect("redirect should fire");
    assert!(armed_at.elapsed() >= STARTUP_REDIRECT_DELAY);
    assert_eq!(nav.targets(), vec![RoutePath::Login]);
}

#[tokio::test(start_paused = true)]
async fn startup_redirect_does_not_fire_before_delay() {
    let store = SessionStore::new();
    let nav = Arc::new(RecordingNavigator::default());
    let _guard = spawn_startup_redirect(&store, nav.clone());

    bootstrap(&store, None);

    let early = timeout(Duration::from_millis(2499), nav.notify.notified()).await;
    assert!(early.is_err(), "redirect fired before the 2500ms delay");
    assert!(nav.targets().is_empty());
}

#[tokio::test(start_paused = true)]
async fn startup_redirect_waits_for_loading_to_clear() {
    let store = SessionStore::new();
    let nav = Arc::new(RecordingNavigator::default());
    let _guard = spawn_startup_redirect(&store, nav.clone());

    // loading stays true: no redirect, no matter how long.
    let fired = timeout(Duration::from_secs(60), nav.notify.notified()).await;
    assert!(fired.is_err());

    bootstrap(&store, None);
    timeout(Duration::from_secs(10), nav.notify.notified())
        .await
        .expect("redirect should fire once loading clears");
}

#[tokio::test(start_paused = true)]
async fn dropped_guard_cancels_redirect() {
    let store = SessionStore::new();
    let nav = Arc::new(RecordingNavigator::default());
    let guard = spawn_startup_redirect(&store, nav.clone());

    bootstrap(&store, None);
    drop(guard);

    let fired = timeout(Duration::from_secs(10), nav.notify.notified()).await;
    assert!(fired.is_err(), "redirect fired after teardown");
    assert!(nav.targets().is_empty());
}

#[tokio::test(start_paused = true)]
async fn authenticated_session_supersedes_startup_redirect() {
    let store = SessionStore::new();
    let nav = Arc::new(RecordingNavigator::default());
    let _guard = spawn_startup_redirect(&store, nav.clone());

    bootstrap(&store, None);
    store.set_user(Some(dummy_session()));

    let fired = timeout(Duration::from_secs(10), nav.notify.notified()).await;
    assert!(fired.is_err(), "redirect fired despite authenticated session");
}
