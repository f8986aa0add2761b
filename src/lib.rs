//! RentSync authentication/session core.
//!
//! ARCHITECTURE
//! ============
//! The crate models the client-side login lifecycle: raw form input is
//! validated ([`validate`]), valid credentials are exchanged for a provider
//! session over one REST call ([`provider`], [`session`]), the result lands
//! in an observable store ([`store`]), and the routing policy reacts to
//! store state ([`routing`]). Screens are external collaborators — they
//! drive [`login::LoginFlow`] and implement [`routing::Navigator`].
//!
//! BOUNDARIES
//! ==========
//! The identity provider and navigation are trait seams so tests can run
//! the whole flow against mocks or a local fake provider. The store is an
//! injectable handle, not a process singleton: every test gets its own.

pub mod config;
pub mod login;
pub mod provider;
pub mod routing;
pub mod session;
pub mod store;
pub mod validate;

pub use config::AuthConfig;
pub use login::{LoginError, LoginFlow, Phase};
pub use provider::{HttpIdentityProvider, IdentityProvider, ProviderError};
pub use routing::{Navigator, RedirectGuard, Role, RoutePath, route_for, spawn_startup_redirect};
pub use session::{Authenticated, FixedDomainResolver, HandleResolver, Session, SessionClient};
pub use store::{AuthSnapshot, SessionStore, bootstrap, sign_out};
pub use validate::{Credentials, FieldErrors, validate};
