//! Smoke CLI: one login attempt against the configured identity provider.

use std::sync::Arc;

use rentsync_auth::{
    AuthConfig, FixedDomainResolver, HttpIdentityProvider, LoginFlow, Navigator, Role, RoutePath, SessionClient,
    SessionStore, bootstrap,
};

struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn replace(&self, target: RoutePath) {
        println!("replace -> {target}");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let (Some(role), Some(username), Some(password)) = (args.next(), args.next(), args.next()) else {
        eprintln!("usage: rentsync-auth <owner|renter> <username> <password>");
        std::process::exit(2);
    };
    let role = match role.as_str() {
        "owner" => Role::Owner,
        "renter" => Role::Renter,
        other => {
            eprintln!("unknown role: {other} (expected owner or renter)");
            std::process::exit(2);
        }
    };

    let config = AuthConfig::from_env().expect("AUTH_API_KEY required");
    let provider = HttpIdentityProvider::new(&config).expect("http client build failed");
    let client = SessionClient::new(
        Arc::new(provider),
        Arc::new(FixedDomainResolver::new(config.identity_domain.clone())),
    );

    let store = SessionStore::new();
    bootstrap(&store, None);

    let mut flow = LoginFlow::new(client, store.clone(), Arc::new(PrintNavigator));
    flow.username = username;
    flow.password = password;
    flow.role = role;

    match flow.submit().await {
        Ok(target) => tracing::info!(%target, uid = %store.snapshot().user.map(|u| u.uid).unwrap_or_default(), "authenticated"),
        Err(e) => {
            tracing::warn!(error = %e, "sign-in failed");
            std::process::exit(1);
        }
    }
}
