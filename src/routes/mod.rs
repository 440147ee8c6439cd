//! Service assembly.
//!
//! Wires the route table: the root and health routes run unchecked, the
//! users and articles assemblies attach their check chains around stub
//! handlers. All fixtures and capabilities come in through [`AppConfig`] at
//! composition time — nothing here reads ambient globals.

mod articles;
mod users;

use http::Method;

use crate::context::Context;
use crate::health;
use crate::middleware::{AccessPolicy, CredentialStore, ExistenceSet};
use crate::pipeline::Chain;
use crate::response::Response;
use crate::router::Router;

/// The injected read-only capability bundle: who may authenticate, who may
/// touch articles, and which identifiers exist. Fixed before the router is
/// built; shared immutably afterwards.
pub struct AppConfig {
    pub credentials: CredentialStore,
    pub article_policy: AccessPolicy,
    pub user_ids: ExistenceSet,
    pub article_ids: ExistenceSet,
}

impl Default for AppConfig {
    /// The in-memory fixtures standing in for real backends: two credential
    /// pairs (only `admin` passes the article policy), and the static
    /// identifier sets.
    fn default() -> Self {
        Self {
            credentials: CredentialStore::new([
                ("admin", "supersecret"),
                ("reader", "letmein"),
            ]),
            article_policy: AccessPolicy::allowing(["admin"]),
            user_ids: ExistenceSet::new(["123", "456", "789"]),
            article_ids: ExistenceSet::new(["456", "789", "101"]),
        }
    }
}

/// Builds the full application router from `config`.
pub fn app(config: AppConfig) -> Router {
    let router = Router::new()
        .on(Method::GET, "/", Chain::new(), root)
        .on(Method::GET, "/healthz", Chain::new(), health::liveness)
        .on(Method::GET, "/readyz", Chain::new(), health::readiness);

    let router = users::register(router, &config);
    articles::register(router, &config)
}

async fn root(_ctx: Context) -> Response {
    Response::text("torii")
}
