//! Basic-credential extraction and verification.
//!
//! First check on every protected route. Reads `Authorization: Basic`,
//! decodes the credential pair, verifies it against the injected
//! [`CredentialStore`], and writes the verified [`Identity`] into the context.
//! Any defect — missing header, wrong scheme, undecodable payload, unknown or
//! mismatched credentials — rejects with [`Reject::Unauthorized`] and nothing
//! downstream runs.

use std::collections::HashMap;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use http::header;
use tracing::debug;

use crate::context::{Context, Identity};
use crate::pipeline::{BoxFuture, Stage};
use crate::reject::Reject;

/// Immutable username → password map, fixed at startup. Stands in for a real
/// credential backend; the stage only ever reads it.
#[derive(Clone)]
pub struct CredentialStore {
    entries: Arc<HashMap<String, String>>,
}

impl CredentialStore {
    pub fn new<I, U, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (U, P)>,
        U: Into<String>,
        P: Into<String>,
    {
        let entries = pairs.into_iter().map(|(u, p)| (u.into(), p.into())).collect();
        Self { entries: Arc::new(entries) }
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.entries.get(username).is_some_and(|p| p == password)
    }
}

/// The credential check stage.
pub struct BasicAuth {
    store: CredentialStore,
}

impl BasicAuth {
    pub fn new(store: CredentialStore) -> Self {
        Self { store }
    }

    fn authenticate(&self, ctx: &Context) -> Result<Identity, Reject> {
        let header = ctx.header(header::AUTHORIZATION.as_str()).ok_or(Reject::Unauthorized)?;
        let encoded = header.strip_prefix("Basic ").ok_or(Reject::Unauthorized)?;
        let decoded = STANDARD.decode(encoded).map_err(|_| Reject::Unauthorized)?;
        let pair = String::from_utf8(decoded).map_err(|_| Reject::Unauthorized)?;
        let (username, password) = pair.split_once(':').ok_or(Reject::Unauthorized)?;

        if self.store.verify(username, password) {
            Ok(Identity::new(username))
        } else {
            Err(Reject::Unauthorized)
        }
    }
}

impl Stage for BasicAuth {
    fn name(&self) -> &'static str {
        "basic-auth"
    }

    fn inspect<'a>(&'a self, ctx: &'a mut Context) -> BoxFuture<'a, Result<(), Reject>> {
        Box::pin(async move {
            let identity = self.authenticate(ctx)?;
            debug!(principal = identity.principal(), "authenticated");
            ctx.set_identity(identity);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bytes::Bytes;
    use http::{HeaderMap, HeaderValue, Method};

    use crate::request::Request;

    fn store() -> CredentialStore {
        CredentialStore::new([("admin", "supersecret")])
    }

    fn ctx_with_auth(value: Option<&str>) -> Context {
        let mut headers = HeaderMap::new();
        if let Some(v) = value {
            headers.insert(header::AUTHORIZATION, HeaderValue::from_str(v).unwrap());
        }
        let req = Request::new(Method::GET, "/users", headers, Bytes::new());
        Context::new(req, Default::default())
    }

    fn basic(user: &str, pass: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{user}:{pass}")))
    }

    #[tokio::test]
    async fn valid_credentials_set_identity() {
        let mut ctx = ctx_with_auth(Some(&basic("admin", "supersecret")));
        let outcome = BasicAuth::new(store()).inspect(&mut ctx).await;

        assert_eq!(outcome, Ok(()));
        assert_eq!(ctx.identity().unwrap().principal(), "admin");
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let mut ctx = ctx_with_auth(None);
        let outcome = BasicAuth::new(store()).inspect(&mut ctx).await;

        assert_eq!(outcome, Err(Reject::Unauthorized));
        assert!(ctx.identity().is_none());
    }

    #[tokio::test]
    async fn wrong_scheme_is_unauthorized() {
        let mut ctx = ctx_with_auth(Some("Bearer token"));
        assert_eq!(BasicAuth::new(store()).inspect(&mut ctx).await, Err(Reject::Unauthorized));
    }

    #[tokio::test]
    async fn undecodable_payload_is_unauthorized() {
        let mut ctx = ctx_with_auth(Some("Basic %%%not-base64%%%"));
        assert_eq!(BasicAuth::new(store()).inspect(&mut ctx).await, Err(Reject::Unauthorized));
    }

    #[tokio::test]
    async fn missing_separator_is_unauthorized() {
        let mut ctx = ctx_with_auth(Some(&format!("Basic {}", STANDARD.encode("nocolon"))));
        assert_eq!(BasicAuth::new(store()).inspect(&mut ctx).await, Err(Reject::Unauthorized));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let mut ctx = ctx_with_auth(Some(&basic("admin", "guess")));
        assert_eq!(BasicAuth::new(store()).inspect(&mut ctx).await, Err(Reject::Unauthorized));
    }

    #[tokio::test]
    async fn unknown_user_is_unauthorized() {
        let mut ctx = ctx_with_auth(Some(&basic("mallory", "supersecret")));
        assert_eq!(BasicAuth::new(store()).inspect(&mut ctx).await, Err(Reject::Unauthorized));
    }
}
