//! Article access check.
//!
//! Runs directly after authentication on article routes, before the existence
//! and validation checks — an unauthorized caller learns nothing about which
//! articles exist. Applies the injected [`AccessPolicy`] to the verified
//! identity and the requested operation; deny rejects with
//! [`Reject::Forbidden`].

use std::collections::HashSet;
use std::sync::Arc;

use http::Method;
use tracing::{debug, warn};

use crate::context::{Context, Identity};
use crate::pipeline::{BoxFuture, Stage};
use crate::reject::Reject;

/// What the caller is trying to do, derived from the HTTP method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
}

impl Operation {
    pub fn from_method(method: &Method) -> Self {
        match *method {
            Method::GET | Method::HEAD => Self::Read,
            _ => Self::Write,
        }
    }
}

/// Principal set allowed on article operations. One uniform policy for reads
/// and writes; `allows` still receives the operation so a role split stays a
/// policy-local change.
#[derive(Clone)]
pub struct AccessPolicy {
    allowed: Arc<HashSet<String>>,
}

impl AccessPolicy {
    pub fn allowing<I, S>(principals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { allowed: Arc::new(principals.into_iter().map(Into::into).collect()) }
    }

    pub fn allows(&self, identity: &Identity, _operation: Operation) -> bool {
        self.allowed.contains(identity.principal())
    }
}

/// The article authorization stage.
pub struct ArticleAccess {
    policy: AccessPolicy,
}

impl ArticleAccess {
    pub fn new(policy: AccessPolicy) -> Self {
        Self { policy }
    }
}

impl Stage for ArticleAccess {
    fn name(&self) -> &'static str {
        "article-access"
    }

    fn inspect<'a>(&'a self, ctx: &'a mut Context) -> BoxFuture<'a, Result<(), Reject>> {
        Box::pin(async move {
            // The route table guarantees authentication ran first. An absent
            // identity here is a composition bug, not a caller mistake.
            let Some(identity) = ctx.identity() else {
                warn!(path = ctx.path(), "access check reached without an identity");
                return Err(Reject::internal("access check ran before authentication"));
            };

            let operation = Operation::from_method(ctx.method());
            if self.policy.allows(identity, operation) {
                debug!(principal = identity.principal(), ?operation, "access granted");
                Ok(())
            } else {
                Err(Reject::Forbidden)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bytes::Bytes;
    use http::{HeaderMap, Method};

    use crate::request::Request;

    fn ctx(method: Method, identity: Option<&str>) -> Context {
        let req = Request::new(method, "/articles", HeaderMap::new(), Bytes::new());
        let mut ctx = Context::new(req, Default::default());
        if let Some(principal) = identity {
            ctx.set_identity(Identity::new(principal));
        }
        ctx
    }

    #[test]
    fn operation_derivation() {
        assert_eq!(Operation::from_method(&Method::GET), Operation::Read);
        assert_eq!(Operation::from_method(&Method::HEAD), Operation::Read);
        assert_eq!(Operation::from_method(&Method::POST), Operation::Write);
        assert_eq!(Operation::from_method(&Method::PUT), Operation::Write);
        assert_eq!(Operation::from_method(&Method::DELETE), Operation::Write);
    }

    #[tokio::test]
    async fn allowed_principal_passes_reads_and_writes() {
        let stage = ArticleAccess::new(AccessPolicy::allowing(["admin"]));

        assert_eq!(stage.inspect(&mut ctx(Method::GET, Some("admin"))).await, Ok(()));
        assert_eq!(stage.inspect(&mut ctx(Method::DELETE, Some("admin"))).await, Ok(()));
    }

    #[tokio::test]
    async fn other_principal_is_forbidden() {
        let stage = ArticleAccess::new(AccessPolicy::allowing(["admin"]));
        let outcome = stage.inspect(&mut ctx(Method::GET, Some("reader"))).await;

        assert_eq!(outcome, Err(Reject::Forbidden));
    }

    #[tokio::test]
    async fn missing_identity_is_an_internal_fault() {
        let stage = ArticleAccess::new(AccessPolicy::allowing(["admin"]));
        let outcome = stage.inspect(&mut ctx(Method::GET, None)).await;

        assert!(matches!(outcome, Err(Reject::Internal(_))));
    }
}
