//! Check stages and the per-route chain.
//!
//! A [`Stage`] inspects the request context and either lets the request
//! continue (`Ok(())`) or stops it with a [`Reject`]. A [`Chain`] is the
//! ordered sequence of stages bound to a route at registration time: stages
//! run strictly in order, the first rejection is terminal, and nothing is
//! skipped. There is no "call next" — the chain owns sequencing, stages only
//! inspect.
//!
//! Stages are shared across concurrent requests behind `Arc`, so they hold
//! only immutable configuration (a credential store, an identifier set, a
//! schema) bound once when the route is registered.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use crate::context::Context;
use crate::reject::Reject;

/// A heap-allocated future, the dispatch currency of this crate.
///
/// `Pin<Box<…>>` because the runtime polls futures in place; `Send` so tokio
/// may move them across threads.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A single check in a route's chain.
///
/// Implementations inspect the context — headers, path parameters, parsed
/// body, identity — and may write to it (authentication records the verified
/// identity). They must not produce responses; translating a rejection into
/// HTTP is the dispatcher's job.
pub trait Stage: Send + Sync + 'static {
    /// Stable name for logs.
    fn name(&self) -> &'static str;

    /// Inspect the request. `Ok(())` continues the chain; `Err` stops it.
    fn inspect<'a>(&'a self, ctx: &'a mut Context) -> BoxFuture<'a, Result<(), Reject>>;
}

/// The ordered stage sequence for one route.
///
/// Built once at registration, immutable afterwards. Cloning is cheap (the
/// stages are `Arc`-shared), which lets assemblies extend a common prefix:
///
/// ```rust,ignore
/// let protected = Chain::new().stage(BasicAuth::new(credentials));
/// router
///     .on(Method::GET, "/users", protected.clone(), list_users)
///     .on(Method::POST, "/users", protected.stage(ValidateBody::new(schema)), create_user);
/// ```
#[derive(Clone, Default)]
pub struct Chain {
    stages: Vec<Arc<dyn Stage>>,
}

impl Chain {
    /// An empty chain — the route runs its handler unchecked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage. Returns `self` so chains read in execution order.
    pub fn stage(mut self, stage: impl Stage) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Runs every stage in order against `ctx`. The first rejection is
    /// returned immediately; later stages do not run.
    pub async fn run(&self, ctx: &mut Context) -> Result<(), Reject> {
        for stage in &self.stages {
            if let Err(reject) = stage.inspect(ctx).await {
                debug!(stage = stage.name(), %reject, "stage rejected request");
                return Err(reject);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use bytes::Bytes;
    use http::{HeaderMap, Method};

    use crate::request::Request;

    fn ctx() -> Context {
        let req = Request::new(Method::GET, "/", HeaderMap::new(), Bytes::new());
        Context::new(req, Default::default())
    }

    struct Pass {
        hits: Arc<AtomicUsize>,
    }

    impl Stage for Pass {
        fn name(&self) -> &'static str { "pass" }

        fn inspect<'a>(&'a self, _ctx: &'a mut Context) -> BoxFuture<'a, Result<(), Reject>> {
            Box::pin(async move {
                self.hits.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        }
    }

    struct Deny;

    impl Stage for Deny {
        fn name(&self) -> &'static str { "deny" }

        fn inspect<'a>(&'a self, _ctx: &'a mut Context) -> BoxFuture<'a, Result<(), Reject>> {
            Box::pin(async move { Err(Reject::Forbidden) })
        }
    }

    #[tokio::test]
    async fn empty_chain_passes() {
        assert_eq!(Chain::new().run(&mut ctx()).await, Ok(()));
    }

    #[tokio::test]
    async fn stages_run_in_registration_order_until_first_rejection() {
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));
        let chain = Chain::new()
            .stage(Pass { hits: Arc::clone(&before) })
            .stage(Deny)
            .stage(Pass { hits: Arc::clone(&after) });

        let outcome = chain.run(&mut ctx()).await;

        assert_eq!(outcome, Err(Reject::Forbidden));
        assert_eq!(before.load(Ordering::SeqCst), 1);
        assert_eq!(after.load(Ordering::SeqCst), 0, "stages after a rejection must not run");
    }

    #[tokio::test]
    async fn all_passing_stages_run() {
        let hits = Arc::new(AtomicUsize::new(0));
        let chain = Chain::new()
            .stage(Pass { hits: Arc::clone(&hits) })
            .stage(Pass { hits: Arc::clone(&hits) });

        assert_eq!(chain.run(&mut ctx()).await, Ok(()));
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
