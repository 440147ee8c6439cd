//! Resource existence check.
//!
//! Bound at route registration to a path-parameter name and an immutable
//! identifier set — the in-memory stand-in for a datastore lookup. Runs after
//! the auth checks (no existence information for callers who failed them) and
//! before body validation on update routes, so "no such target" and "bad
//! body" stay separable failures for clients.

use std::sync::Arc;

use tracing::warn;

use crate::context::Context;
use crate::pipeline::{BoxFuture, Stage};
use crate::reject::Reject;

/// The valid identifiers for one resource type. Fixed at startup, shared
/// read-only across requests.
#[derive(Clone)]
pub struct ExistenceSet {
    ids: Arc<[String]>,
}

impl ExistenceSet {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { ids: ids.into_iter().map(Into::into).collect() }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }
}

/// The existence check stage for one `{param}` route segment.
pub struct ResourceExists {
    param: &'static str,
    set: ExistenceSet,
}

impl ResourceExists {
    pub fn new(param: &'static str, set: ExistenceSet) -> Self {
        Self { param, set }
    }
}

impl Stage for ResourceExists {
    fn name(&self) -> &'static str {
        "resource-exists"
    }

    fn inspect<'a>(&'a self, ctx: &'a mut Context) -> BoxFuture<'a, Result<(), Reject>> {
        Box::pin(async move {
            // The parameter name is fixed when the route is registered; a miss
            // means the stage is attached to a route without that segment.
            let Some(id) = ctx.param(self.param) else {
                warn!(param = self.param, path = ctx.path(), "existence check on a route without the parameter");
                return Err(Reject::internal("existence check bound to a missing path parameter"));
            };

            if self.set.contains(id) { Ok(()) } else { Err(Reject::NotFound) }
        })
    }
}
