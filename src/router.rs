//! Radix-tree route table and request dispatcher.
//!
//! One tree per HTTP method, O(path-length) lookup. Each route carries its
//! check [`Chain`] and terminal handler, bound at registration. Dispatch is
//! one deterministic pass: log → lookup → chain → handler, with the 404
//! catch-all and the 500 boundary at this level, so no rejection ever escapes
//! as anything but its HTTP status.

use std::collections::HashMap;

use http::Method;
use matchit::Router as MatchitRouter;
use tracing::error;

use crate::context::Context;
use crate::handler::{BoxedHandler, Handler};
use crate::middleware::log;
use crate::pipeline::Chain;
use crate::reject::Reject;
use crate::request::Request;
use crate::response::Response;

#[derive(Clone)]
struct RouteEntry {
    chain: Chain,
    handler: BoxedHandler,
}

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve)
/// or drive [`dispatch`](Router::dispatch) directly in tests. Each
/// [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<RouteEntry>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Registers a route: method + path, the ordered check chain, and the
    /// terminal handler that runs only if every check passes.
    ///
    /// Path parameters use `{name}` syntax — `ctx.param("name")` retrieves
    /// them:
    ///
    /// ```rust,no_run
    /// # use http::Method;
    /// # use torii::{Chain, Context, Response, Router};
    /// # async fn get_user(_: Context) -> Response { Response::text("") }
    /// Router::new().on(Method::GET, "/users/{id}", Chain::new(), get_user);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics on an invalid or conflicting path pattern — a startup bug, not
    /// a runtime condition.
    pub fn on(mut self, method: Method, path: &str, chain: Chain, handler: impl Handler) -> Self {
        let entry = RouteEntry { chain, handler: handler.into_boxed_handler() };
        self.routes
            .entry(method)
            .or_default()
            .insert(path, entry)
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    fn lookup(&self, method: &Method, path: &str) -> Option<(RouteEntry, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((matched.value.clone(), params))
    }

    /// Processes one request end to end.
    ///
    /// Logs unconditionally, resolves exactly one route (unmatched method or
    /// path answers 404), runs the route's chain in order, and translates the
    /// first rejection to its status. An internal fault is logged with full
    /// detail here and leaves as a generic 500 — the only place that class is
    /// caught.
    pub async fn dispatch(&self, req: Request) -> Response {
        log::record(&req);

        let Some((entry, params)) = self.lookup(req.method(), req.path()) else {
            return Reject::NotFound.into_response();
        };

        let mut ctx = Context::new(req, params);
        match entry.chain.run(&mut ctx).await {
            Ok(()) => entry.handler.call(ctx).await,
            Err(reject) => {
                if let Reject::Internal(detail) = &reject {
                    error!(path = ctx.path(), detail = %detail, "stage fault");
                }
                reject.into_response()
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
