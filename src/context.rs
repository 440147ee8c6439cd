//! Per-request context.
//!
//! The [`Context`] carries state through a route's check chain. Each stage may
//! enrich it — authentication writes the verified [`Identity`] — before the
//! terminal handler consumes it. One context per request, owned by that
//! request's dispatch, never shared.

use std::collections::HashMap;

use serde_json::Value;

use crate::request::Request;

/// The verified principal associated with a request after successful
/// authentication. Created by the credential check, read by the access check,
/// dropped with the context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    principal: String,
}

impl Identity {
    pub fn new(principal: impl Into<String>) -> Self {
        Self { principal: principal.into() }
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }
}

/// Mutable per-request bag: the transport [`Request`], the extracted path
/// parameters, the parsed JSON body, and — once authentication passes — the
/// caller's [`Identity`].
///
/// The body is parsed exactly once, at construction. An empty or unparsable
/// body is `None`; routes with a validator turn that into a 422, routes
/// without one never look at it.
pub struct Context {
    request: Request,
    params: HashMap<String, String>,
    body: Option<Value>,
    identity: Option<Identity>,
}

impl Context {
    pub fn new(request: Request, params: HashMap<String, String>) -> Self {
        let body = serde_json::from_slice(request.body()).ok();
        Self { request, params, body, identity: None }
    }

    pub fn request(&self) -> &Request { &self.request }
    pub fn method(&self) -> &http::Method { self.request.method() }
    pub fn path(&self) -> &str { self.request.path() }

    /// Header value from the underlying request.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.request.header(name)
    }

    /// Named path parameter. For a route `/users/{id}`, `ctx.param("id")` on
    /// `/users/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// The parsed JSON body, if the request carried one.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Records the verified caller. Called by the credential check on success.
    pub fn set_identity(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }
}
