//! Incoming HTTP request type.

use bytes::Bytes;
use http::{HeaderMap, Method};

/// The transport view of one incoming request: method, path, headers, and the
/// collected body bytes. Everything a check stage derives from these (path
/// parameters, parsed body, identity) lives on [`Context`](crate::Context).
///
/// The server builds one per request from the hyper parts. The constructor is
/// public so tests can drive [`Router::dispatch`](crate::Router::dispatch)
/// without opening a socket.
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Bytes,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>, headers: HeaderMap, body: Bytes) -> Self {
        Self { method, path: path.into(), headers, body }
    }

    pub fn method(&self) -> &Method { &self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Header value as a string, `None` if absent or not valid UTF-8.
    /// Lookup is case-insensitive — `HeaderMap` normalises names.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
