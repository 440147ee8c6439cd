//! Unconditional request logging.
//!
//! Runs first in the global pipeline, for every request — matched or not —
//! and before any check. Side-effect only: it never rejects and takes the
//! request read-only. The subscriber stamps the event with its timestamp.

use tracing::info;

use crate::request::Request;

/// Emits the one-per-request log event.
pub fn record(req: &Request) {
    info!(method = %req.method(), path = req.path(), "request");
}
