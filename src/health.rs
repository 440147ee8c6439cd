//! Built-in Kubernetes health-check handlers.
//!
//! Kubernetes asks two questions. torii answers them.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can the pod serve traffic? Failure → pulled from load-balancer. |
//!
//! Both are registered with empty check chains — probes carry no credentials.

use crate::{Context, Response};

/// Kubernetes liveness probe handler.
///
/// Always returns `200 OK` with body `"ok"`. If the process can respond to
/// HTTP at all, it is alive — this handler intentionally has no dependencies.
pub async fn liveness(_ctx: Context) -> Response {
    Response::text("ok")
}

/// Kubernetes readiness probe handler.
///
/// Returns `200 OK` with body `"ready"`. Replace with your own handler if the
/// service needs a warm-up period before accepting traffic.
pub async fn readiness(_ctx: Context) -> Response {
    Response::text("ready")
}
