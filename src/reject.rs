//! Request-outcome taxonomy.
//!
//! A check stage that stops a request returns one of these values; the
//! dispatcher translates it to an HTTP response. These are expected,
//! user-facing outcomes — not errors to recover from, and never retried.
//! Infrastructure failures (bind, accept) live in [`Error`](crate::Error).

use std::fmt;

use http::StatusCode;
use serde_json::json;

use crate::response::Response;

/// Why a check chain stopped a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reject {
    /// Missing or invalid credentials.
    Unauthorized,
    /// Authenticated but not permitted.
    Forbidden,
    /// Unknown resource identifier or unmatched route.
    NotFound,
    /// Body fails its schema; carries every violated field, not just the first.
    Validation(Vec<String>),
    /// Unexpected fault inside a stage. The detail is for server logs only —
    /// callers get a generic 500.
    Internal(String),
}

impl Reject {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The client-facing response. Internal detail never crosses this line.
    pub fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Unauthorized => Response::builder()
                .status(status)
                .header("www-authenticate", "Basic")
                .json(json_error("unauthorized")),
            Self::Forbidden => Response::builder().status(status).json(json_error("forbidden")),
            Self::NotFound => Response::builder().status(status).json(json_error("not found")),
            Self::Validation(violations) => {
                let body = json!({ "error": "validation failed", "violations": violations });
                Response::builder()
                    .status(status)
                    .json(serde_json::to_vec(&body).expect("failed to encode error body"))
            }
            Self::Internal(_) => {
                Response::builder().status(status).json(json_error("internal server error"))
            }
        }
    }
}

fn json_error(message: &str) -> Vec<u8> {
    serde_json::to_vec(&json!({ "error": message })).expect("failed to encode error body")
}

impl fmt::Display for Reject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => f.write_str("unauthorized"),
            Self::Forbidden => f.write_str("forbidden"),
            Self::NotFound => f.write_str("not found"),
            Self::Validation(v) => write!(f, "validation failed ({} violations)", v.len()),
            Self::Internal(detail) => write!(f, "internal: {detail}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_taxonomy() {
        assert_eq!(Reject::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(Reject::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(Reject::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(Reject::Validation(vec![]).status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(Reject::internal("x").status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unauthorized_carries_challenge() {
        let res = Reject::Unauthorized.into_response();
        assert_eq!(res.header("www-authenticate"), Some("Basic"));
    }

    #[test]
    fn internal_detail_stays_out_of_the_body() {
        let res = Reject::internal("database exploded at 03:14").into_response();
        let body = String::from_utf8(res.body().to_vec()).unwrap();
        assert!(!body.contains("exploded"));
        assert!(body.contains("internal server error"));
    }
}
