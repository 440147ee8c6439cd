//! Check-stage catalogue.
//!
//! Each stage implements the [`Stage`](crate::Stage) contract —
//! inspect the context, continue or reject — and holds only the immutable
//! configuration it was built with at route registration. The per-route order
//! is fixed (see [`routes`](crate::routes)):
//!
//! | Stage | Rejects with | Position |
//! |---|---|---|
//! | [`BasicAuth`] | 401 | first on every protected route |
//! | [`ArticleAccess`] | 403 | after auth, article routes only |
//! | [`ResourceExists`] | 404 | after the auth checks, `{id}` routes |
//! | [`ValidateBody`] | 422 | last, POST/PUT routes |
//!
//! [`log::record`] is not a stage: it runs before routing, for every request,
//! and cannot reject.

pub mod auth;
pub mod authz;
pub mod exists;
pub mod log;
pub mod validate;

pub use auth::{BasicAuth, CredentialStore};
pub use authz::{AccessPolicy, ArticleAccess, Operation};
pub use exists::{ExistenceSet, ResourceExists};
pub use validate::{Kind, Schema, ValidateBody};
