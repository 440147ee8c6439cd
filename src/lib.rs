//! # torii
//!
//! A minimal users/articles HTTP API where every route sits behind an
//! explicit, ordered chain of checks. Nothing more. Nothing less.
//!
//! ## The contract
//!
//! Each route declares its chain once, at registration. A request passes
//! every stage in order or stops at the first one that says no:
//!
//! | Route | Chain |
//! |---|---|
//! | `GET/POST /users` | auth → (validate, POST only) |
//! | `GET/PUT/DELETE /users/{id}` | auth → existence → (validate, PUT only) |
//! | `GET/POST /articles` | auth → access → (validate, POST only) |
//! | `GET/PUT/DELETE /articles/{id}` | auth → access → existence → (validate, PUT only) |
//!
//! The ordering is deliberate. Credentials are checked before anything else;
//! the article policy runs before the existence check so a denied caller
//! never learns which articles exist; body validation runs last because it
//! is the most specific check and wasted on a request that was never going
//! to be allowed. Stages communicate by value — `Continue` or a typed
//! [`Reject`] — and the dispatcher alone turns rejections into statuses:
//! 401, 403, 404, 422, and a generic 500 whose detail stays in server logs.
//!
//! What the proxy / ingress already owns — body-size limits, rate limiting,
//! slow-client protection, TLS — torii intentionally ignores.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use torii::{Server, routes};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = routes::app(routes::AppConfig::default());
//!     Server::bind("0.0.0.0:3000").serve(app).await.unwrap();
//! }
//! ```
//!
//! Custom routes compose the same pieces:
//!
//! ```rust,no_run
//! use http::Method;
//! use torii::middleware::{BasicAuth, CredentialStore};
//! use torii::{Chain, Context, Response, Router};
//!
//! async fn whoami(ctx: Context) -> Response {
//!     let who = ctx.identity().map(|i| i.principal().to_owned()).unwrap_or_default();
//!     Response::text(who)
//! }
//!
//! let creds = CredentialStore::new([("admin", "supersecret")]);
//! let app = Router::new().on(
//!     Method::GET,
//!     "/whoami",
//!     Chain::new().stage(BasicAuth::new(creds)),
//!     whoami,
//! );
//! ```

mod context;
mod error;
mod handler;
mod pipeline;
mod reject;
mod request;
mod response;
mod router;
mod server;

pub mod health;
pub mod middleware;
pub mod routes;

pub use context::{Context, Identity};
pub use error::Error;
pub use handler::Handler;
pub use pipeline::{BoxFuture, Chain, Stage};
pub use reject::Reject;
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response};
pub use router::Router;
pub use server::Server;
