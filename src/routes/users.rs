//! Users routes.
//!
//! Chain orders:
//! - `GET  /users`        auth
//! - `POST /users`        auth → validate
//! - `GET  /users/{id}`   auth → existence
//! - `PUT  /users/{id}`   auth → existence → validate
//! - `DELETE /users/{id}` auth → existence

use http::{Method, StatusCode};

use super::AppConfig;
use crate::context::Context;
use crate::middleware::{BasicAuth, Kind, ResourceExists, Schema, ValidateBody};
use crate::pipeline::Chain;
use crate::response::Response;
use crate::router::Router;

pub(super) fn register(router: Router, config: &AppConfig) -> Router {
    let auth = Chain::new().stage(BasicAuth::new(config.credentials.clone()));
    let by_id = auth.clone().stage(ResourceExists::new("id", config.user_ids.clone()));

    router
        .on(Method::GET, "/users", auth.clone(), list)
        .on(Method::POST, "/users", auth.stage(ValidateBody::new(schema())), create)
        .on(Method::GET, "/users/{id}", by_id.clone(), fetch)
        .on(Method::PUT, "/users/{id}", by_id.clone().stage(ValidateBody::new(schema())), update)
        .on(Method::DELETE, "/users/{id}", by_id, remove)
}

fn schema() -> Schema {
    Schema::new()
        .required("name", Kind::String)
        .required("email", Kind::String)
        .optional("active", Kind::Bool)
}

// Stub handlers. Reached only when every check in the route's chain passed.

async fn list(_ctx: Context) -> Response {
    Response::text("users index")
}

async fn create(_ctx: Context) -> Response {
    Response::builder().status(StatusCode::CREATED).text("created user")
}

async fn fetch(ctx: Context) -> Response {
    let id = ctx.param("id").unwrap_or("unknown");
    Response::text(format!("user {id}"))
}

async fn update(ctx: Context) -> Response {
    let id = ctx.param("id").unwrap_or("unknown");
    Response::text(format!("updated user {id}"))
}

async fn remove(_ctx: Context) -> StatusCode {
    StatusCode::NO_CONTENT
}
