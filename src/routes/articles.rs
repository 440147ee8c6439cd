//! Articles routes.
//!
//! Same shape as users, with the access check wedged between authentication
//! and everything else — an actor the policy denies never learns whether an
//! article exists:
//! - `GET  /articles`        auth → access
//! - `POST /articles`        auth → access → validate
//! - `GET  /articles/{id}`   auth → access → existence
//! - `PUT  /articles/{id}`   auth → access → existence → validate
//! - `DELETE /articles/{id}` auth → access → existence

use http::{Method, StatusCode};

use super::AppConfig;
use crate::context::Context;
use crate::middleware::{ArticleAccess, BasicAuth, Kind, ResourceExists, Schema, ValidateBody};
use crate::pipeline::Chain;
use crate::response::Response;
use crate::router::Router;

pub(super) fn register(router: Router, config: &AppConfig) -> Router {
    let gated = Chain::new()
        .stage(BasicAuth::new(config.credentials.clone()))
        .stage(ArticleAccess::new(config.article_policy.clone()));
    let by_id = gated.clone().stage(ResourceExists::new("id", config.article_ids.clone()));

    router
        .on(Method::GET, "/articles", gated.clone(), list)
        .on(Method::POST, "/articles", gated.stage(ValidateBody::new(schema())), create)
        .on(Method::GET, "/articles/{id}", by_id.clone(), fetch)
        .on(Method::PUT, "/articles/{id}", by_id.clone().stage(ValidateBody::new(schema())), update)
        .on(Method::DELETE, "/articles/{id}", by_id, remove)
}

fn schema() -> Schema {
    Schema::new()
        .required("title", Kind::String)
        .required("content", Kind::String)
        .optional("published", Kind::Bool)
}

// Stub handlers.

async fn list(_ctx: Context) -> Response {
    Response::text("articles index")
}

async fn create(_ctx: Context) -> Response {
    Response::builder().status(StatusCode::CREATED).text("created article")
}

async fn fetch(ctx: Context) -> Response {
    let id = ctx.param("id").unwrap_or("unknown");
    Response::text(format!("article {id}"))
}

async fn update(ctx: Context) -> Response {
    let id = ctx.param("id").unwrap_or("unknown");
    Response::text(format!("updated article {id}"))
}

async fn remove(_ctx: Context) -> StatusCode {
    StatusCode::NO_CONTENT
}
