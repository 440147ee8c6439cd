//! Body validation against a per-resource schema.
//!
//! Last check before the terminal handler — the most specific one, and the
//! only one that reads the body, so it never runs for requests already
//! rejected on auth or existence grounds. A failing body rejects with
//! [`Reject::Validation`] carrying **every** violated field, letting a caller
//! fix all problems in one round trip.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::context::Context;
use crate::pipeline::{BoxFuture, Stage};
use crate::reject::Reject;

/// Primitive kind a field must hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    String,
    Number,
    Bool,
}

impl Kind {
    fn admits(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Bool => value.is_boolean(),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Number => f.write_str("number"),
            Self::Bool => f.write_str("boolean"),
        }
    }
}

struct Field {
    name: &'static str,
    kind: Kind,
    required: bool,
}

/// The field requirements for one resource's body.
///
/// ```rust
/// use torii::middleware::{Kind, Schema};
///
/// let schema = Schema::new()
///     .required("name", Kind::String)
///     .optional("active", Kind::Bool);
/// ```
#[derive(Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, name: &'static str, kind: Kind) -> Self {
        self.fields.push(Field { name, kind, required: true });
        self
    }

    pub fn optional(mut self, name: &'static str, kind: Kind) -> Self {
        self.fields.push(Field { name, kind, required: false });
        self
    }

    /// Every violation in the body, in schema order. Empty means valid.
    pub fn check(&self, body: Option<&Value>) -> Vec<String> {
        let Some(Value::Object(map)) = body else {
            return vec!["body: expected a JSON object".to_owned()];
        };

        let mut violations = Vec::new();
        for field in &self.fields {
            match map.get(field.name) {
                None | Some(Value::Null) if field.required => {
                    violations.push(format!("{}: required field is missing", field.name));
                }
                None | Some(Value::Null) => {}
                Some(value) if !field.kind.admits(value) => {
                    violations.push(format!("{}: expected {}", field.name, field.kind));
                }
                Some(_) => {}
            }
        }
        violations
    }
}

/// The body validation stage.
pub struct ValidateBody {
    schema: Arc<Schema>,
}

impl ValidateBody {
    pub fn new(schema: Schema) -> Self {
        Self { schema: Arc::new(schema) }
    }
}

impl Stage for ValidateBody {
    fn name(&self) -> &'static str {
        "validate-body"
    }

    fn inspect<'a>(&'a self, ctx: &'a mut Context) -> BoxFuture<'a, Result<(), Reject>> {
        Box::pin(async move {
            let violations = self.schema.check(ctx.body());
            if violations.is_empty() { Ok(()) } else { Err(Reject::Validation(violations)) }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new()
            .required("name", Kind::String)
            .required("email", Kind::String)
            .optional("active", Kind::Bool)
    }

    #[test]
    fn valid_body_has_no_violations() {
        let body = json!({ "name": "alice", "email": "alice@example.com" });
        assert!(schema().check(Some(&body)).is_empty());
    }

    #[test]
    fn optional_field_may_be_absent_but_must_type_check() {
        let ok = json!({ "name": "alice", "email": "a@b.c", "active": true });
        assert!(schema().check(Some(&ok)).is_empty());

        let bad = json!({ "name": "alice", "email": "a@b.c", "active": "yes" });
        assert_eq!(schema().check(Some(&bad)), vec!["active: expected boolean"]);
    }

    #[test]
    fn every_violation_is_reported_not_just_the_first() {
        let body = json!({ "name": 42 });
        let violations = schema().check(Some(&body));

        assert_eq!(
            violations,
            vec!["name: expected string", "email: required field is missing"],
        );
    }

    #[test]
    fn missing_or_non_object_body_is_one_violation() {
        assert_eq!(schema().check(None), vec!["body: expected a JSON object"]);
        assert_eq!(schema().check(Some(&json!([1, 2]))), vec!["body: expected a JSON object"]);
    }

    #[test]
    fn null_required_field_counts_as_missing() {
        let body = json!({ "name": null, "email": "a@b.c" });
        assert_eq!(schema().check(Some(&body)), vec!["name: required field is missing"]);
    }

    #[tokio::test]
    async fn stage_rejects_with_the_full_list() {
        use bytes::Bytes;
        use http::{HeaderMap, Method};

        use crate::request::Request;

        let req = Request::new(Method::POST, "/users", HeaderMap::new(), Bytes::from_static(b"{}"));
        let mut ctx = Context::new(req, Default::default());

        let outcome = ValidateBody::new(schema()).inspect(&mut ctx).await;
        assert_eq!(
            outcome,
            Err(Reject::Validation(vec![
                "name: required field is missing".to_owned(),
                "email: required field is missing".to_owned(),
            ])),
        );
    }
}
