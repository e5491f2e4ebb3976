// Caller side validation of post bodies.
//
// `title` and `content` must both be present and be JSON strings. Anything else,
// including a body that is not a JSON object, fails with one entry per field.

use axum::{Json, extract::rejection::JsonRejection};
use serde::Serialize;
use serde_json::Value;

use crate::modules::posts::core::post::PostDraft;

pub const INVALID_VALUE: &str = "Invalid value";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub location: &'static str,
    pub param: &'static str,
    pub msg: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl FieldError {
    fn invalid(param: &'static str, value: Option<&Value>) -> Self {
        Self {
            location: "body",
            param,
            msg: INVALID_VALUE,
            value: value.cloned(),
        }
    }
}

/// A body that could not be read as JSON is validated as if it were empty.
pub fn body_or_null(body: Result<Json<Value>, JsonRejection>) -> Value {
    match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable post body");
            Value::Null
        }
    }
}

pub fn validate_post_body(body: &Value) -> Result<PostDraft, Vec<FieldError>> {
    let mut errors = Vec::new();
    let title = string_field(body, "title", &mut errors);
    let content = string_field(body, "content", &mut errors);

    match (title, content) {
        (Some(title), Some(content)) => Ok(PostDraft::new(title, content)),
        _ => Err(errors),
    }
}

fn string_field<'a>(
    body: &'a Value,
    param: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    let value = body.get(param);
    match value {
        Some(Value::String(s)) => Some(s.as_str()),
        _ => {
            errors.push(FieldError::invalid(param, value));
            None
        }
    }
}

#[cfg(test)]
mod post_body_validation_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn params(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.param).collect()
    }

    #[rstest]
    fn it_should_accept_string_title_and_content() {
        let draft = validate_post_body(&json!({ "title": "T", "content": "C" })).unwrap();
        assert_eq!(draft, PostDraft::new("T", "C"));
    }

    #[rstest]
    fn it_should_accept_empty_strings() {
        assert!(validate_post_body(&json!({ "title": "", "content": "" })).is_ok());
    }

    #[rstest]
    fn it_should_ignore_unknown_fields() {
        let draft =
            validate_post_body(&json!({ "id": "x", "title": "T", "content": "C" })).unwrap();
        assert_eq!(draft, PostDraft::new("T", "C"));
    }

    #[rstest]
    fn it_should_reject_a_missing_title() {
        let errors = validate_post_body(&json!({ "content": "C" })).unwrap_err();
        assert_eq!(params(&errors), vec!["title"]);
        assert_eq!(errors[0].value, None);
        assert_eq!(errors[0].msg, INVALID_VALUE);
    }

    #[rstest]
    #[case(json!(42))]
    #[case(json!(null))]
    #[case(json!(["T"]))]
    #[case(json!({ "nested": true }))]
    fn it_should_reject_a_non_string_title(#[case] title: Value) {
        let errors = validate_post_body(&json!({ "title": title.clone(), "content": "C" }))
            .unwrap_err();
        assert_eq!(params(&errors), vec!["title"]);
        assert_eq!(errors[0].value, Some(title));
    }

    #[rstest]
    fn it_should_report_both_fields_in_order() {
        let errors = validate_post_body(&json!({ "title": 1, "content": false })).unwrap_err();
        assert_eq!(params(&errors), vec!["title", "content"]);
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!("a string body"))]
    #[case(json!([1, 2, 3]))]
    fn it_should_reject_bodies_that_are_not_objects(#[case] body: Value) {
        let errors = validate_post_body(&body).unwrap_err();
        assert_eq!(params(&errors), vec!["title", "content"]);
    }
}
