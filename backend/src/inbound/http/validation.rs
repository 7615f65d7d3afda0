//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{BlogId, Error};

/// Validation error codes attached to `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureCode {
    MissingField,
    InvalidId,
    InvalidField,
}

impl FailureCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidId => "invalid_id",
            Self::InvalidField => "invalid_field",
        }
    }
}

/// Newtype wrapper for HTTP field names to keep call sites typo-resistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, message: String, code: FailureCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        format!("missing required field: {name}"),
        FailureCode::MissingField,
    )
}

pub(crate) fn invalid_field_error(field: FieldName, reason: impl std::fmt::Display) -> Error {
    field_error(field, reason.to_string(), FailureCode::InvalidField)
}

/// Require a non-blank string field.
pub(crate) fn required_string(value: Option<String>, field: FieldName) -> Result<String, Error> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(missing_field_error(field)),
    }
}

/// Parse a textual blog identifier from a path segment.
///
/// Malformed identifiers are a client error distinct from a miss on lookup.
pub(crate) fn parse_blog_id(raw: &str) -> Result<BlogId, Error> {
    BlogId::new(raw).map_err(|_| {
        Error::invalid_request("blog id is malformed").with_details(json!({
            "field": "id",
            "value": raw,
            "code": FailureCode::InvalidId.as_str(),
        }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case(None)]
    #[case(Some(String::new()))]
    #[case(Some("   ".to_owned()))]
    fn required_string_rejects_absent_and_blank_values(#[case] value: Option<String>) {
        let err = required_string(value, FieldName::new("title")).expect_err("must fail");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err.details().expect("details attached");
        assert_eq!(details.get("field"), Some(&Value::from("title")));
        assert_eq!(details.get("code"), Some(&Value::from("missing_field")));
    }

    #[test]
    fn required_string_passes_values_through() {
        let value = required_string(Some("React patterns".to_owned()), FieldName::new("title"))
            .expect("value accepted");
        assert_eq!(value, "React patterns");
    }

    #[rstest]
    #[case("5a3d5da59070081a82a3445")]
    #[case("zzz")]
    #[case("")]
    fn malformed_blog_ids_are_client_errors(#[case] raw: &str) {
        let err = parse_blog_id(raw).expect_err("must fail");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err.details().expect("details attached");
        assert_eq!(details.get("code"), Some(&Value::from("invalid_id")));
    }

    #[test]
    fn well_formed_blog_ids_parse() {
        let id = crate::domain::BlogId::random();
        let parsed = parse_blog_id(&id.to_string()).expect("id parses");
        assert_eq!(parsed, id);
    }
}
