//! Error response bodies.
//!
//! Input errors use the `errorsMessages` list; everything else is an
//! RFC 7807 problem document.

use blogger_core::FieldError;
use serde::{Deserialize, Serialize};

/// Body of every 400 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
    pub errors_messages: Vec<FieldError>,
}

impl ValidationErrorResponse {
    pub fn new(errors_messages: Vec<FieldError>) -> Self {
        Self { errors_messages }
    }
}

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn unauthorized() -> Self {
        Self::new(401, "Unauthorized")
    }

    pub fn forbidden() -> Self {
        Self::new(403, "Forbidden")
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_detail(detail)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_body_shape() {
        let body = ValidationErrorResponse::new(vec![FieldError::new("title", "too long")]);

        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"errorsMessages": [{"message": "too long", "field": "title"}]})
        );
    }

    #[test]
    fn test_problem_details_skip_missing_detail() {
        let json = serde_json::to_value(ErrorResponse::unauthorized()).unwrap();

        assert_eq!(
            json,
            json!({"type": "about:blank", "title": "Unauthorized", "status": 401})
        );
    }

    #[test]
    fn test_not_found_carries_detail() {
        let json = serde_json::to_value(ErrorResponse::not_found("Blog 1 not found")).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["detail"], "Blog 1 not found");
    }
}
