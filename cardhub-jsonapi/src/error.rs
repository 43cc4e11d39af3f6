//! The hub's error taxonomy and its JSON:API error-object serialization.
//!
//! Errors belong to the surface around the serializer (malformed requests,
//! missing cards, conflicting writes); the serializer itself never raises
//! one. The shapes live here so route handlers can report failures as
//! structured `{ "errors": [...] }` documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard reason phrase for an HTTP status code.
///
/// Used to default an error's `title` when the caller does not supply one.
#[must_use]
pub const fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        409 => "Conflict",
        410 => "Gone",
        415 => "Unsupported Media Type",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Error",
    }
}

/// Where in the request an error originated.
///
/// At most one of the variants is meaningful per error; keys absent from the
/// source are omitted from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorSource {
    /// JSON pointer into the request document (e.g. `/data/attributes/realm`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
    /// Name of the offending request header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Name of the offending query parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

impl ErrorSource {
    /// Source pointing at a location in the request document.
    #[must_use]
    pub fn pointer(pointer: impl Into<String>) -> Self {
        Self {
            pointer: Some(pointer.into()),
            ..Self::default()
        }
    }

    /// Source pointing at a request header.
    #[must_use]
    pub fn header(header: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
            ..Self::default()
        }
    }

    /// Source pointing at a query parameter.
    #[must_use]
    pub fn parameter(parameter: impl Into<String>) -> Self {
        Self {
            parameter: Some(parameter.into()),
            ..Self::default()
        }
    }
}

/// A hub error with a numeric status, a title defaulted from the status
/// code's reason phrase, and an optional source.
///
/// Compound failures (e.g. several invalid attributes in one request) hang
/// further errors off `additional_errors`; [`ErrorDocument`] flattens the
/// whole tree into one `errors` array.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub title: String,
    pub detail: String,
    pub source: Option<ErrorSource>,
    pub additional_errors: Vec<ApiError>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.status, self.title, self.detail)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Creates an error with the title defaulted from the status code.
    #[must_use]
    pub fn new(status: u16, detail: impl Into<String>) -> Self {
        Self {
            status,
            title: reason_phrase(status).to_string(),
            detail: detail.into(),
            source: None,
            additional_errors: Vec::new(),
        }
    }

    /// 400 Bad Request.
    #[must_use]
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, detail)
    }

    /// 401 Unauthorized.
    #[must_use]
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(401, detail)
    }

    /// 404 Not Found.
    #[must_use]
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, detail)
    }

    /// 409 Conflict.
    #[must_use]
    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::new(409, detail)
    }

    /// 422 Unprocessable Entity.
    #[must_use]
    pub fn unprocessable_entity(detail: impl Into<String>) -> Self {
        Self::new(422, detail)
    }

    /// Overrides the defaulted title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Attaches a source location.
    #[must_use]
    pub fn with_source(mut self, source: ErrorSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Hangs a further error off this one.
    #[must_use]
    pub fn with_additional(mut self, error: ApiError) -> Self {
        self.additional_errors.push(error);
        self
    }

    /// The serialized error-object form of this error alone.
    #[must_use]
    pub fn to_object(&self) -> ErrorObject {
        ErrorObject {
            status: self.status.to_string(),
            title: self.title.clone(),
            detail: self.detail.clone(),
            source: self.source.clone(),
        }
    }
}

/// One member of a document's `errors` array.
///
/// `status` is a string on the wire even though [`ApiError`] carries it
/// numerically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub status: String,
    pub title: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
}

/// A top-level `{ "errors": [...] }` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
}

impl From<&ApiError> for ErrorDocument {
    /// Flattens the error and its nested additional errors, depth-first,
    /// into a single `errors` array.
    fn from(error: &ApiError) -> Self {
        let mut errors = Vec::new();
        flatten(error, &mut errors);
        Self { errors }
    }
}

fn flatten(error: &ApiError, into: &mut Vec<ErrorObject>) {
    into.push(error.to_object());
    for additional in &error.additional_errors {
        flatten(additional, into);
    }
}
