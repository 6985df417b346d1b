//! Domain error type and the façade's bounded error taxonomy.
//!
//! These errors are transport agnostic. The inbound HTTP adapter maps them to
//! status codes and JSON payloads; the domain only records what went wrong.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::middleware::trace::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested employee does not exist upstream.
    NotFound,
    /// The upstream service reported rate limiting; retry later.
    UpstreamRateLimited,
    /// The upstream service rejected the call with a non-404 4xx.
    UpstreamClient,
    /// The upstream service failed (5xx, timeout, transport, bad payload).
    UpstreamServer,
    /// The upstream service declined the operation without erroring.
    UpstreamRefused,
    /// An unexpected error occurred inside the façade.
    InternalError,
}

/// Domain error payload.
///
/// Constructors capture the ambient [`TraceId`] so error responses correlate
/// with request logs without handlers threading it through.
///
/// # Examples
/// ```
/// use employee_api::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Employee not found: 42");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    /// Upstream status carried through for [`ErrorCode::UpstreamClient`].
    upstream_status: Option<u16>,
    trace_id: Option<String>,
    details: Option<Value>,
}

impl Error {
    /// Create a new error, capturing the current trace identifier if one is
    /// in scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            upstream_status: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Upstream HTTP status preserved for pass-through responses.
    pub fn upstream_status(&self) -> Option<u16> {
        self.upstream_status
    }

    /// Correlation identifier for tracing this error across systems.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary structured details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use employee_api::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "name" }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::UpstreamRateLimited`].
    pub fn upstream_rate_limited(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamRateLimited, message)
    }

    /// Pass an upstream 4xx through with its original status code.
    pub fn upstream_client(status: u16, message: impl Into<String>) -> Self {
        let mut error = Self::new(ErrorCode::UpstreamClient, message);
        error.upstream_status = Some(status);
        error
    }

    /// Convenience constructor for [`ErrorCode::UpstreamServer`].
    pub fn upstream_server(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamServer, message)
    }

    /// Convenience constructor for [`ErrorCode::UpstreamRefused`].
    pub fn upstream_refused(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamRefused, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn constructors_set_expected_codes() {
        assert_eq!(
            Error::invalid_request("bad").code(),
            ErrorCode::InvalidRequest
        );
        assert_eq!(Error::not_found("gone").code(), ErrorCode::NotFound);
        assert_eq!(
            Error::upstream_refused("no").code(),
            ErrorCode::UpstreamRefused
        );
    }

    #[test]
    fn upstream_client_preserves_status() {
        let error = Error::upstream_client(418, "Upstream client error: 418");
        assert_eq!(error.code(), ErrorCode::UpstreamClient);
        assert_eq!(error.upstream_status(), Some(418));
    }

    #[test]
    fn details_attach_to_error() {
        let error = Error::invalid_request("bad").with_details(json!({ "field": "salary" }));
        assert_eq!(
            error.details().and_then(|d| d.get("field")),
            Some(&json!("salary"))
        );
    }

    #[test]
    fn trace_id_defaults_to_none_outside_request_scope() {
        assert!(Error::internal("boom").trace_id().is_none());
    }
}
