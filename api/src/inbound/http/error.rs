//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};
use crate::middleware::TRACE_ID_HEADER;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// JSON body returned for every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Numeric HTTP status mirrored into the body.
    pub code: u16,
    /// Stable machine-readable error category.
    pub error: ErrorCode,
    /// Human-readable description of the failure.
    pub message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Supplementary structured details, such as validation violations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

fn status_for(error: &Error) -> StatusCode {
    match error.code() {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::UpstreamRateLimited => StatusCode::TOO_MANY_REQUESTS,
        // Pass-through of the upstream's original client status; anything
        // unrepresentable degrades to 502.
        ErrorCode::UpstreamClient => error
            .upstream_status()
            .and_then(|status| StatusCode::from_u16(status).ok())
            .unwrap_or(StatusCode::BAD_GATEWAY),
        ErrorCode::UpstreamServer | ErrorCode::UpstreamRefused => StatusCode::BAD_GATEWAY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn body_for(error: &Error, status: StatusCode) -> ErrorBody {
    // Do not leak internal failure detail to clients.
    let message = if matches!(error.code(), ErrorCode::InternalError) {
        "Internal server error".to_owned()
    } else {
        error.message().to_owned()
    };
    ErrorBody {
        code: status.as_u16(),
        error: error.code(),
        message,
        trace_id: error.trace_id().map(str::to_owned),
        details: error.details().cloned(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(body_for(self, status))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::invalid_request(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case::not_found(Error::not_found("gone"), StatusCode::NOT_FOUND)]
    #[case::rate_limited(
        Error::upstream_rate_limited("slow down"),
        StatusCode::TOO_MANY_REQUESTS
    )]
    #[case::upstream_server(Error::upstream_server("broken"), StatusCode::BAD_GATEWAY)]
    #[case::upstream_refused(Error::upstream_refused("no"), StatusCode::BAD_GATEWAY)]
    #[case::internal(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn domain_codes_map_to_expected_statuses(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[test]
    fn upstream_client_status_passes_through() {
        let error = Error::upstream_client(418, "Upstream client error: 418");
        assert_eq!(error.status_code().as_u16(), 418);
    }

    #[test]
    fn unrepresentable_upstream_status_degrades_to_bad_gateway() {
        let error = Error::upstream_client(42, "Upstream client error: 42");
        assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn body_mirrors_status_and_keeps_details() {
        let error = Error::invalid_request("age must be at least 16")
            .with_details(json!({ "violations": [] }))
            .with_trace_id("abc");
        let body = body_for(&error, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, 400);
        assert_eq!(body.message, "age must be at least 16");
        assert_eq!(body.trace_id.as_deref(), Some("abc"));
        assert!(body.details.is_some());
    }

    #[test]
    fn internal_messages_are_redacted() {
        let error = Error::internal("connection string leaked");
        let body = body_for(&error, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Internal server error");
        assert_eq!(body.code, 500);
    }
}
