//! Driven port for the upstream employee service.
//!
//! The domain owns the call contract and failure classification so the
//! resolver stays adapter-agnostic. The adapter must never swallow a
//! failure: every non-success outcome is either the explicit absent value
//! (404 on the item-get endpoint only) or one of these error variants.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{CreateEmployeeInput, Employee};

/// Classified failures surfaced while calling the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeDirectoryError {
    /// Network transport failed before receiving a response.
    #[error("upstream transport failed: {message}")]
    Transport {
        /// Transport failure description.
        message: String,
    },
    /// The upstream call exceeded the configured timeout.
    #[error("upstream timeout: {message}")]
    Timeout {
        /// Timeout description.
        message: String,
    },
    /// The upstream response could not be decoded.
    #[error("upstream response decode failed: {message}")]
    Decode {
        /// Decode failure description.
        message: String,
    },
    /// The upstream rate-limited the request (HTTP 429).
    #[error("upstream rate limited request: {message}")]
    RateLimited {
        /// Rate-limit description.
        message: String,
    },
    /// The upstream rejected the call with a non-404 4xx status.
    #[error("upstream client error {status}: {message}")]
    ClientStatus {
        /// Upstream HTTP status code.
        status: u16,
        /// Response description.
        message: String,
    },
    /// The upstream failed with a 5xx status.
    #[error("upstream server error {status}: {message}")]
    ServerStatus {
        /// Upstream HTTP status code.
        status: u16,
        /// Response description.
        message: String,
    },
}

impl EmployeeDirectoryError {
    /// Transport variant from any displayable source.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Timeout variant from any displayable source.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Decode variant from any displayable source.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Rate-limited variant from any displayable source.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }
}

/// Port for all communication with the upstream employee service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Fetch every employee. An absent or null upstream data field is an
    /// empty list, never an error.
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeDirectoryError>;

    /// Fetch one employee by upstream id. An upstream 404 is `Ok(None)`.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, EmployeeDirectoryError>;

    /// Create an employee from an already-validated input.
    async fn create(&self, input: &CreateEmployeeInput)
    -> Result<Employee, EmployeeDirectoryError>;

    /// Delete an employee by name (the only deletion the upstream supports).
    /// Returns `true` iff the upstream confirmed the deletion.
    async fn delete_by_name(&self, name: &str) -> Result<bool, EmployeeDirectoryError>;
}
