//! Transport-agnostic core: entities, validation, errors, ports, and the
//! request-resolution service.
//!
//! Public surface:
//! - [`Employee`], [`CreateEmployeeDraft`], [`CreateEmployeeInput`],
//!   [`Violation`] — entity and creation payloads.
//! - [`Error`], [`ErrorCode`] — the façade's bounded error taxonomy.
//! - [`EmployeeService`] — the resolver implementing the driving ports.

pub mod employee;
pub mod error;
pub mod ports;

mod employee_service;

pub use self::employee::{CreateEmployeeDraft, CreateEmployeeInput, Employee, Violation};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode};

/// Convenient result alias for domain operations.
pub type ApiResult<T> = Result<T, Error>;
