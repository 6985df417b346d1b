//! Driving ports consumed by the HTTP adapter.
//!
//! Split into read and write sides so handlers depend only on what they use.
//! Both are implemented by `EmployeeService` and return domain [`Error`]s
//! ready for the HTTP mapping.

use async_trait::async_trait;

use crate::domain::{CreateEmployeeDraft, Employee, Error};

/// Read-side operations over the employee façade.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeQuery: Send + Sync {
    /// All employees, in upstream order.
    async fn list(&self) -> Result<Vec<Employee>, Error>;

    /// Employees whose name contains `term` case-insensitively; a blank
    /// term returns the unfiltered list.
    async fn search(&self, term: &str) -> Result<Vec<Employee>, Error>;

    /// One employee by id. The id must be a well-formed UUID.
    async fn get(&self, id: &str) -> Result<Employee, Error>;

    /// The maximum salary across all employees, or 0 when none has one.
    async fn highest_salary(&self) -> Result<i64, Error>;

    /// Names of the ten highest-earning employees, descending.
    async fn top_earner_names(&self) -> Result<Vec<String>, Error>;
}

/// Write-side operations over the employee façade.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeCommand: Send + Sync {
    /// Validate and create an employee; returns the upstream-created entity.
    async fn create(&self, draft: CreateEmployeeDraft) -> Result<Employee, Error>;

    /// Delete an employee by id; returns the deleted employee's name.
    async fn delete_by_id(&self, id: &str) -> Result<String, Error>;
}
