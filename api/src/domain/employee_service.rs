//! Employee request-resolution service.
//!
//! Implements every public operation as one or more [`EmployeeDirectory`]
//! calls plus a pure in-memory transform. The service holds no per-request
//! state, so one instance is shared across all concurrent requests.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::{
    EmployeeCommand, EmployeeDirectory, EmployeeDirectoryError, EmployeeQuery,
};
use crate::domain::{CreateEmployeeDraft, Employee, Error, Violation};

const TOP_EARNER_LIMIT: usize = 10;

/// Resolver implementing the driving ports on top of the upstream directory.
#[derive(Clone)]
pub struct EmployeeService<D> {
    directory: Arc<D>,
}

impl<D> EmployeeService<D> {
    /// Create a service backed by the given upstream directory.
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

impl<D> EmployeeService<D>
where
    D: EmployeeDirectory,
{
    fn map_directory_error(error: EmployeeDirectoryError) -> Error {
        warn!(error = %error, "upstream employee service call failed");
        match error {
            EmployeeDirectoryError::RateLimited { .. } => {
                Error::upstream_rate_limited("Rate limit exceeded. Please try later.")
            }
            EmployeeDirectoryError::ClientStatus { status, .. } => {
                Error::upstream_client(status, format!("Upstream client error: {status}"))
            }
            EmployeeDirectoryError::Transport { .. }
            | EmployeeDirectoryError::Timeout { .. }
            | EmployeeDirectoryError::Decode { .. }
            | EmployeeDirectoryError::ServerStatus { .. } => {
                Error::upstream_server("Upstream server error")
            }
        }
    }

    fn parse_employee_id(id: &str) -> Result<Uuid, Error> {
        Uuid::parse_str(id).map_err(|_| Error::invalid_request("Invalid employee id format"))
    }

    fn first_violation_error(violations: Vec<Violation>) -> Error {
        let message = violations
            .first()
            .map_or_else(|| "Invalid request".to_owned(), |v| v.message.clone());
        Error::invalid_request(message).with_details(json!({ "violations": violations }))
    }

    async fn fetch_all(&self) -> Result<Vec<Employee>, Error> {
        self.directory
            .list_all()
            .await
            .map_err(Self::map_directory_error)
    }
}

#[async_trait]
impl<D> EmployeeQuery for EmployeeService<D>
where
    D: EmployeeDirectory,
{
    async fn list(&self) -> Result<Vec<Employee>, Error> {
        self.fetch_all().await
    }

    async fn search(&self, term: &str) -> Result<Vec<Employee>, Error> {
        let employees = self.fetch_all().await?;
        // Product rule: a blank term means "no filter", not "no results".
        if term.trim().is_empty() {
            return Ok(employees);
        }
        let needle = term.to_lowercase();
        Ok(employees
            .into_iter()
            .filter(|employee| employee.name.to_lowercase().contains(&needle))
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Employee, Error> {
        let employee_id = Self::parse_employee_id(id)?;
        self.directory
            .find_by_id(employee_id)
            .await
            .map_err(Self::map_directory_error)?
            .ok_or_else(|| Error::not_found(format!("Employee not found: {id}")))
    }

    async fn highest_salary(&self) -> Result<i64, Error> {
        let employees = self.fetch_all().await?;
        Ok(employees
            .iter()
            .filter_map(|employee| employee.salary)
            .max()
            .unwrap_or(0))
    }

    async fn top_earner_names(&self) -> Result<Vec<String>, Error> {
        let mut employees = self.fetch_all().await?;
        // Stable sort keeps upstream order for ties; Option's ordering puts
        // salary-absent employees last in a descending sort.
        employees.sort_by(|a, b| b.salary.cmp(&a.salary));
        Ok(employees
            .into_iter()
            .take(TOP_EARNER_LIMIT)
            .map(|employee| employee.name)
            .collect())
    }
}

#[async_trait]
impl<D> EmployeeCommand for EmployeeService<D>
where
    D: EmployeeDirectory,
{
    async fn create(&self, draft: CreateEmployeeDraft) -> Result<Employee, Error> {
        let input = draft.validate().map_err(Self::first_violation_error)?;
        self.directory
            .create(&input)
            .await
            .map_err(Self::map_directory_error)
    }

    async fn delete_by_id(&self, id: &str) -> Result<String, Error> {
        let employee_id = Self::parse_employee_id(id)?;
        let employee = self
            .directory
            .find_by_id(employee_id)
            .await
            .map_err(Self::map_directory_error)?
            .ok_or_else(|| Error::not_found(format!("Employee not found: {id}")))?;

        // The upstream deletes by name only; if two employees share a name,
        // which one goes is the upstream's call.
        let deleted = self
            .directory
            .delete_by_name(&employee.name)
            .await
            .map_err(Self::map_directory_error)?;
        if !deleted {
            return Err(Error::upstream_refused(format!(
                "Upstream refused to delete employee: {}",
                employee.name
            )));
        }
        Ok(employee.name)
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
