//! Wire DTOs for the upstream employee service.
//!
//! The adapter decodes the upstream envelope into these transport DTOs
//! first, then maps into domain [`Employee`] values in one pass. Upstream
//! field names (`employee_name` etc.) never leak past this module.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{CreateEmployeeInput, Employee};

/// Upstream `{ data, status }` wrapper. Only `data` carries payload; the
/// `status` string is ignored.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(super) struct EnvelopeDto<T> {
    #[serde(default)]
    pub(super) data: Option<T>,
}

/// One employee record as the upstream serializes it.
#[derive(Debug, Deserialize)]
pub(super) struct EmployeeRecordDto {
    pub(super) id: Option<Uuid>,
    #[serde(rename = "employee_name")]
    pub(super) name: Option<String>,
    #[serde(rename = "employee_salary")]
    pub(super) salary: Option<i64>,
    #[serde(rename = "employee_age")]
    pub(super) age: Option<i64>,
    #[serde(rename = "employee_title")]
    pub(super) title: Option<String>,
    #[serde(rename = "employee_email")]
    pub(super) email: Option<String>,
}

impl EmployeeRecordDto {
    /// Map one wire record into the domain shape. The upstream-assigned
    /// UUID is rendered canonically; it is never synthesized here.
    pub(super) fn into_employee(self) -> Result<Employee, String> {
        let id = self.id.ok_or("employee record missing id")?;
        let name = self
            .name
            .ok_or_else(|| format!("employee record {id} missing name"))?;
        Ok(Employee {
            id: id.to_string(),
            name,
            salary: self.salary,
            age: self.age,
            title: self.title.unwrap_or_default(),
            email: self.email,
        })
    }
}

/// Creation request body; the upstream accepts plain field names here.
#[derive(Debug, Serialize)]
pub(super) struct CreateEmployeeRequestDto<'a> {
    pub(super) name: &'a str,
    pub(super) salary: i64,
    pub(super) age: i64,
    pub(super) title: &'a str,
}

impl<'a> From<&'a CreateEmployeeInput> for CreateEmployeeRequestDto<'a> {
    fn from(input: &'a CreateEmployeeInput) -> Self {
        Self {
            name: &input.name,
            salary: input.salary,
            age: input.age,
            title: &input.title,
        }
    }
}

/// Deletion request body; the upstream deletes by name only.
#[derive(Debug, Serialize)]
pub(super) struct DeleteEmployeeRequestDto<'a> {
    pub(super) name: &'a str,
}
