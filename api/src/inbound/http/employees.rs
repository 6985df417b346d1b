//! Employee API handlers.
//!
//! ```text
//! GET    /employee
//! GET    /employee/search/{term}
//! GET    /employee/{id}
//! GET    /employee/highestSalary
//! GET    /employee/topTenHighestEarningEmployeeNames
//! POST   /employee
//! DELETE /employee/{id}
//! ```
//!
//! The literal segments are registered before `{id}` in
//! [`super::configure`] so they are never captured as identifiers.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{CreateEmployeeDraft, Employee};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Response header announcing a successful creation.
pub const CREATED_MESSAGE_HEADER: &str = "X-Message";

/// Public employee representation.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EmployeeBody {
    /// Upstream-assigned identifier (canonical UUID string).
    pub id: String,
    pub name: String,
    /// Absent when the upstream holds no salary for this employee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<Employee> for EmployeeBody {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            salary: employee.salary,
            age: employee.age,
            title: employee.title,
            email: employee.email,
        }
    }
}

/// Creation request body for `POST /employee`.
///
/// All fields optional on the wire; validation reports what is missing or
/// out of range with a 400 and per-field violations in the error details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateEmployeeBody {
    pub name: Option<String>,
    pub salary: Option<i64>,
    pub age: Option<i64>,
    pub title: Option<String>,
}

impl From<CreateEmployeeBody> for CreateEmployeeDraft {
    fn from(body: CreateEmployeeBody) -> Self {
        Self {
            name: body.name,
            salary: body.salary,
            age: body.age,
            title: body.title,
        }
    }
}

fn employee_bodies(employees: Vec<Employee>) -> Vec<EmployeeBody> {
    employees.into_iter().map(EmployeeBody::from).collect()
}

/// List all employees in upstream order.
#[utoipa::path(
    get,
    path = "/employee",
    responses(
        (status = 200, description = "All employees", body = [EmployeeBody]),
        (status = 429, description = "Upstream rate limited", body = ErrorBody),
        (status = 502, description = "Upstream failure", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("")]
pub async fn list_employees(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<EmployeeBody>>> {
    let employees = state.queries.list().await?;
    Ok(web::Json(employee_bodies(employees)))
}

/// Search employees by case-insensitive name substring.
///
/// A blank term returns the unfiltered list.
#[utoipa::path(
    get,
    path = "/employee/search/{term}",
    params(("term" = String, Path, description = "Name fragment to match")),
    responses(
        (status = 200, description = "Matching employees", body = [EmployeeBody]),
        (status = 429, description = "Upstream rate limited", body = ErrorBody),
        (status = 502, description = "Upstream failure", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "searchEmployees"
)]
#[get("/search/{term}")]
pub async fn search_employees(
    state: web::Data<HttpState>,
    term: web::Path<String>,
) -> ApiResult<web::Json<Vec<EmployeeBody>>> {
    let employees = state.queries.search(&term).await?;
    Ok(web::Json(employee_bodies(employees)))
}

/// Maximum salary across all employees, `0` when none has one.
#[utoipa::path(
    get,
    path = "/employee/highestSalary",
    responses(
        (status = 200, description = "Highest salary", body = i64),
        (status = 429, description = "Upstream rate limited", body = ErrorBody),
        (status = 502, description = "Upstream failure", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "highestSalary"
)]
#[get("/highestSalary")]
pub async fn highest_salary(state: web::Data<HttpState>) -> ApiResult<web::Json<i64>> {
    let salary = state.queries.highest_salary().await?;
    Ok(web::Json(salary))
}

/// Names of the ten highest-earning employees, descending by salary.
#[utoipa::path(
    get,
    path = "/employee/topTenHighestEarningEmployeeNames",
    responses(
        (status = 200, description = "Top earner names", body = [String]),
        (status = 429, description = "Upstream rate limited", body = ErrorBody),
        (status = 502, description = "Upstream failure", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "topTenHighestEarningEmployeeNames"
)]
#[get("/topTenHighestEarningEmployeeNames")]
pub async fn top_earner_names(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<String>>> {
    let names = state.queries.top_earner_names().await?;
    Ok(web::Json(names))
}

/// Fetch one employee by id.
#[utoipa::path(
    get,
    path = "/employee/{id}",
    params(("id" = String, Path, description = "Employee UUID")),
    responses(
        (status = 200, description = "Employee", body = EmployeeBody),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No such employee", body = ErrorBody),
        (status = 429, description = "Upstream rate limited", body = ErrorBody),
        (status = 502, description = "Upstream failure", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "getEmployeeById"
)]
#[get("/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<EmployeeBody>> {
    let employee = state.queries.get(&id).await?;
    Ok(web::Json(EmployeeBody::from(employee)))
}

/// Create an employee upstream.
///
/// Returns `201 Created` with the upstream-created entity and an
/// `X-Message` header confirming the name.
#[utoipa::path(
    post,
    path = "/employee",
    request_body = CreateEmployeeBody,
    responses(
        (
            status = 201,
            description = "Employee created",
            body = EmployeeBody,
            headers(("X-Message" = String, description = "Creation confirmation"))
        ),
        (status = 400, description = "Validation failure", body = ErrorBody),
        (status = 429, description = "Upstream rate limited", body = ErrorBody),
        (status = 502, description = "Upstream failure", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<CreateEmployeeBody>,
) -> ApiResult<HttpResponse> {
    let created = state
        .commands
        .create(CreateEmployeeDraft::from(payload.into_inner()))
        .await?;
    let message = format!("Employee successfully added: {}", created.name);
    Ok(HttpResponse::Created()
        .insert_header((CREATED_MESSAGE_HEADER, message))
        .json(EmployeeBody::from(created)))
}

/// Delete an employee by id.
///
/// The upstream only deletes by name, so the employee is looked up first;
/// an upstream refusal is reported as a bad gateway, distinct from 404.
#[utoipa::path(
    delete,
    path = "/employee/{id}",
    params(("id" = String, Path, description = "Employee UUID")),
    responses(
        (status = 200, description = "Deleted; body carries the name", body = String),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No such employee", body = ErrorBody),
        (status = 429, description = "Upstream rate limited", body = ErrorBody),
        (status = 502, description = "Upstream refused or failed", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployeeById"
)]
#[delete("/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let name = state.commands.delete_by_id(&id).await?;
    Ok(HttpResponse::Ok().body(format!("{name} deleted successfully")))
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
