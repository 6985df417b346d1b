//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification covering the employee
//! endpoints and health probes. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::domain::ErrorCode;
use crate::inbound::http::employees::{CreateEmployeeBody, EmployeeBody};
use crate::inbound::http::error::ErrorBody;

/// OpenAPI document for the employee façade API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee façade API",
        description = "REST façade over the mock employee service: listing, \
            search, salary aggregates, creation, and deletion."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::search_employees,
        crate::inbound::http::employees::highest_salary,
        crate::inbound::http::employees::top_earner_names,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(EmployeeBody, CreateEmployeeBody, ErrorBody, ErrorCode)),
    tags(
        (name = "employees", description = "Employee queries and commands"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_registers_every_employee_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/employee",
            "/employee/search/{term}",
            "/employee/highestSalary",
            "/employee/topTenHighestEarningEmployeeNames",
            "/employee/{id}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path {path} in OpenAPI document"
            );
        }
    }

    #[test]
    fn error_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components present");
        assert!(components.schemas.contains_key("ErrorBody"));
        assert!(components.schemas.contains_key("ErrorCode"));
    }
}
