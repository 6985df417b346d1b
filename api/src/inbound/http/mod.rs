//! HTTP inbound adapter exposing REST endpoints.

pub mod employees;
pub mod error;
pub mod health;
pub mod state;

pub use error::ApiResult;

use actix_web::web;

/// Register the public employee routes.
///
/// Literal segments are registered before the `{id}` route so
/// `/employee/highestSalary` and friends are never captured as identifiers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employee")
            .service(employees::list_employees)
            .service(employees::search_employees)
            .service(employees::highest_salary)
            .service(employees::top_earner_names)
            .service(employees::create_employee)
            .service(employees::get_employee)
            .service(employees::delete_employee),
    );
}
