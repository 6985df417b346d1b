//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EmployeeCommand, EmployeeQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub queries: Arc<dyn EmployeeQuery>,
    pub commands: Arc<dyn EmployeeCommand>,
}

impl HttpState {
    /// Construct state from the read and write ports.
    pub fn new(queries: Arc<dyn EmployeeQuery>, commands: Arc<dyn EmployeeCommand>) -> Self {
        Self { queries, commands }
    }
}
