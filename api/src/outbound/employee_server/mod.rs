//! HTTP adapter for the upstream mock employee service.

mod dto;
mod http_client;

pub use http_client::{EmployeeServerClient, EmployeeServerClientError};
