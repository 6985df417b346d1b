//! REST façade over the mock employee service.
//!
//! The crate follows a hexagonal layout: `domain` holds the
//! transport-agnostic core (entities, validation, error taxonomy, ports, and
//! the request-resolution service), `outbound` the reqwest upstream adapter,
//! `inbound` the actix-web handlers, `middleware` the trace-id plumbing,
//! `server` the configuration, and `doc` the OpenAPI document.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
