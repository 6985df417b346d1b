//! Domain ports: the seams between the resolver core and its adapters.
//!
//! The driven port ([`EmployeeDirectory`]) is implemented by the outbound
//! upstream client; the driving ports ([`EmployeeQuery`],
//! [`EmployeeCommand`]) are implemented by the employee service and consumed
//! by the HTTP adapter.

mod employee_directory;
mod employee_ops;

pub use employee_directory::{EmployeeDirectory, EmployeeDirectoryError};
pub use employee_ops::{EmployeeCommand, EmployeeQuery};

#[cfg(test)]
pub use employee_directory::MockEmployeeDirectory;
#[cfg(test)]
pub use employee_ops::{MockEmployeeCommand, MockEmployeeQuery};
