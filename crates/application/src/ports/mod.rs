//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application inspects failures
//! raised by external systems. Adapters in the infrastructure layer implement
//! these ports for concrete drivers.

mod database_error_port;
mod transport_error_port;

/// A single link of an error chain, as the ports inspect it
pub type DynError = dyn std::error::Error + 'static;

#[cfg(test)]
pub use database_error_port::MockDatabaseErrorPort;
pub use database_error_port::{DatabaseErrorDetails, DatabaseErrorPort};
#[cfg(test)]
pub use transport_error_port::MockTransportErrorPort;
pub use transport_error_port::{RpcCode, TransportErrorPort, TransportStatus};
