//! Application layer - Error classification use cases
//!
//! Defines the ports through which raw database and transport errors are
//! inspected, and the pure services that turn them into logic errors.
//! Adapters in the infrastructure layer implement the ports.

pub mod ports;
pub mod services;

pub use ports::*;
pub use services::*;
