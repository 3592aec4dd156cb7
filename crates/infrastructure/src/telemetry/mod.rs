//! Telemetry infrastructure
//!
//! Installs the process-wide tracing subscriber.

mod logging;

pub use logging::{TelemetryError, init_tracing};
