//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports for concrete drivers (sqlx for
//! PostgreSQL, tonic for gRPC) and carries configuration and telemetry setup.

pub mod config;
pub mod grpc;
pub mod persistence;
pub mod telemetry;

pub use config::{AppConfig, Environment, ErrorsConfig, LogFormat, LoggingConfig};
pub use grpc::{TonicStatusAdapter, classify_grpc_error};
pub use persistence::{SqlxErrorAdapter, classify_sqlx_error, is_sqlx_concurrent_conflict};
pub use telemetry::{TelemetryError, init_tracing};
