//! Application services - Error classification use cases

mod classification;
mod conflict_detector;
mod database_error_classifier;
pub mod sql_state;
mod transport_error_classifier;

pub use classification::Classified;
pub use conflict_detector::is_concurrent_transaction_conflict;
pub use database_error_classifier::classify_database_error;
pub use transport_error_classifier::{UNKNOWN_INTERNAL_ERROR, classify_transport_error};
