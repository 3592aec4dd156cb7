//! errmap HTTP presentation layer
//!
//! Maps logic errors onto HTTP responses. The category wire codes become the
//! `code` field of the JSON body.

pub mod error;

pub use error::{ApiError, ErrorResponse, http_status, set_expose_internal_errors};
