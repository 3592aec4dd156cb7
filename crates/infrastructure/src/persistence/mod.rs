//! Persistence module
//!
//! sqlx adapter for inspecting PostgreSQL driver errors.

mod error;

pub use error::{SqlxErrorAdapter, classify_sqlx_error, is_sqlx_concurrent_conflict};
