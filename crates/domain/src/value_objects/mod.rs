//! Value objects
//!
//! Immutable, comparable values shared by every layer.

mod error_kind;

pub use error_kind::ErrorKind;
