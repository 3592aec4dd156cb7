//! Domain layer for errmap
//!
//! Defines the stable vocabulary of logic-error categories and the logic error
//! value that carries one. This layer knows nothing about databases or RPC
//! transports; it only describes what a classified failure looks like.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{LogicError, TX_CONCURRENT_EXEC, error_chain, find_logic_error, is_logic_error};
pub use errors::DomainError;
pub use value_objects::ErrorKind;
