//! Domain entities

mod logic_error;

pub use logic_error::{LogicError, TX_CONCURRENT_EXEC, error_chain, find_logic_error, is_logic_error};
