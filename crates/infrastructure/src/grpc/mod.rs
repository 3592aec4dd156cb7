//! gRPC module
//!
//! tonic adapter for reading status metadata out of RPC client errors.

mod status;

pub use status::{TonicStatusAdapter, classify_grpc_error, rpc_code};
