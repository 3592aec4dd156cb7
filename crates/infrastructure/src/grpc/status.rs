//! tonic status inspection

use std::error::Error;

use application::ports::{RpcCode, TransportErrorPort, TransportStatus};
use application::services::{Classified, classify_transport_error};

/// [`TransportErrorPort`] for `tonic::Status`
#[derive(Debug, Clone, Copy, Default)]
pub struct TonicStatusAdapter;

impl TransportErrorPort for TonicStatusAdapter {
    fn status(&self, err: &(dyn Error + 'static)) -> Option<TransportStatus> {
        let status = err.downcast_ref::<tonic::Status>()?;
        Some(TransportStatus::new(rpc_code(status.code()), status.message()))
    }
}

/// Map a tonic status code onto the application's code space
///
/// `tonic::Code` already folds numbers outside the canonical range into
/// `Code::Unknown`, so this never yields [`RpcCode::Other`].
#[must_use]
pub fn rpc_code(code: tonic::Code) -> RpcCode {
    RpcCode::from_i32(i32::from(code))
}

/// Classify an error raised by a tonic client, or an error wrapping one
///
/// `None` (no error) yields `None`.
pub fn classify_grpc_error<E>(err: Option<E>) -> Option<Classified<E>>
where
    E: Error + Send + Sync + 'static,
{
    classify_transport_error(&TonicStatusAdapter, err)
}
