//! Transport (RPC) error classification

use std::error::Error;

use domain::{ErrorKind, LogicError, error_chain};
use tracing::{debug, trace};

use super::classification::Classified;
use crate::ports::{RpcCode, TransportErrorPort, TransportStatus};

/// Message used when the status code has no mapping
pub const UNKNOWN_INTERNAL_ERROR: &str = "unknown internal error";

/// Convert an RPC client error into a logic error
///
/// `None` means there was no error and yields `None`. An error without RPC
/// status metadata is handed back as [`Classified::Unrecognized`]. Every
/// mapped status code keeps the status message as the message override. `OK`
/// and numbers outside the canonical code space have no mapping and become
/// [`ErrorKind::Internal`] with [`UNKNOWN_INTERNAL_ERROR`] instead.
pub fn classify_transport_error<P, E>(port: &P, err: Option<E>) -> Option<Classified<E>>
where
    P: TransportErrorPort + ?Sized,
    E: Error + Send + Sync + 'static,
{
    let err = err?;

    let Some(TransportStatus { code, message }) =
        error_chain(&err).find_map(|link| port.status(link))
    else {
        trace!(error = %err, "Transport error carries no status, passing through");
        return Some(Classified::Unrecognized(err));
    };

    let logic = match kind_for(code) {
        Some(kind) => LogicError::new(kind).with_message(message),
        None => LogicError::new(ErrorKind::Internal).with_message(UNKNOWN_INTERNAL_ERROR),
    };
    debug!(kind = %logic.kind(), code = %code, "Classified transport error");
    Some(Classified::Recognized(logic.wrap(err)))
}

const fn kind_for(code: RpcCode) -> Option<ErrorKind> {
    let kind = match code {
        RpcCode::InvalidArgument => ErrorKind::BadRequest,
        RpcCode::Unauthenticated => ErrorKind::Unauthorized,
        RpcCode::PermissionDenied => ErrorKind::Forbidden,
        RpcCode::NotFound => ErrorKind::NotFound,
        RpcCode::AlreadyExists | RpcCode::Aborted => ErrorKind::Conflict,
        RpcCode::FailedPrecondition | RpcCode::OutOfRange => ErrorKind::UnprocessableEntity,
        RpcCode::Unimplemented | RpcCode::DataLoss => ErrorKind::NotAcceptable,
        RpcCode::Unavailable => ErrorKind::ServiceUnavailable,
        RpcCode::Internal | RpcCode::Unknown => ErrorKind::Internal,
        RpcCode::DeadlineExceeded | RpcCode::ResourceExhausted | RpcCode::Canceled => {
            ErrorKind::Canceled
        },
        RpcCode::Ok | RpcCode::Other(_) => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockTransportErrorPort;
    use std::io;

    fn port_with(code: RpcCode, message: &'static str) -> MockTransportErrorPort {
        let mut port = MockTransportErrorPort::new();
        port.expect_status().returning(move |err| {
            err.downcast_ref::<io::Error>()
                .map(|_| TransportStatus::new(code, message))
        });
        port
    }

    fn classify(code: RpcCode, message: &'static str) -> LogicError {
        let port = port_with(code, message);
        classify_transport_error(&port, Some(io::Error::other("rpc failed")))
            .unwrap()
            .into_result()
            .unwrap()
    }

    #[test]
    fn absent_error_yields_nothing() {
        let mut port = MockTransportErrorPort::new();
        port.expect_status().times(0);
        assert!(classify_transport_error::<_, io::Error>(&port, None).is_none());
    }

    #[test]
    fn error_without_status_passes_through() {
        let mut port = MockTransportErrorPort::new();
        port.expect_status().returning(|_| None);

        let classified =
            classify_transport_error(&port, Some(io::Error::other("connection reset"))).unwrap();
        assert!(!classified.is_recognized());
        assert_eq!(classified.into_result().unwrap_err().to_string(), "connection reset");
    }

    #[test]
    fn not_found_keeps_message() {
        let logic = classify(RpcCode::NotFound, "user missing");
        assert_eq!(logic.kind(), ErrorKind::NotFound);
        assert_eq!(logic.message(), "user missing");
    }

    #[test]
    fn status_table() {
        let cases = [
            (RpcCode::InvalidArgument, ErrorKind::BadRequest),
            (RpcCode::Unauthenticated, ErrorKind::Unauthorized),
            (RpcCode::PermissionDenied, ErrorKind::Forbidden),
            (RpcCode::NotFound, ErrorKind::NotFound),
            (RpcCode::AlreadyExists, ErrorKind::Conflict),
            (RpcCode::Aborted, ErrorKind::Conflict),
            (RpcCode::FailedPrecondition, ErrorKind::UnprocessableEntity),
            (RpcCode::OutOfRange, ErrorKind::UnprocessableEntity),
            (RpcCode::Unimplemented, ErrorKind::NotAcceptable),
            (RpcCode::DataLoss, ErrorKind::NotAcceptable),
            (RpcCode::Unavailable, ErrorKind::ServiceUnavailable),
            (RpcCode::Internal, ErrorKind::Internal),
            (RpcCode::Unknown, ErrorKind::Internal),
            (RpcCode::DeadlineExceeded, ErrorKind::Canceled),
            (RpcCode::ResourceExhausted, ErrorKind::Canceled),
            (RpcCode::Canceled, ErrorKind::Canceled),
        ];
        for (code, expected) in cases {
            let logic = classify(code, "remote said no");
            assert_eq!(logic.kind(), expected, "{code}");
            assert_eq!(logic.message(), "remote said no", "{code}");
        }
    }

    #[test]
    fn unmapped_code_discards_status_message() {
        let logic = classify(RpcCode::Ok, "everything is fine");
        assert_eq!(logic.kind(), ErrorKind::Internal);
        assert_eq!(logic.message(), UNKNOWN_INTERNAL_ERROR);
    }

    #[test]
    fn out_of_range_code_discards_status_message() {
        for code in [17, 20, -1] {
            let logic = classify(RpcCode::from_i32(code), "custom remote failure");
            assert_eq!(logic.kind(), ErrorKind::Internal, "{code}");
            assert_eq!(logic.message(), UNKNOWN_INTERNAL_ERROR, "{code}");
        }
    }

    #[test]
    fn produced_error_wraps_original() {
        let logic = classify(RpcCode::Unavailable, "down");
        assert_eq!(logic.source().unwrap().to_string(), "rpc failed");
    }
}
