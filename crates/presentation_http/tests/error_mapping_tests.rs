//! End-to-end tests from driver errors to HTTP responses

#![allow(clippy::expect_used, clippy::unwrap_used)]

use axum::http::StatusCode;
use axum::response::IntoResponse;
use infrastructure::{classify_grpc_error, classify_sqlx_error};
use presentation_http::ApiError;
use tonic::Status;

#[test]
fn sqlx_row_not_found_is_404() {
    let err = ApiError::from(classify_sqlx_error(sqlx::Error::RowNotFound));
    let (status, body) = err.to_parts();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.code, "no_rows");
}

#[test]
fn sqlx_pool_timeout_is_unclassified_500() {
    let err = ApiError::from(classify_sqlx_error(sqlx::Error::PoolTimedOut));
    assert!(matches!(err, ApiError::Unclassified(_)));
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn grpc_unauthenticated_is_401() {
    let classified =
        classify_grpc_error(Some(Status::unauthenticated("token expired"))).expect("present");
    let (status, body) = ApiError::from(classified).to_parts();
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body.code, "unauthorized");
    assert_eq!(body.error, "token expired");
}

#[test]
fn grpc_failed_precondition_is_422() {
    let classified =
        classify_grpc_error(Some(Status::failed_precondition("order closed"))).expect("present");
    let response = ApiError::from(classified).into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn grpc_deadline_is_504() {
    let classified =
        classify_grpc_error(Some(Status::deadline_exceeded("too slow"))).expect("present");
    assert_eq!(ApiError::from(classified).status(), StatusCode::GATEWAY_TIMEOUT);
}
