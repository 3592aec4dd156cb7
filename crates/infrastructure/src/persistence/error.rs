//! Shared error inspection for the sqlx persistence layer

use std::borrow::Cow;
use std::error::Error;

use application::ports::{DatabaseErrorDetails, DatabaseErrorPort};
use application::services::{
    Classified, classify_database_error, is_concurrent_transaction_conflict,
};
use sqlx::error::DatabaseError;
use sqlx::postgres::PgDatabaseError;

/// [`DatabaseErrorPort`] for `sqlx::Error`
///
/// `RowNotFound` is the no-rows sentinel and `Database` is the structured
/// shape. The offending column is only reported by PostgreSQL.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlxErrorAdapter;

impl DatabaseErrorPort for SqlxErrorAdapter {
    fn is_no_rows(&self, err: &(dyn Error + 'static)) -> bool {
        matches!(err.downcast_ref::<sqlx::Error>(), Some(sqlx::Error::RowNotFound))
    }

    fn inspect(&self, err: &(dyn Error + 'static)) -> Option<DatabaseErrorDetails> {
        let db_err = database_error(err)?;
        let column = db_err
            .try_downcast_ref::<PgDatabaseError>()
            .and_then(PgDatabaseError::column)
            .map(str::to_owned);

        Some(DatabaseErrorDetails {
            code: db_err.code().map(Cow::into_owned).unwrap_or_default(),
            column,
            constraint: db_err.constraint().map(str::to_owned),
        })
    }
}

fn database_error<'a>(
    err: &'a (dyn Error + 'static),
) -> Option<&'a (dyn DatabaseError + 'static)> {
    match err.downcast_ref::<sqlx::Error>()? {
        sqlx::Error::Database(db_err) => Some(&**db_err),
        _ => None,
    }
}

/// Classify an error raised by sqlx, or an error wrapping one
pub fn classify_sqlx_error<E>(err: E) -> Classified<E>
where
    E: Error + Send + Sync + 'static,
{
    classify_database_error(&SqlxErrorAdapter, err)
}

/// Check whether an sqlx error, or an already classified one, is a retryable
/// transaction conflict
pub fn is_sqlx_concurrent_conflict(err: &(dyn Error + 'static)) -> bool {
    is_concurrent_transaction_conflict(&SqlxErrorAdapter, err)
}
