use crate::modules::common::responses::{internal_error_res, not_found_msg, SimpleError};
use http::StatusCode;
use sea_orm::DbErr;

/// Newtype over `DbErr` so database failures can be returned straight
/// from route handlers with `?`
///
/// the `Into<(StatusCode, SimpleError)>` impl keeps the underlying error
/// out of the response, only a missing record is surfaced to the client,
/// everything else becomes an opaque internal error
pub struct DbError(pub DbErr);

impl From<DbErr> for DbError {
    fn from(err: DbErr) -> Self {
        DbError(err)
    }
}

impl From<DbError> for (StatusCode, SimpleError) {
    fn from(err: DbError) -> Self {
        match err.0 {
            DbErr::RecordNotFound(_) => not_found_msg("record not found"),
            _ => internal_error_res(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_records_map_to_not_found() {
        let err = DbError(DbErr::RecordNotFound(String::from("brand")));

        let (status, _): (StatusCode, SimpleError) = err.into();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn other_database_errors_are_opaque_internal_errors() {
        let err = DbError(DbErr::Custom(String::from("connection reset")));

        let (status, _): (StatusCode, SimpleError) = err.into();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
