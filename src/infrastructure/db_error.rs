//! Backend specific recognition of unique-key violations.
//!
//! Some drivers report the violation as a structured error code, others only
//! through the message text. Both are recognised here and nowhere else.

use sea_orm::{DbErr, RuntimeErr};

use crate::domain::error::RepositoryError;

/// Codes drivers attach to a unique-key violation.
///
/// `2067` and `1555` are the SQLite extended result codes for UNIQUE and
/// PRIMARY KEY, `23505` is the Postgres SQLSTATE.
pub const UNIQUE_VIOLATION_CODES: &[&str] = &["2067", "1555", "SQLITE_CONSTRAINT_UNIQUE", "23505"];

pub const UNIQUE_VIOLATION_MESSAGE: &str = "UNIQUE constraint failed";

pub fn classify(code: Option<&str>, message: String) -> RepositoryError {
    let code_matches = code.is_some_and(|code| UNIQUE_VIOLATION_CODES.contains(&code));

    if code_matches || message.contains(UNIQUE_VIOLATION_MESSAGE) {
        RepositoryError::ConstraintViolation(message)
    } else {
        RepositoryError::DatabaseError(message)
    }
}

pub fn from_db_err(err: DbErr) -> RepositoryError {
    let code = match &err {
        DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => e
            .as_database_error()
            .and_then(|db_err| db_err.code())
            .map(|code| code.into_owned()),
        _ => None,
    };

    classify(code.as_deref(), err.to_string())
}
