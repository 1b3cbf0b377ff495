use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Invalid user id (5 to 15 characters required)")]
    InvalidUserId,

    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A write hit the unique constraint on `userID`
    #[error("Unique constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Sanitized outcome of a failed registration.
///
/// The display text is what the client receives, so it never carries the
/// underlying cause.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("같은 아이디를 사용하고 있는 계정이 있습니다.")]
    DuplicateUserId,

    #[error("계정 생성 과정에서 오류가 발생했습니다.")]
    CreationFailed,
}
