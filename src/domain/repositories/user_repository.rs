use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{
    error::RepositoryError,
    models::user::{NewUser, User},
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by login identifier, `Ok(None)` when nobody holds it
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, RepositoryError>;

    /// Insert a new user.
    ///
    /// A write rejected by the unique constraint on `userID` must come back as
    /// [`RepositoryError::ConstraintViolation`], every other failure as
    /// [`RepositoryError::DatabaseError`].
    async fn save(&self, new_user: NewUser) -> Result<User, RepositoryError>;
}
