use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{error::DomainError, models::password::HashedPassword};

/// Service for hashing and verifying passwords
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain text password with the given work factor
    async fn hash(&self, plain_password: &str, work_factor: u32)
    -> Result<HashedPassword, DomainError>;

    /// Verify a plain text password against a hashed password
    async fn verify(
        &self,
        plain_password: &str,
        hashed_password: &HashedPassword,
    ) -> Result<bool, DomainError>;
}
