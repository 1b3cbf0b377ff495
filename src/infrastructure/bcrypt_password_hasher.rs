use async_trait::async_trait;

use crate::domain::{
    error::DomainError, models::password::HashedPassword,
    services::password_service::PasswordHasher,
};

#[derive(Clone)]
pub struct BcryptPasswordHasher;

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(
        &self,
        plain_password: &str,
        work_factor: u32,
    ) -> Result<HashedPassword, DomainError> {
        let plain_password = plain_password.to_string();

        // bcrypt is CPU bound, keep it off the request task
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(plain_password, work_factor))
            .await
            .map_err(|e| DomainError::PasswordHashing(e.to_string()))?
            .map_err(|e| DomainError::PasswordHashing(e.to_string()))?;

        Ok(HashedPassword::new(hash))
    }

    async fn verify(
        &self,
        plain_password: &str,
        hashed_password: &HashedPassword,
    ) -> Result<bool, DomainError> {
        let plain_password = plain_password.to_string();
        let hash = hashed_password.as_str().to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(plain_password, &hash))
            .await
            .map_err(|e| DomainError::PasswordHashing(e.to_string()))?
            .map_err(|e| DomainError::PasswordHashing(e.to_string()))
    }
}
