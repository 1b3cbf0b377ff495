use tracing::{debug, error, info, instrument};

use crate::domain::{
    error::{DomainError, RegistrationError, RepositoryError},
    models::{
        password::HashedPassword,
        user::{NewUser, User, UserId},
    },
    repositories::user_repository::UserRepository,
    services::{
        config_service::{ConfigReader, resolve_work_factor},
        password_service::PasswordHasher,
    },
};

/// Structurally valid registration input
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub user_id: String,
    pub password: String,
}

pub struct RegisterUserUsecase<U: UserRepository, P: PasswordHasher, C: ConfigReader> {
    user_repository: U,
    password_hasher: P,
    config: C,
}

impl<U: UserRepository, P: PasswordHasher, C: ConfigReader> RegisterUserUsecase<U, P, C> {
    pub fn new(user_repository: U, password_hasher: P, config: C) -> Self {
        Self {
            user_repository,
            password_hasher,
            config,
        }
    }

    pub async fn find_user_by_user_id(&self, user_id: &str) -> Result<Option<User>, DomainError> {
        Ok(self.user_repository.find_by_user_id(user_id).await?)
    }

    /// Register a new user.
    ///
    /// Uniqueness is checked up front, but two concurrent attempts can both
    /// pass that check; the loser's write then trips the unique constraint
    /// and is reported as a duplicate as well.
    #[instrument(skip_all, fields(user_id = %command.user_id))]
    pub async fn create_user(&self, command: RegisterUser) -> Result<User, RegistrationError> {
        debug!("checking uniqueness");
        match self.find_user_by_user_id(&command.user_id).await {
            Ok(Some(_)) => {
                info!("user id already registered");
                return Err(RegistrationError::DuplicateUserId);
            }
            Ok(None) => {}
            Err(e) => {
                error!(error = %e, "uniqueness lookup failed");
                return Err(RegistrationError::CreationFailed);
            }
        }

        let user_id = UserId::new(command.user_id).map_err(|e| {
            error!(error = %e, "user id rejected");
            RegistrationError::CreationFailed
        })?;

        debug!("hashing password");
        let password = self.hash_password(&command.password).await.map_err(|e| {
            error!(error = %e, "password hashing failed");
            RegistrationError::CreationFailed
        })?;

        debug!("persisting user");
        let new_user = NewUser { user_id, password };
        match self.user_repository.save(new_user).await {
            Ok(user) => {
                info!(id = user.id(), "user registered");
                Ok(user)
            }
            Err(e @ RepositoryError::ConstraintViolation(_)) => {
                error!(error = %e, "user id taken at write time");
                Err(RegistrationError::DuplicateUserId)
            }
            Err(e) => {
                error!(error = %e, "saving user failed");
                Err(RegistrationError::CreationFailed)
            }
        }
    }

    async fn hash_password(&self, plain_password: &str) -> Result<HashedPassword, DomainError> {
        // read on every attempt so a changed setting applies without restart
        let work_factor = resolve_work_factor(&self.config)?;
        self.password_hasher.hash(plain_password, work_factor).await
    }
}
