use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{
    domain::{
        error::RepositoryError,
        models::{
            password::HashedPassword,
            user::{NewUser, User, UserId},
        },
        repositories::user_repository::UserRepository,
    },
    infrastructure::{db_error, entity::users},
};

#[derive(Clone)]
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: users::Model) -> Result<User, RepositoryError> {
    let user_id = UserId::new(model.user_id)
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

    Ok(User::reconstruct(
        model.id,
        user_id,
        HashedPassword::new(model.password),
        model.registered_date,
    ))
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, RepositoryError> {
        let user = users::Entity::find()
            .filter(users::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(db_error::from_db_err)?;

        user.map(to_domain).transpose()
    }

    async fn save(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let user_model = users::ActiveModel {
            user_id: Set(new_user.user_id.as_str().to_string()),
            password: Set(new_user.password.as_str().to_string()),
            registered_date: Set(Utc::now()),
            ..Default::default()
        };

        let model = user_model
            .insert(&self.db)
            .await
            .map_err(db_error::from_db_err)?;

        to_domain(model)
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;
    use crate::infrastructure::database::connect_in_memory;

    fn new_user(user_id: &str, hash: &str) -> NewUser {
        NewUser {
            user_id: UserId::new(user_id.to_string()).unwrap(),
            password: HashedPassword::new(hash.to_string()),
        }
    }

    #[fixture]
    async fn repository() -> SeaOrmUserRepository {
        SeaOrmUserRepository::new(connect_in_memory().await)
    }

    #[rstest]
    #[tokio::test]
    async fn test_find_missing_user_is_none(#[future] repository: SeaOrmUserRepository) {
        let repository = repository.await;

        let found = repository.find_by_user_id("testuser").await.unwrap();

        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn test_save_then_find(#[future] repository: SeaOrmUserRepository) {
        let repository = repository.await;
        let before = Utc::now();

        let saved = repository
            .save(new_user("testuser", "hashed_password"))
            .await
            .unwrap();
        let found = repository
            .find_by_user_id("testuser")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(saved.id(), found.id());
        assert_eq!(found.user_id().as_str(), "testuser");
        assert_eq!(found.password().as_str(), "hashed_password");
        assert!(found.registered_date() >= before - chrono::Duration::seconds(1));
    }

    #[rstest]
    #[tokio::test]
    async fn test_ids_are_assigned_by_the_store(#[future] repository: SeaOrmUserRepository) {
        let repository = repository.await;

        let first = repository.save(new_user("first", "hash")).await.unwrap();
        let second = repository.save(new_user("second", "hash")).await.unwrap();

        assert_ne!(first.id(), second.id());
    }

    #[rstest]
    #[tokio::test]
    async fn test_duplicate_save_is_constraint_violation(
        #[future] repository: SeaOrmUserRepository,
    ) {
        let repository = repository.await;
        repository.save(new_user("testuser", "hash")).await.unwrap();

        let result = repository.save(new_user("testuser", "other_hash")).await;

        match result {
            Err(RepositoryError::ConstraintViolation(message)) => {
                assert!(message.contains("UNIQUE constraint failed"))
            }
            other => panic!("expected constraint violation, got {:?}", other),
        }
    }
}
