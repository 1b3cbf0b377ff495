use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, models::password::HashedPassword};

pub const USER_ID_MIN_LEN: usize = 5;
pub const USER_ID_MAX_LEN: usize = 15;

/// Client-chosen login identifier, unique across all users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: String) -> Result<Self, DomainError> {
        let len = value.chars().count();
        if !(USER_ID_MIN_LEN..=USER_ID_MAX_LEN).contains(&len) {
            return Err(DomainError::InvalidUserId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Write model handed to the store; id and registration date are assigned there
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_id: UserId,
    pub password: HashedPassword,
}

#[derive(Debug, Clone)]
pub struct User {
    id: i32,
    user_id: UserId,
    password: HashedPassword,
    registered_date: DateTime<Utc>,
}

impl User {
    pub fn reconstruct(
        id: i32,
        user_id: UserId,
        password: HashedPassword,
        registered_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            password,
            registered_date,
        }
    }

    // getters only, a user is immutable once stored
    pub fn id(&self) -> i32 {
        self.id
    }
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
    pub fn password(&self) -> &HashedPassword {
        &self.password
    }
    pub fn registered_date(&self) -> DateTime<Utc> {
        self.registered_date
    }
}
