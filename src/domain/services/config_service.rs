#[cfg(test)]
use mockall::automock;

use crate::domain::error::DomainError;

pub const PASSWORD_SALT_KEY: &str = "PASSWORD_SALT";
pub const DEFAULT_WORK_FACTOR: u32 = 10;

/// Source of runtime settings, consulted on every call
#[cfg_attr(test, automock)]
pub trait ConfigReader: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
}

/// Work factor for password hashing.
///
/// Falls back to [`DEFAULT_WORK_FACTOR`] when the setting is absent or not a
/// positive integer. A setting that cannot be read at all is an error.
pub fn resolve_work_factor<C: ConfigReader + ?Sized>(config: &C) -> Result<u32, DomainError> {
    let work_factor = config
        .get(PASSWORD_SALT_KEY)?
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_WORK_FACTOR);
    Ok(work_factor)
}
