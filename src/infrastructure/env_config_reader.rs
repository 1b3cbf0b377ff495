use std::env::VarError;

use crate::domain::{error::DomainError, services::config_service::ConfigReader};

/// Reads settings from the process environment, `.env` included once loaded
#[derive(Clone, Default)]
pub struct EnvConfigReader;

impl EnvConfigReader {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigReader for EnvConfigReader {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        match dotenvy::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
            Err(e) => Err(DomainError::Configuration(format!("{key}: {e}"))),
        }
    }
}
