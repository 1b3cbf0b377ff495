pub mod config_service;
pub mod password_service;
