pub mod bcrypt_password_hasher;
pub mod database;
pub mod db_error;
pub mod entity;
pub mod env_config_reader;
pub mod user_repository;
