pub mod extractors;
pub mod handlers;
pub mod validation;
