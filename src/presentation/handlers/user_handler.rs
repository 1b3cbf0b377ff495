use std::sync::Arc;

use crate::{
    domain::{
        repositories::user_repository::UserRepository,
        services::{config_service::ConfigReader, password_service::PasswordHasher},
    },
    presentation::{extractors::validated_json::ValidatedJson, validation::RegisterRequest},
    usecase::register_user_usecase::RegisterUserUsecase,
};
use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};

pub const REGISTER_SUCCESS_MESSAGE: &str = "계정 생성에 성공했습니다.";

/* Router Function and Handler Function */

// User Router

/// function return Router object
/// Suppose to be merged into the main router
pub fn create_user_router<
    U: UserRepository + 'static,
    P: PasswordHasher + 'static,
    C: ConfigReader + 'static,
>(
    register_service: RegisterUserUsecase<U, P, C>,
) -> Router {
    let state = AppState {
        register_service: Arc::new(register_service),
    };

    Router::new()
        .route("/users", post(register::<U, P, C>))
        .with_state(state)
}

pub struct AppState<U: UserRepository, P: PasswordHasher, C: ConfigReader> {
    pub register_service: Arc<RegisterUserUsecase<U, P, C>>,
}

// derive would demand Clone of every collaborator
impl<U: UserRepository, P: PasswordHasher, C: ConfigReader> Clone for AppState<U, P, C> {
    fn clone(&self) -> Self {
        Self {
            register_service: Arc::clone(&self.register_service),
        }
    }
}

// handler function

/// handler function for register
async fn register<U: UserRepository, P: PasswordHasher, C: ConfigReader>(
    State(state): State<AppState<U, P, C>>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> impl IntoResponse {
    match state.register_service.create_user(payload.into()).await {
        Ok(_) => (StatusCode::CREATED, Json(REGISTER_SUCCESS_MESSAGE.to_string())).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, Json(e.to_string())).into_response(),
    }
}
