mod config;
mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    config::AppConfig,
    infrastructure::{
        bcrypt_password_hasher::BcryptPasswordHasher, database,
        env_config_reader::EnvConfigReader, user_repository::SeaOrmUserRepository,
    },
    presentation::handlers::user_handler::create_user_router,
    usecase::register_user_usecase::RegisterUserUsecase,
};

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "signup_api=debug,tower_http=info,sea_orm=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let db = database::connect(&config.database_url, config.max_connections).await?;
    database::create_schema(&db).await?;

    let register_user_usecase = RegisterUserUsecase::new(
        SeaOrmUserRepository::new(db),
        BcryptPasswordHasher::new(),
        EnvConfigReader::new(),
    );

    let app = create_user_router(register_user_usecase).layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &axum::http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                tracing::info_span!("http_request", %method, uri = %uri, status = tracing::field::Empty)
            })
            .on_response(
                |res: &axum::http::Response<_>, _latency: std::time::Duration, span: &tracing::Span| {
                    let status = res.status();
                    span.record("status", tracing::field::display(status));
                    if status.is_server_error() {
                        tracing::error!(%status, "response");
                    } else {
                        tracing::info!(%status, "response");
                    }
                },
            ),
    );

    tracing::info!("listening on {}", config.addr);
    let listener = TcpListener::bind(config.addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
