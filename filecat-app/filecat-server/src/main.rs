use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

use filecat_api::{handlers::file_categories, handlers::health, state::AppState};
use filecat_core::services::CategoryService;
use filecat_infrastructure::database::{
    connection, PgActivityLog, PgCategoryRepository, PgUserReferenceIndex,
};
use filecat_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    filecat_shared::telemetry::init_telemetry();

    info!("File category server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database...");
    let pool = connection::create_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.acquire_timeout_secs,
    )
    .await?;
    info!("Database connection established.");

    // Run migrations
    sqlx::migrate!("../../crates/filecat-infrastructure/migrations")
        .run(&pool)
        .await?;
    info!("Migrations applied.");

    // Wire repositories and service
    let categories = Arc::new(PgCategoryRepository::new(pool.clone()));
    let references = Arc::new(PgUserReferenceIndex::new(pool.clone()));
    let activity = Arc::new(PgActivityLog::spawn(pool.clone()));
    let service = Arc::new(CategoryService::new(categories, references, activity));

    let state = AppState {
        categories: service,
    };

    // Build router
    let app = build_router(state, config.app.request_timeout_secs);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState, request_timeout_secs: u64) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // File category routes
        .route(
            "/api/file-categories",
            get(file_categories::list_file_categories),
        )
        .route(
            "/api/file-categories",
            post(file_categories::create_file_category),
        )
        .route(
            "/api/file-categories/{id}",
            get(file_categories::get_file_category),
        )
        .route(
            "/api/file-categories/{id}",
            put(file_categories::update_file_category),
        )
        .route(
            "/api/file-categories/{id}",
            delete(file_categories::delete_file_category),
        )
        // Add State
        .with_state(state)
        // Bounded request time
        .layer(TimeoutLayer::new(Duration::from_secs(request_timeout_secs)))
        // Tracing
        .layer(TraceLayer::new_for_http())
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::AUTHORIZATION]),
        )
}
