use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod db;
mod dto;
mod error;
mod extract;
mod handlers;
mod models;
mod services;

use config::Config;
use services::classifier::MoodClassifier;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
    pub classifier: Arc<MoodClassifier>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodflow_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env()?);

    // Database
    let db = db::create_pool(&config.database_url).await?;
    db::run_migrations(&db).await?;
    tracing::info!("Database migrations applied");

    // Model loads lazily on the first classification
    let classifier = Arc::new(MoodClassifier::new(config.clone()));

    let state = AppState {
        db,
        config: config.clone(),
        classifier,
    };

    let app = build_app(state)?;

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_app(state: AppState) -> anyhow::Result<Router> {
    let cors = cors_layer(&state.config)?;

    let routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        // Journal
        .route("/api/analyze", post(handlers::analyze::analyze))
        .route("/api/save-entry", post(handlers::entries::save_entry))
        .route("/api/entries", get(handlers::entries::list_entries))
        .route("/api/export/:format", get(handlers::export::export_entries))
        // Dashboard
        .route("/api/dashboard", get(handlers::dashboard::get_dashboard))
        // Demo data
        .route("/api/demo/seed", post(handlers::demo::seed_demo));

    Ok(routes
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let mut origins = vec![config.frontend_url.parse::<axum::http::HeaderValue>()?];
    // Extra origins, e.g. the dashboard opened from another device on the LAN
    if let Ok(extra) = std::env::var("CORS_EXTRA_ORIGINS") {
        for o in extra.split(',') {
            if let Ok(hv) = o.trim().parse::<axum::http::HeaderValue>() {
                origins.push(hv);
            }
        }
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]))
}
