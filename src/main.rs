use axum::{routing::get, Router};
use sqlx::sqlite::SqlitePool;
use std::net::{Ipv4Addr, SocketAddr};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod routes;
mod models;
mod service;
mod db;
mod error;

use service::PlayerService;

fn app(service: PlayerService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/welcome", get(|| async { "Tennis Player REST API" }))
        .route("/health", get(routes::health::health_check))

        // Player endpoints
        .route(
            "/players",
            get(routes::players::get_players).post(routes::players::add_player),
        )
        .route(
            "/players/{id}",
            get(routes::players::get_player_by_id).put(routes::players::update_player),
        )

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting api server...");

    dotenvy::dotenv().ok();

    // Create database connection pool
    let db_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set in .env");

    let pool = SqlitePool::connect(&db_url)
        .await
        .expect("Failed to connect to database");

    db::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    tracing::info!("Database connection established.");

    let host: Ipv4Addr = std::env::var("HOST")
        .expect("HOST must be set in .env")
        .parse()
        .expect("HOST is not in the correct format");

    let port: u16 = std::env::var("PORT")
        .expect("PORT must be set in .env")
        .parse()
        .expect("PORT is not the correct format");

    let addr = SocketAddr::from((host, port));

    let app = app(PlayerService::new(pool));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
