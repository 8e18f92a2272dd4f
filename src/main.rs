//! ProblemBank - Application Entry Point
//!
//! This is the main entry point for the problem bank server.

use std::net::SocketAddr;

use axum::{Router, middleware};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use problembank::{config::CONFIG, db, handlers, middleware::logging_middleware, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting problem bank server...");

    // Initialize database connection
    tracing::info!("Connecting to MongoDB...");
    let db = db::connect(&CONFIG.database).await?;

    // The driver connects lazily; fail fast here instead of on the first request
    db::test_connection(&db).await?;
    tracing::info!(database = %CONFIG.database.database, "Connected to MongoDB");

    // Seed the pid counter on first run
    db::init(&db).await?;

    // Create application state
    let state = AppState::new(db, CONFIG.clone());

    // Build the router
    let app = Router::new()
        .merge(handlers::routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
