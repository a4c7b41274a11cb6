//! Query service for the Indian food nutrition dataset.
//!
//!
//!
//! # Startup
//! - Read configuration from the environment (`.env` honoured)
//! - Load the CSV dataset into memory, once
//! - Only then bind the listener, so no endpoint is reachable before the load completes
//! - A load failure aborts startup instead of serving a partial index
//!
//!
//!
//! # Endpoints
//!
//! | Path | Params | Body |
//! |---|---|---|
//! | `/`, `/welcome` | | `{message, status, total_foods, endpoints, example_searches}` |
//! | `/foods` | | `{foods: [name, ...]}` |
//! | `/food/{name}` | name | `{name: record}` or 404 |
//! | `/search` | `dish` | `{name: record}`, 400 when `dish` is missing, 404 when absent |
//! | `/suggestions` | `q` | `{suggestions: [name, ...]}`, at most 10, empty below 2 chars |
//! | `/health` | | `{status, total_foods}` |
//!
//! Errors are JSON `{"error": message}`.
//!
//!
//!
//! # Configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `NUTRITION_PORT` | `8000` |
//! | `NUTRITION_DATASET` | `data/Indian_Food_Nutrition_Processed.csv` |
//! | `NUTRITION_KEY_COLUMN` | `Dish Name` |
//!
//! Logging follows `RUST_LOG`.
//! ```sh
//! RUST_LOG=server=debug,tower_http=debug cargo run -p nutrition
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use config::Config;
use routes::{
    fallback_handler, food_handler, foods_handler, health_handler, search_handler,
    suggestions_handler, welcome_handler,
};
use state::State;

pub async fn start_server() -> Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load()?;

    info!("Initializing state...");
    let state = State::new(config)?;

    info!("Starting server...");
    let app = router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Binding to {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");
    Ok(())
}

pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(welcome_handler))
        .route("/welcome", get(welcome_handler))
        .route("/foods", get(foods_handler))
        .route("/food/:name", get(food_handler))
        .route("/search", get(search_handler))
        .route("/suggestions", get(suggestions_handler))
        .route("/health", get(health_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
