//! Orbitcast API Server
//!
//! A stateless HTTP/JSON layer over the broadcast catalog database.
//! Exposes list/get/create/update/delete endpoints for satellites,
//! TV channels, and the broadcasts linking the two.

mod handlers;
mod storage;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use orbitcast_core::ServiceConfig;
use storage::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Orbitcast Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let config = ServiceConfig::from_env().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, db={}@{}:{}",
        config.bind_address, config.database.name, config.database.host, config.database.port
    );

    // Connect to PostgreSQL
    info!("Connecting to PostgreSQL...");
    let db = Arc::new(
        Database::connect(&config.database)
            .await
            .context("Failed to connect to database")?,
    );
    info!("Database connection pool ready");

    // Create app state
    let state = AppState { db };

    // Build router
    info!("Building HTTP router...");
    let app = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Entity routes
        .merge(api_routes())
        // Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server ready to accept connections");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn api_routes() -> Router<AppState> {
    use handlers::{broadcasts, satellites, tv_channels};

    // Collection routes keep the trailing slash of the original surface.
    Router::new()
        .route(
            "/satellites/",
            get(satellites::list).post(satellites::create),
        )
        .route(
            "/satellites/:id",
            get(satellites::get)
                .put(satellites::update)
                .delete(satellites::delete),
        )
        .route(
            "/tv_channels/",
            get(tv_channels::list).post(tv_channels::create),
        )
        .route(
            "/tv_channels/:id",
            get(tv_channels::get)
                .put(tv_channels::update)
                .delete(tv_channels::delete),
        )
        .route(
            "/broadcasts/",
            get(broadcasts::list).post(broadcasts::create),
        )
        .route(
            "/broadcasts/:id",
            get(broadcasts::get)
                .put(broadcasts::update)
                .delete(broadcasts::delete),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    // Route registration panics on a path conflict, so building the router
    // is the whole assertion.
    #[test]
    fn api_routes_register_without_conflicts() {
        let _ = api_routes();
    }
}
