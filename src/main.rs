use std::sync::Arc;

use axum::{extract::Extension, middleware::from_fn, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use decolagem_api::database::DatabaseManager;
use decolagem_api::handlers;
use decolagem_api::middleware::jwt_auth_middleware;
use decolagem_api::visibility::{RegionalAliases, VisibilityPolicy};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = decolagem_api::config::config();
    tracing::info!("Starting Decolagem API in {:?} mode", config.environment);

    // Alias table is built once here and injected; it is never ambient state
    let aliases = Arc::new(RegionalAliases::builtin());
    let policy = VisibilityPolicy::new(aliases);

    let app = app(policy);

    // Allow tests or deployments to override port via env
    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Decolagem API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(policy: VisibilityPolicy) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Protected API
        .merge(api_routes())
        // Global middleware
        .layer(Extension(policy))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router {
    Router::new()
        .route("/api/auth/whoami", get(handlers::whoami::whoami))
        .route("/api/members", get(handlers::members::list))
        .route("/api/goals", get(handlers::goals::list))
        .route("/api/goals/:id", get(handlers::goals::get))
        .route("/api/activities", get(handlers::activities::list))
        .route("/api/activities/:id", get(handlers::activities::get))
        .route("/api/institutions", get(handlers::institutions::list))
        .layer(from_fn(jwt_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Decolagem API",
            "version": version,
            "description": "Regional visibility API for the Decolagem dashboard",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "whoami": "/api/auth/whoami (protected)",
                "members": "/api/members (protected)",
                "goals": "/api/goals[/:id] (protected)",
                "activities": "/api/activities[/:id] (protected)",
                "institutions": "/api/institutions (protected)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
