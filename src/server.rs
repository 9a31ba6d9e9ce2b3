use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers;
use crate::openshift::OpenShiftService;

/// Shared router state: immutable config-derived values only, no locks.
pub struct AppState {
    pub service: OpenShiftService,
}

pub fn app(config: &AppConfig) -> Router {
    let state = Arc::new(AppState {
        service: OpenShiftService::new(&config.openshift),
    });

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Proxied OpenShift resources
        .merge(template_routes())
        .merge(workload_routes())
        .merge(instantiation_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `app` on an already-bound listener until the process exits.
pub async fn serve(listener: tokio::net::TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app).await
}

fn template_routes() -> Router<Arc<AppState>> {
    // axum matches by specificity, so the single-template route wins over
    // the list route for any namespace/name pair regardless of the order
    // these are registered in.
    Router::new()
        .route("/templates", get(handlers::templates::list))
        .route(
            "/templates/:namespace/:name",
            get(handlers::templates::get),
        )
}

fn workload_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/deploymentconfigs/:namespace",
        get(handlers::deploymentconfigs::list),
    )
}

fn instantiation_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/templateinstances/:namespace",
            post(handlers::templateinstances::create),
        )
        .route("/secrets/:namespace", post(handlers::secrets::create))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Catalog Info API",
        "version": version,
        "description": "Thin OpenShift API proxy for the service catalog frontend",
        "timestamp": chrono::Utc::now(),
        "endpoints": {
            "health": "GET /health",
            "templates": "GET /templates, GET /templates/:namespace/:name",
            "deploymentconfigs": "GET /deploymentconfigs/:namespace",
            "templateinstances": "POST /templateinstances/:namespace[?dryRun=true]",
            "secrets": "POST /secrets/:namespace[?dryRun=true]",
        }
    }))
}

async fn health() -> Json<Value> {
    tracing::info!("PONG!");

    Json(json!({ "status": "ok" }))
}
