use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::Value;
use std::sync::Arc;

use super::CreateQuery;
use crate::error::ApiError;
use crate::openshift::DryRun;
use crate::server::AppState;

/// POST /secrets/:namespace - create the parameter Secret for an instantiation
pub async fn create(
    State(state): State<Arc<AppState>>,
    Path(namespace): Path<String>,
    Query(query): Query<CreateQuery>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let route = format!("/secrets/{namespace}");
    tracing::info!("POST '{}' request.body: {}", route, payload);

    let dry_run = DryRun::from_flag(query.dry_run.unwrap_or(false));
    let secret = state
        .service
        .create_secret(&namespace, &payload, dry_run)
        .await
        .map_err(|e| ApiError::proxy(route, e))?;

    Ok(Json(secret))
}
