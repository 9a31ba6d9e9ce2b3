use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use std::sync::Arc;

use crate::error::ApiError;
use crate::server::AppState;

/// GET /templates - list every template visible to the service account
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let templates = state
        .service
        .get_templates()
        .await
        .map_err(|e| ApiError::proxy("/templates", e))?;

    Ok(Json(templates))
}

/// GET /templates/:namespace/:name - fetch a single template
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let template = state
        .service
        .get_template(&namespace, &name)
        .await
        .map_err(|e| ApiError::proxy(format!("/templates/{namespace}/{name}"), e))?;

    Ok(Json(template))
}
