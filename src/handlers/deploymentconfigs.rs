use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use std::sync::Arc;

use crate::error::ApiError;
use crate::server::AppState;

/// GET /deploymentconfigs/:namespace - list deployment configs in a namespace
pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(namespace): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let deployment_configs = state
        .service
        .get_deployment_configs(&namespace)
        .await
        .map_err(|e| ApiError::proxy(format!("/deploymentconfigs/{namespace}"), e))?;

    Ok(Json(deployment_configs))
}
