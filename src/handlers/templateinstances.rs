use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::Value;
use std::sync::Arc;

use super::CreateQuery;
use crate::error::ApiError;
use crate::openshift::DryRun;
use crate::server::AppState;

/// POST /templateinstances/:namespace - instantiate a template
///
/// The payload is a TemplateInstance with `metadata.generateName` set and the
/// parameter Secret referenced in `spec.secret`; it is forwarded verbatim and
/// the upstream server assigns the final name.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Path(namespace): Path<String>,
    Query(query): Query<CreateQuery>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let route = format!("/templateinstances/{namespace}");
    tracing::info!("POST '{}' request.body: {}", route, payload);

    let dry_run = DryRun::from_flag(query.dry_run.unwrap_or(false));
    let template_instance = state
        .service
        .create_template_instance(&namespace, &payload, dry_run)
        .await
        .map_err(|e| ApiError::proxy(route, e))?;

    Ok(Json(template_instance))
}
