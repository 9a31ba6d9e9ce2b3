// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::openshift::OpenShiftError;

/// HTTP-boundary error for the proxy routes.
///
/// Every proxied failure, whether the upstream answered with a bad status or
/// the transport broke underneath, is answered with a uniform 500; the
/// frontend distinguishes nothing finer. The variant split exists so the
/// log line and response body can still carry the upstream status when one
/// was observed.
#[derive(Debug)]
pub enum ApiError {
    /// The outbound call to the OpenShift API failed.
    Proxy {
        /// Inbound route, e.g. `/templates/openshift/postgres`.
        route: String,
        source: OpenShiftError,
    },
}

impl ApiError {
    pub fn proxy(route: impl Into<String>, source: OpenShiftError) -> Self {
        ApiError::Proxy {
            route: route.into(),
            source,
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Upstream statuses are deliberately collapsed; see DESIGN.md.
            ApiError::Proxy { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Proxy { source, .. } => match source {
                OpenShiftError::UpstreamStatus { .. } => "UPSTREAM_ERROR",
                OpenShiftError::Transport { .. } => "TRANSPORT_ERROR",
            },
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Proxy { source, .. } => {
                let mut body = json!({
                    "error": true,
                    "message": source.to_string(),
                    "code": self.error_code(),
                });

                if let Some(status) = source.upstream_status() {
                    body["upstreamStatus"] = json!(status.as_u16());
                }

                body
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Proxy { route, source } => {
                write!(f, "'{}' ERROR: {}", route, source)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Proxy { source, .. } => Some(source),
        }
    }
}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            ApiError::Proxy { route, source } => {
                tracing::error!(
                    route = %route,
                    upstream_status = ?source.upstream_status().map(|s| s.as_u16()),
                    "{}", self
                );
            }
        }

        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn test_upstream_failure_collapses_to_500_with_status_in_body() {
        let err = ApiError::proxy(
            "/templates",
            OpenShiftError::UpstreamStatus {
                method: Method::GET,
                url: "https://api.cluster:6443/apis/template.openshift.io/v1/templates"
                    .to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            },
        );

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = err.to_json();
        assert_eq!(body["error"], true);
        assert_eq!(body["code"], "UPSTREAM_ERROR");
        assert_eq!(body["upstreamStatus"], 404);
    }

    #[test]
    fn test_display_includes_the_inbound_route() {
        let err = ApiError::proxy(
            "/deploymentconfigs/default",
            OpenShiftError::UpstreamStatus {
                method: Method::GET,
                url: "https://api.cluster:6443/x".to_string(),
                status: reqwest::StatusCode::FORBIDDEN,
            },
        );

        assert!(err.to_string().contains("/deploymentconfigs/default"));
    }
}
