use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Service configuration, read once from the environment at startup and
/// injected into the router state. There is no global singleton; everything
/// downstream receives this by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub openshift: OpenShiftConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenShiftConfig {
    /// Base URL of the OpenShift API server, e.g. `https://api.cluster:6443`.
    pub base_url: String,
    /// Static bearer token attached to every outbound request.
    pub auth_token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {message}")]
    InvalidVar { var: &'static str, message: String },
}

const BASE_URL_VAR: &str = "CATALOG_INFO_BASE_URL";
const AUTH_TOKEN_VAR: &str = "CATALOG_INFO_AUTH_TOKEN";

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = parse_base_url(&required_var(BASE_URL_VAR)?)?;
        let auth_token = required_var(AUTH_TOKEN_VAR)?;

        // Allow tests or deployments to override port via env
        let port = env::var("CATALOG_API_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(7007);

        Ok(Self {
            server: ServerConfig { port },
            openshift: OpenShiftConfig {
                base_url,
                auth_token,
            },
        })
    }
}

/// Fail at startup rather than on the first proxied request.
fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidVar {
        var: BASE_URL_VAR,
        message: e.to_string(),
    })?;

    // Trailing slashes would double up when joining request paths
    Ok(raw.trim_end_matches('/').to_string())
}

fn required_var(var: &'static str) -> Result<String, ConfigError> {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(var)),
    }
}
