use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use crate::config::OpenShiftConfig;

/// Whether a create request should be validated server-side without being
/// persisted. `All` maps to the Kubernetes `dryRun=All` query parameter;
/// `Disabled` contributes no query parameter at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DryRun {
    Disabled,
    All,
}

impl DryRun {
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            DryRun::All
        } else {
            DryRun::Disabled
        }
    }

    fn query(self) -> Option<(&'static str, &'static str)> {
        match self {
            DryRun::All => Some(("dryRun", "All")),
            DryRun::Disabled => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OpenShiftError {
    /// The upstream answered, but outside 200-299. The body is not parsed.
    #[error("upstream returned {status} for {method} {url}")]
    UpstreamStatus {
        method: Method,
        url: String,
        status: StatusCode,
    },
    /// DNS, TLS, connect or body-read failure before a usable response.
    #[error("transport failure for {method} {url}: {source}")]
    Transport {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl OpenShiftError {
    /// Upstream HTTP status, when the upstream answered at all.
    pub fn upstream_status(&self) -> Option<StatusCode> {
        match self {
            OpenShiftError::UpstreamStatus { status, .. } => Some(*status),
            OpenShiftError::Transport { .. } => None,
        }
    }
}

/// Client for the subset of the OpenShift REST API the catalog frontend
/// needs. Holds the base URL and bearer token read once at construction;
/// the inner `reqwest::Client` is shared and cheap to clone.
///
/// Every method issues exactly one outbound request and returns the decoded
/// JSON body verbatim. Callers own all interpretation of the payload.
#[derive(Debug, Clone)]
pub struct OpenShiftService {
    client: Client,
    base_url: String,
    auth_token: String,
}

impl OpenShiftService {
    pub fn new(config: &OpenShiftConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            auth_token: config.auth_token.clone(),
        }
    }

    /// GET /apis/template.openshift.io/v1/templates
    pub async fn get_templates(&self) -> Result<Value, OpenShiftError> {
        self.get_json("/apis/template.openshift.io/v1/templates".to_string())
            .await
    }

    /// GET a single template by (namespace, name).
    pub async fn get_template(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Value, OpenShiftError> {
        self.get_json(format!(
            "/apis/template.openshift.io/v1/namespaces/{namespace}/templates/{name}"
        ))
        .await
    }

    /// GET all deployment configs in a namespace.
    pub async fn get_deployment_configs(
        &self,
        namespace: &str,
    ) -> Result<Value, OpenShiftError> {
        self.get_json(format!(
            "/apis/apps.openshift.io/v1/namespaces/{namespace}/deploymentconfigs"
        ))
        .await
    }

    /// POST a TemplateInstance into a namespace. The body is forwarded
    /// verbatim; the upstream server assigns the final name.
    pub async fn create_template_instance(
        &self,
        namespace: &str,
        body: &Value,
        dry_run: DryRun,
    ) -> Result<Value, OpenShiftError> {
        self.post_json(
            format!(
                "/apis/template.openshift.io/v1/namespaces/{namespace}/templateinstances"
            ),
            body,
            dry_run,
        )
        .await
    }

    /// POST a Secret into a namespace. The body is forwarded verbatim.
    pub async fn create_secret(
        &self,
        namespace: &str,
        body: &Value,
        dry_run: DryRun,
    ) -> Result<Value, OpenShiftError> {
        self.post_json(
            format!("/api/v1/namespaces/{namespace}/secrets"),
            body,
            dry_run,
        )
        .await
    }

    async fn get_json(&self, path: String) -> Result<Value, OpenShiftError> {
        let url = format!("{}{}", self.base_url, path);
        let request = self
            .client
            .get(&url)
            .bearer_auth(&self.auth_token)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");

        Self::execute(Method::GET, url, request).await
    }

    async fn post_json(
        &self,
        path: String,
        body: &Value,
        dry_run: DryRun,
    ) -> Result<Value, OpenShiftError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .post(&url)
            .bearer_auth(&self.auth_token)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(body);

        if let Some(pair) = dry_run.query() {
            request = request.query(&[pair]);
        }

        Self::execute(Method::POST, url, request).await
    }

    async fn execute(
        method: Method,
        url: String,
        request: reqwest::RequestBuilder,
    ) -> Result<Value, OpenShiftError> {
        let response = request
            .send()
            .await
            .map_err(|source| OpenShiftError::Transport {
                method: method.clone(),
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OpenShiftError::UpstreamStatus {
                method,
                url,
                status,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| OpenShiftError::Transport {
                method,
                url,
                source,
            })
    }
}
