//! Typed views of the OpenShift objects the catalog frontend consumes.
//!
//! The proxy itself forwards bodies verbatim as `serde_json::Value`; these
//! definitions exist for consumers deserializing the relayed JSON. Every
//! field defaults when absent on the wire, so a missing annotation key or an
//! empty list response never turns into a deserialization error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// io.k8s.apimachinery.pkg.apis.meta.v1.ObjectMeta, reduced to the fields
/// the catalog views actually read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectMeta {
    pub name: String,
    /// Set instead of `name` on pre-creation payloads; the server assigns
    /// the final name.
    pub generate_name: String,
    pub namespace: String,
    pub annotations: HashMap<String, String>,
    pub labels: HashMap<String, String>,
    pub creation_timestamp: Option<DateTime<Utc>>,
    pub resource_version: String,
    pub uid: String,
}

/// io.k8s.apimachinery.pkg.apis.meta.v1.ListMeta
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListMeta {
    #[serde(rename = "continue")]
    pub continue_token: String,
    pub remaining_item_count: Option<i64>,
    pub resource_version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateList {
    pub api_version: String,
    pub kind: String,
    pub items: Vec<Template>,
    pub metadata: ListMeta,
}

/// template.openshift.io/v1 Template
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Template {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    /// Instructional message shown after instantiation.
    pub message: String,
    pub labels: HashMap<String, String>,
    /// Raw object definitions; opaque to the catalog.
    pub objects: Vec<Value>,
    pub parameters: Vec<TemplateParameter>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateParameter {
    pub name: String,
    pub display_name: String,
    pub description: String,
    /// String or boolean on the wire, depending on the template author.
    pub value: Value,
    pub generate: String,
    pub from: String,
    pub required: bool,
}

/// template.openshift.io/v1 TemplateInstance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateInstance {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: TemplateInstanceSpec,
    pub status: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateInstanceSpec {
    pub template: Template,
    /// Reference to the Secret carrying the parameter values.
    pub secret: LocalObjectReference,
    pub requester: Value,
}

/// io.k8s.api.core.v1.LocalObjectReference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocalObjectReference {
    pub name: String,
}

/// core/v1 Secret
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Secret {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    /// Base64-encoded values.
    pub data: HashMap<String, String>,
    /// Plain values; string or boolean depending on the submitting form.
    pub string_data: HashMap<String, Value>,
    #[serde(rename = "type")]
    pub type_: String,
    pub immutable: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentConfigList {
    pub api_version: String,
    pub kind: String,
    pub items: Vec<DeploymentConfig>,
    pub metadata: ListMeta,
}

/// apps.openshift.io/v1 DeploymentConfig, reduced to the replica counters
/// the instances view renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentConfig {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub status: DeploymentConfigStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentConfigStatus {
    pub replicas: i32,
    pub ready_replicas: i32,
}
