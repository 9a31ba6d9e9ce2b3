// One module per proxied resource area; each handler maps an inbound route
// to exactly one outbound OpenShift API call.
pub mod deploymentconfigs;
pub mod secrets;
pub mod templateinstances;
pub mod templates;

use serde::Deserialize;

/// Query parameters accepted by the create routes.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuery {
    /// `?dryRun=true` asks the upstream server to validate without
    /// persisting (forwarded as `dryRun=All`).
    #[serde(rename = "dryRun")]
    pub dry_run: Option<bool>,
}
