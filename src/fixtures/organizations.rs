use anyhow::Result;
use log::*;
use reqwest::Response;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api_client::ApiClient;
use crate::auth::authentication_header;
use crate::config::Config;
use crate::random::random_string;
use crate::urls;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrganization {
    pub name: String,
}

/// Creation body for an organization, wrapped in the envelope the API expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationPayload {
    pub organization: NewOrganization,
}

/// Builds a randomized organization creation payload.
pub fn organization_payload() -> OrganizationPayload {
    OrganizationPayload {
        organization: NewOrganization {
            name: random_string(),
        },
    }
}

/// Creates a stub organization on the remote service and returns the
/// creation response body unmodified.
///
/// A fresh authentication header is fetched for the call. Any auth, network,
/// or non-success failure propagates to the caller; there is no retry and no
/// local validation of the response. The caller is responsible for tracking
/// the returned id for later cleanup.
pub async fn stub_organization(config: &Config) -> Result<Value> {
    let auth_header = authentication_header(config).await?;
    let client = ApiClient::new(config.api_base_url().to_string());

    let data = client
        .post(urls::ORGANIZATIONS_PATH, &organization_payload(), auth_header)
        .await?;

    info!("Stub organization created: {}", data["id"]);
    Ok(data)
}

/// Deletes a previously stubbed organization by id and returns the raw HTTP
/// response.
///
/// The id is assumed valid; deleting a non-existent id surfaces as whatever
/// error the remote service returns.
pub async fn delete_stub_organization(config: &Config, organization_id: &str) -> Result<Response> {
    let auth_header = authentication_header(config).await?;
    let client = ApiClient::new(config.api_base_url().to_string());

    let path = format!("{}/{}", urls::ORGANIZATIONS_PATH, organization_id);
    let response = client.delete(&path, auth_header).await?;

    info!("Stub organization deleted: {}", organization_id);
    Ok(response)
}
