use anyhow::{Context, Result};
use log::*;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::urls;

#[derive(Debug, Serialize)]
struct SessionRequest {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    token: String,
}

/// Retrieves a fresh set of authentication headers for the fixture account.
///
/// Logs into the sessions endpoint with the configured credentials and builds
/// an `Authorization: Bearer` header from the returned token. Every call
/// performs a new login; nothing is cached across fixture calls.
pub async fn authentication_header(config: &Config) -> Result<HeaderMap> {
    let url = urls::endpoint(config.api_base_url(), urls::SESSIONS_PATH);

    debug!("Authenticating fixture account {}", config.api_email());

    let response = reqwest::Client::new()
        .post(&url)
        .json(&SessionRequest {
            email: config.api_email().to_string(),
            password: config.api_password().to_string(),
        })
        .send()
        .await
        .context("Failed to send session request")?;

    if !response.status().is_success() {
        anyhow::bail!("Authentication failed: {}", response.status());
    }

    let session: SessionResponse = response
        .json()
        .await
        .context("Failed to parse session response")?;

    let mut headers = HeaderMap::new();
    let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", session.token))
        .context("Failed to create auth header value")?;
    auth_value.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth_value);
    Ok(headers)
}
