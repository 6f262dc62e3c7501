//! Endpoint paths on the tournament platform API, relative to the configured
//! base URL.

pub const ORGANIZATIONS_PATH: &str = "/organizations";
pub const SESSIONS_PATH: &str = "/sessions";

/// Joins a base URL and an endpoint path into a full request URL.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
