use anyhow::{Context, Result};
use log::*;
use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;

use crate::urls;

/// Thin HTTP client bound to a base URL on the tournament platform API.
///
/// Non-success statuses are turned into errors carrying the status and
/// response body; there is no retry logic at this layer.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Issues a POST to `path` and returns the parsed JSON response body.
    pub async fn post<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        headers: HeaderMap,
    ) -> Result<Value> {
        let url = urls::endpoint(&self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send POST to {}", url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            anyhow::bail!("POST {} failed: {} - Response: {}", url, status, body);
        }

        response
            .json()
            .await
            .context("Failed to parse response body")
    }

    /// Issues a DELETE to `path` and returns the raw response on success.
    pub async fn delete(&self, path: &str, headers: HeaderMap) -> Result<Response> {
        let url = urls::endpoint(&self.base_url, path);
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .headers(headers)
            .send()
            .await
            .with_context(|| format!("Failed to send DELETE to {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("DELETE {} failed: {}", url, response.status());
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    #[tokio::test]
    async fn test_post_returns_parsed_body() {
        let mut server = Server::new_async().await;
        let client = ApiClient::new(server.url());

        let mock = server
            .mock("POST", "/widgets")
            .match_body(mockito::Matcher::Json(json!({"name": "w1"})))
            .with_status(201)
            .with_body(r#"{"id":"widget-1","name":"w1"}"#)
            .create_async()
            .await;

        let body = client
            .post("/widgets", &json!({"name": "w1"}), HeaderMap::new())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body["id"], "widget-1");
    }

    #[tokio::test]
    async fn test_post_non_success_includes_status_and_body() {
        let mut server = Server::new_async().await;
        let client = ApiClient::new(server.url());

        let _mock = server
            .mock("POST", "/widgets")
            .with_status(422)
            .with_body(r#"{"error":"name taken"}"#)
            .create_async()
            .await;

        let err = client
            .post("/widgets", &json!({"name": "w1"}), HeaderMap::new())
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("422"));
        assert!(message.contains("name taken"));
    }

    #[tokio::test]
    async fn test_delete_returns_raw_response() {
        let mut server = Server::new_async().await;
        let client = ApiClient::new(server.url());

        let mock = server
            .mock("DELETE", "/widgets/widget-1")
            .with_status(204)
            .create_async()
            .await;

        let response = client
            .delete("/widgets/widget-1", HeaderMap::new())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_delete_non_success_is_an_error() {
        let mut server = Server::new_async().await;
        let client = ApiClient::new(server.url());

        let _mock = server
            .mock("DELETE", "/widgets/missing")
            .with_status(404)
            .create_async()
            .await;

        let result = client.delete("/widgets/missing", HeaderMap::new()).await;
        assert!(result.is_err());
    }
}
