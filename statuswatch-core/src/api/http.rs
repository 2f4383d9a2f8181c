//! HTTP implementation of the fetch capability

use crate::api::{FetchError, StatusFetcher};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// reqwest-backed status fetcher. Endpoint and token fixed at construction;
/// the token is sent as an `Authorization: OAuth <token>` header and never
/// logged.
pub struct HttpStatusFetcher {
    endpoint: String,
    token: String,
    client: Client,
}

impl HttpStatusFetcher {
    /// Create a fetcher for `endpoint` authorized by `token`.
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl StatusFetcher for HttpStatusFetcher {
    async fn fetch(&self, from_date: i64) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::BadStatus {
                status,
                body: body.trim().to_string(),
            });
        }

        // Non-JSON bodies surface as Decode, not Transport.
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|error| FetchError::Decode(error.to_string()))
    }
}
