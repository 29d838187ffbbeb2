//! HTTP transport used by the catalog client.

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::utils::check_response_status;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Fetches response bodies from the catalog.
///
/// Implementations must map "resource missing" upstream to
/// [`CatalogError::NotFound`] and any other non-success status to
/// [`CatalogError::Status`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a GET request and returns the response body.
    async fn get(&self, url: &Url) -> Result<String, CatalogError>;
}

/// Transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport configured from the catalog settings.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Ok(Self {
            client: create_http_client(config)?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<String, CatalogError> {
        log::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let response = check_response_status(response).await?;

        Ok(response.text().await?)
    }
}

/// Common HTTP client configuration for catalog requests.
///
/// A `timeout_sec` of 0 leaves requests without a deadline.
pub fn create_http_client(config: &CatalogConfig) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());

    if config.timeout_sec > 0 {
        builder = builder.timeout(Duration::from_secs(config.timeout_sec));
    }

    builder.build()
}
