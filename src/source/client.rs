//! HTTP retrieval of the catalog README
//!
//! Thin wrapper over `reqwest` with a bounded timeout and size limit.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::SourceConfig;
use crate::errors::{Result, ScoutError};
use crate::source::{check_size, CatalogSource};

/// Raw README of the awesome-mcp-servers list
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/punkpeye/awesome-mcp-servers/main/README.md";

/// HTTP client for the catalog document
pub struct HttpCatalogSource {
    client: Client,
    url: String,
    max_bytes: usize,
}

impl HttpCatalogSource {
    /// Create a new catalog client
    ///
    /// # Arguments
    /// * `url` - Document URL (default: the awesome-mcp-servers README)
    /// * `timeout` - Whole-request timeout
    /// * `max_bytes` - Largest accepted document
    pub fn new(url: Option<String>, timeout: Duration, max_bytes: usize) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mcpscout/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string()),
            max_bytes,
        })
    }

    /// Build from the `[source]` config section
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        Self::new(
            Some(config.url.clone()),
            Duration::from_secs(config.timeout_secs),
            config.max_document_bytes,
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    /// GET the document; non-success statuses are retrieval errors
    async fn fetch(&self) -> Result<String> {
        debug!(url = %self.url, "Fetching catalog");

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "Catalog request rejected");
            return Err(ScoutError::Retrieval {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        debug!(bytes = text.len(), "Catalog fetched");
        check_size(text, self.max_bytes)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_default_url() {
        let client = HttpCatalogSource::new(None, Duration::from_secs(5), 1024).unwrap();
        assert_eq!(client.url(), DEFAULT_CATALOG_URL);
    }

    #[test]
    fn test_client_custom_url() {
        let client = HttpCatalogSource::new(
            Some("http://localhost:8080/README.md".to_string()),
            Duration::from_secs(5),
            1024,
        )
        .unwrap();
        assert_eq!(client.describe(), "http://localhost:8080/README.md");
    }

    #[test]
    fn test_client_from_config() {
        let config = SourceConfig::default();
        let client = HttpCatalogSource::from_config(&config).unwrap();
        assert_eq!(client.url(), config.url);
    }

    #[tokio::test]
    async fn test_invalid_url_is_retrieval_error() {
        let client = HttpCatalogSource::new(
            Some("not a url".to_string()),
            Duration::from_secs(1),
            1024,
        )
        .unwrap();

        let err = client.fetch().await.unwrap_err();
        assert!(err.is_retrieval());
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_live_catalog() {
        let client = HttpCatalogSource::new(None, Duration::from_secs(30), 5 * 1024 * 1024).unwrap();
        let text = client.fetch().await.unwrap();
        assert!(!crate::catalog::parse_catalog(&text).is_empty());
    }
}
