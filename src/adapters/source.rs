use crate::core::DataSource;
use crate::utils::error::{LeagueError, Result};
use crate::utils::validation::is_remote;
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Reads documents from http(s) URLs or local files, depending on the location.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    client: Client,
}

impl DocumentSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Making HTTP request to: {}", url);
        // 每次都取最新資料，不使用快取
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("HTTP response status: {}", status);
        if !status.is_success() {
            return Err(LeagueError::SourceStatusError {
                location: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn fetch_local(&self, path: &str) -> Result<Vec<u8>> {
        tracing::debug!("Reading local file: {}", path);
        tokio::fs::read(path)
            .await
            .map_err(|source| LeagueError::SourceReadError {
                location: path.to_string(),
                source,
            })
    }
}

#[async_trait::async_trait]
impl DataSource for DocumentSource {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>> {
        if is_remote(location) {
            self.fetch_remote(location.trim()).await
        } else {
            self.fetch_local(location).await
        }
    }
}

/// Decodes a JSON array, dropping elements that do not fit `T`.
///
/// A document that is not valid JSON or not an array is an error.
pub fn parse_records<T: DeserializeOwned>(
    document: &str,
    location: &str,
    bytes: &[u8],
) -> Result<Vec<T>> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| LeagueError::InvalidDocumentError {
            document: document.to_string(),
            location: location.to_string(),
            message: e.to_string(),
        })?;

    let serde_json::Value::Array(items) = value else {
        return Err(LeagueError::InvalidDocumentError {
            document: document.to_string(),
            location: location.to_string(),
            message: "expected a JSON array".to_string(),
        });
    };

    let mut records = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("Skipping malformed {} record #{}: {}", document, idx, e),
        }
    }
    Ok(records)
}
