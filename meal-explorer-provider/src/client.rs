//! TheMealDB HTTP client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::{FetchError, Result};
use crate::http_client::HttpUtils;
use crate::query::MealQuery;
use crate::traits::RecipeCatalog;

/// Public API base URL (free test key `1`).
pub const DEFAULT_API_BASE: &str = "https://www.themealdb.com/api/json/v1/1/";
/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client construction options.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every query path is joined onto.
    pub base_url: String,
    /// Transport connect timeout. No overall request timeout is applied.
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// HTTP implementation of [`RecipeCatalog`].
#[derive(Debug)]
pub struct MealDbClient {
    client: Client,
    base_url: Url,
}

impl MealDbClient {
    /// Build a client; fails when the base URL is not absolute.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| FetchError::ClientBuild {
                detail: e.to_string(),
            })?;
        Ok(Self { client, base_url })
    }

    /// Base URL after normalization (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for a query.
    pub fn url_for(&self, query: &MealQuery) -> Result<Url> {
        self.base_url
            .join(&query.path())
            .map_err(|e| FetchError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                detail: e.to_string(),
            })
    }
}

#[async_trait]
impl RecipeCatalog for MealDbClient {
    fn id(&self) -> &'static str {
        "mealdb"
    }

    async fn fetch_json(&self, query: &MealQuery) -> Result<Value> {
        let url = self.url_for(query)?;
        let text =
            HttpUtils::execute_request(self.client.get(url.clone()), query.action(), url.as_str())
                .await?;
        HttpUtils::parse_json(&text, query.action())
    }
}

/// Parse the base URL and make sure relative joins keep its last segment.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&with_slash).map_err(|e| FetchError::InvalidBaseUrl {
        url: raw.to_string(),
        detail: e.to_string(),
    })
}
