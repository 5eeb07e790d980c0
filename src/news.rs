//! News source for topic searches.
//!
//! Uses reqwest against the NewsAPI `everything` endpoint.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{Config, ConfigError, NewsConfig};

/// User-Agent string identifying this client
const USER_AGENT: &str = concat!("newsbrief/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("failed to fetch articles: {0}")]
    FetchError(#[from] reqwest::Error),
    #[error("invalid news endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("news API error ({code}): {message}")]
    Api { code: String, message: String },
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Publisher of an article
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(default)]
    pub name: Option<String>,
}

/// A news article as returned by the search endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Truncated body, possibly with markup
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub source: Option<Publisher>,
}

impl Article {
    /// Title, or a placeholder for untitled articles
    pub fn headline(&self) -> &str {
        non_empty(&self.title).unwrap_or("Untitled")
    }

    /// Best available text: content, then description, then title.
    pub fn body(&self) -> &str {
        non_empty(&self.content)
            .or_else(|| non_empty(&self.description))
            .or_else(|| non_empty(&self.title))
            .unwrap_or("")
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Search response envelope
#[derive(Debug, Deserialize)]
struct SearchResponse {
    status: String,
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl SearchResponse {
    fn into_articles(self) -> Result<Vec<Article>, NewsError> {
        if self.status == "ok" {
            return Ok(self.articles);
        }
        Err(NewsError::Api {
            code: self.code.unwrap_or_else(|| self.status.clone()),
            message: self.message.unwrap_or_default(),
        })
    }
}

/// Anything that can produce articles for a topic.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch(&self, topic: &str) -> Result<Vec<Article>, NewsError>;
}

/// NewsAPI client
pub struct NewsClient {
    http: Client,
    settings: NewsConfig,
    api_key: String,
}

impl NewsClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &Config) -> Result<Self, NewsError> {
        let api_key = config.api_key()?.to_string();
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.news.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            settings: config.news.clone(),
            api_key,
        })
    }

    /// Fetch the latest headlines for a topic
    pub async fn fetch_headlines(&self, topic: &str) -> Result<Vec<Article>, NewsError> {
        let url = request_url(&self.settings, topic, &self.api_key)?;
        debug!(topic, language = %self.settings.language, "querying news endpoint");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body: SearchResponse = response.json().await?;
        let articles = body.into_articles()?;

        info!(topic, %status, count = articles.len(), "fetched articles");
        Ok(articles)
    }
}

#[async_trait]
impl ArticleSource for NewsClient {
    async fn fetch(&self, topic: &str) -> Result<Vec<Article>, NewsError> {
        self.fetch_headlines(topic).await
    }
}

/// Build the search URL for a topic
fn request_url(settings: &NewsConfig, topic: &str, api_key: &str) -> Result<Url, NewsError> {
    let page_size = settings.page_size.to_string();
    Url::parse_with_params(
        &settings.endpoint,
        &[
            ("q", topic),
            ("language", settings.language.as_str()),
            ("pageSize", page_size.as_str()),
            ("apiKey", api_key),
        ],
    )
    .map_err(|e| NewsError::InvalidEndpoint(e.to_string()))
}
