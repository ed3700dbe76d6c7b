//! Wikipedia page summaries via the REST API.
//!
//! `GET https://{lang}.wikipedia.org/api/rest_v1/page/summary/{title}`. The
//! query is used verbatim as the page title (spaces become underscores);
//! redirects are followed, a 404 means there is no such page.

use async_trait::async_trait;
use parley_core::error::KnowledgeError;
use parley_core::knowledge::{KnowledgeSource, ReferenceResult};
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

pub struct WikipediaSource {
    base_url: String,
    user_agent: String,
    client: reqwest::Client,
}

impl WikipediaSource {
    /// A source for the given language edition, e.g. `"en"`.
    pub fn new(language: &str, user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self::with_base_url(format!("https://{language}.wikipedia.org"), user_agent, timeout)
    }

    /// A source rooted somewhere other than wikipedia.org (mirrors, tests).
    pub fn with_base_url(
        base_url: impl Into<String>,
        user_agent: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_agent: user_agent.into(),
            client,
        }
    }

    fn summary_url(&self, title: &str) -> Result<Url, KnowledgeError> {
        let mut url = Url::parse(&format!("{}/api/rest_v1/page/summary", self.base_url))
            .map_err(|e| KnowledgeError::Network(format!("Bad base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| KnowledgeError::Network("Base URL cannot carry a path".into()))?
            .push(&title.trim().replace(' ', "_"));
        Ok(url)
    }
}

#[async_trait]
impl KnowledgeSource for WikipediaSource {
    fn name(&self) -> &str {
        "wikipedia"
    }

    async fn fetch_summary(&self, query: &str) -> Result<Option<ReferenceResult>, KnowledgeError> {
        let url = self.summary_url(query)?;
        debug!(%url, "Fetching Wikipedia summary");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| KnowledgeError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status == 404 {
            return Ok(None);
        }
        if !(200..300).contains(&status) {
            let message = response.text().await.unwrap_or_default();
            return Err(KnowledgeError::Service {
                status_code: status,
                message,
            });
        }

        let page: SummaryResponse = response
            .json()
            .await
            .map_err(|e| KnowledgeError::InvalidResponse(e.to_string()))?;

        let url = page
            .content_urls
            .and_then(|u| u.desktop)
            .map(|d| d.page)
            .unwrap_or_default();

        Ok(Some(ReferenceResult {
            title: page.title,
            summary: page.extract,
            url,
        }))
    }
}

// --- REST API types (internal) ---

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    title: String,
    #[serde(default)]
    extract: String,
    #[serde(default)]
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    #[serde(default)]
    desktop: Option<PageUrl>,
}

#[derive(Debug, Deserialize)]
struct PageUrl {
    page: String,
}
