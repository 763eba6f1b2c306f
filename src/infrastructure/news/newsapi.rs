use crate::domain::entities::news_article::NewsArticle;
use crate::domain::ports::{GatewayError, NewsSource};
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::time::Duration;
use tracing::instrument;

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

const QUERY: &str = r#"Web3 OR blockchain OR cryptocurrency OR DeFi OR NFT OR "decentralized finance""#;
const PAGE_SIZE: &str = "20";
const LOOKBACK_DAYS: i64 = 7;

/// NewsAPI `/everything` search over Web3 topics from the last week.
pub struct NewsApiSource {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl NewsApiSource {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.into())
                .trim_end_matches('/')
                .to_string(),
            client: reqwest::Client::builder()
                .user_agent("web3pulse/0.1")
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
        }
    }

    fn from_date(now: DateTime<Utc>) -> String {
        (now - ChronoDuration::days(LOOKBACK_DAYS))
            .format("%Y-%m-%d")
            .to_string()
    }
}

#[derive(Debug, serde::Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<ApiArticle>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    source: Option<ApiSource>,
    #[serde(default)]
    published_at: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiSource {
    #[serde(default)]
    name: Option<String>,
}

fn into_articles(response: EverythingResponse) -> Vec<NewsArticle> {
    response
        .articles
        .into_iter()
        .filter_map(|a| {
            Some(NewsArticle {
                title: a.title?,
                description: a.description.unwrap_or_default(),
                url: a.url.unwrap_or_default(),
                source: a
                    .source
                    .and_then(|s| s.name)
                    .unwrap_or_else(|| "Unknown".into()),
                published_at: a.published_at.unwrap_or_default(),
            })
        })
        .collect()
}

#[async_trait]
impl NewsSource for NewsApiSource {
    fn name(&self) -> &str {
        "newsapi"
    }

    #[instrument(skip(self))]
    async fn latest(&self) -> Result<Vec<NewsArticle>, GatewayError> {
        let from = Self::from_date(Utc::now());
        let resp = self
            .client
            .get(format!("{}/everything", self.base_url))
            .query(&[
                ("q", QUERY),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", PAGE_SIZE),
                ("from", from.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(GatewayError::Network(format!(
                "NewsAPI returned {}",
                resp.status()
            )));
        }

        let data: EverythingResponse = resp
            .json()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))?;
        Ok(into_articles(data))
    }
}
