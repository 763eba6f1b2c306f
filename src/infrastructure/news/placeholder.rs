use crate::domain::entities::news_article::NewsArticle;
use crate::domain::ports::{GatewayError, NewsSource};
use async_trait::async_trait;
use chrono::Utc;

/// Stand-in used when no NewsAPI key is configured.
pub struct PlaceholderNews;

#[async_trait]
impl NewsSource for PlaceholderNews {
    fn name(&self) -> &str {
        "placeholder"
    }

    async fn latest(&self) -> Result<Vec<NewsArticle>, GatewayError> {
        Ok(vec![NewsArticle {
            title: "Web3 News Feed Unavailable".into(),
            description: "Please configure NEWS_API_KEY environment variable for live news feed."
                .into(),
            url: "#".into(),
            source: "System".into(),
            published_at: Utc::now().to_rfc3339(),
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_single_system_article() {
        let articles = PlaceholderNews.latest().await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].source, "System");
        assert!(articles[0].description.contains("NEWS_API_KEY"));
    }
}
