use super::GatewayError;
use crate::domain::entities::news_article::NewsArticle;
use async_trait::async_trait;

#[async_trait]
pub trait NewsSource: Send + Sync {
    fn name(&self) -> &str;

    /// Most recent articles first.
    async fn latest(&self) -> Result<Vec<NewsArticle>, GatewayError>;
}
