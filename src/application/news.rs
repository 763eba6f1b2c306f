use crate::domain::entities::news_article::NewsArticle;
use crate::domain::ports::NewsSource;
use std::sync::Arc;
use tracing::{instrument, warn};

pub const DEFAULT_NEWS_LIMIT: usize = 10;

pub struct NewsUseCase {
    source: Arc<dyn NewsSource>,
}

impl NewsUseCase {
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        Self { source }
    }

    /// At most `limit` articles. A failing source yields an empty feed.
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub async fn latest(&self, limit: usize) -> Vec<NewsArticle> {
        match self.source.latest().await {
            Ok(mut articles) => {
                articles.truncate(limit);
                articles
            }
            Err(e) => {
                warn!(error = %e, "news source failed");
                Vec::new()
            }
        }
    }
}
