use super::TtlCache;
use crate::domain::entities::news_article::NewsArticle;
use crate::domain::ports::{GatewayError, NewsSource};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const KEY: &str = "latest";

pub struct CachedNewsSource {
    inner: Arc<dyn NewsSource>,
    cache: TtlCache<Vec<NewsArticle>>,
}

impl CachedNewsSource {
    pub fn new(inner: Arc<dyn NewsSource>, ttl: Duration) -> Self {
        Self {
            inner,
            cache: TtlCache::new(ttl),
        }
    }

    pub fn invalidate(&self) {
        self.cache.clear();
    }
}

#[async_trait]
impl NewsSource for CachedNewsSource {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn latest(&self) -> Result<Vec<NewsArticle>, GatewayError> {
        if let Some(hit) = self.cache.get(KEY) {
            debug!(source = self.inner.name(), "news cache hit");
            return Ok(hit);
        }
        let articles = self.inner.latest().await?;
        self.cache.insert(KEY, articles.clone());
        Ok(articles)
    }
}
