use super::TtlCache;
use crate::domain::entities::quote::QuoteMap;
use crate::domain::ports::{GatewayError, MarketDataGateway};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Memoizes quote lookups per requested symbol list. Failures are not cached.
pub struct CachedGateway {
    inner: Arc<dyn MarketDataGateway>,
    cache: TtlCache<QuoteMap>,
}

impl CachedGateway {
    pub fn new(inner: Arc<dyn MarketDataGateway>, ttl: Duration) -> Self {
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
impl MarketDataGateway for CachedGateway {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn fetch_quotes(&self, symbols: &[String]) -> Result<QuoteMap, GatewayError> {
        let key = symbols.join(",");
        if let Some(hit) = self.cache.get(&key) {
            debug!(gateway = self.inner.name(), entries = hit.len(), "quote cache hit");
            return Ok(hit);
        }

        let quotes = self.inner.fetch_quotes(symbols).await?;
        self.cache.insert(key, quotes.clone());
        Ok(quotes)
    }
}
