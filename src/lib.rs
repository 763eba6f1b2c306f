pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

use crate::application::analysis::ProjectAnalysis;
use crate::application::filter::{sort_records, DatasetFilter, SortKey};
use crate::application::news::NewsUseCase;
use crate::application::pipeline::DatasetUseCase;
use crate::application::summary::{summarize, DashboardSummary};
use crate::config::AppConfig;
use crate::domain::entities::combined_record::CombinedRecord;
use crate::domain::entities::news_article::NewsArticle;
use crate::domain::entities::project::Project;
use crate::domain::error::DomainError;
use crate::domain::ports::{MarketDataGateway, NewsSource, ProjectCatalog};
use crate::domain::values::category::Category;
use crate::infrastructure::cache::{CachedGateway, CachedNewsSource};
use crate::infrastructure::catalog::CuratedCatalog;
use crate::infrastructure::gateways::coinmarketcap::CoinMarketCapGateway;
use crate::infrastructure::news::newsapi::NewsApiSource;
use crate::infrastructure::news::placeholder::PlaceholderNews;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct Web3Pulse {
    catalog: Arc<dyn ProjectCatalog>,
    dataset_uc: DatasetUseCase,
    news_uc: NewsUseCase,
    market_cache: Arc<CachedGateway>,
    news_cache: Arc<CachedNewsSource>,
}

impl Web3Pulse {
    pub fn new(config: &AppConfig) -> Self {
        let gateway: Arc<dyn MarketDataGateway> = Arc::new(CoinMarketCapGateway::new(
            config.cmc_api_key.clone(),
            config.cmc_base_url.clone(),
        ));

        let news: Arc<dyn NewsSource> = match &config.news_api_key {
            Some(key) => Arc::new(NewsApiSource::new(key.clone(), config.news_base_url.clone())),
            None => {
                info!("NEWS_API_KEY not set; using placeholder news");
                Arc::new(PlaceholderNews)
            }
        };

        Self::with_providers(
            Arc::new(CuratedCatalog),
            gateway,
            news,
            config.market_ttl,
            config.news_ttl,
        )
    }

    pub fn with_providers(
        catalog: Arc<dyn ProjectCatalog>,
        gateway: Arc<dyn MarketDataGateway>,
        news: Arc<dyn NewsSource>,
        market_ttl: Duration,
        news_ttl: Duration,
    ) -> Self {
        let market_cache = Arc::new(CachedGateway::new(gateway, market_ttl));
        let news_cache = Arc::new(CachedNewsSource::new(news, news_ttl));

        Self {
            dataset_uc: DatasetUseCase::new(catalog.clone(), market_cache.clone()),
            news_uc: NewsUseCase::new(news_cache.clone()),
            catalog,
            market_cache,
            news_cache,
        }
    }

    pub fn catalog(&self, category: Option<Category>) -> Vec<Project> {
        match category {
            Some(c) => self.catalog.by_category(c),
            None => self.catalog.projects().to_vec(),
        }
    }

    /// Every quoted catalog project, in catalog order.
    pub async fn dataset(&self) -> Result<Vec<CombinedRecord>, DomainError> {
        self.dataset_uc.load().await
    }

    /// Like `dataset`, but an empty result is `DomainError::NoData`.
    async fn populated_dataset(&self) -> Result<Vec<CombinedRecord>, DomainError> {
        let records = self.dataset().await?;
        if records.is_empty() {
            return Err(DomainError::NoData);
        }
        Ok(records)
    }

    pub async fn dashboard(
        &self,
        filter: &DatasetFilter,
        sort: SortKey,
        limit: Option<usize>,
    ) -> Result<Vec<CombinedRecord>, DomainError> {
        let mut records = filter.apply(&self.populated_dataset().await?);
        sort_records(&mut records, sort);
        if let Some(limit) = limit {
            records.truncate(limit);
        }
        Ok(records)
    }

    pub async fn summary(&self, filter: &DatasetFilter) -> Result<DashboardSummary, DomainError> {
        let records = filter.apply(&self.populated_dataset().await?);
        Ok(summarize(&records))
    }

    pub async fn project(&self, symbol: &str) -> Result<ProjectAnalysis, DomainError> {
        let project = self
            .catalog
            .find(symbol)
            .ok_or_else(|| DomainError::NotFound(format!("{symbol} is not in the catalog")))?;

        self.dataset()
            .await?
            .into_iter()
            .find(|r| r.project.symbol == project.symbol)
            .map(ProjectAnalysis::from_record)
            .ok_or_else(|| DomainError::NotFound(format!("no market data for {}", project.symbol)))
    }

    pub async fn news(&self, limit: usize) -> Vec<NewsArticle> {
        self.news_uc.latest(limit).await
    }

    /// Drop cached quotes and news so the next call hits the providers.
    pub fn refresh(&self) {
        self.market_cache.invalidate();
        self.news_cache.invalidate();
    }
}
