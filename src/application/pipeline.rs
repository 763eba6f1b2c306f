use crate::domain::entities::combined_record::CombinedRecord;
use crate::domain::entities::project::Project;
use crate::domain::entities::quote::QuoteMap;
use crate::domain::error::DomainError;
use crate::domain::ports::{MarketDataGateway, ProjectCatalog};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Joins catalog projects with their quotes and derives the metrics.
///
/// Output follows catalog order. Projects with no quote are dropped, so the
/// result holds exactly one record per project present in `quotes`.
pub fn combine(projects: &[Project], quotes: &QuoteMap) -> Vec<CombinedRecord> {
    projects
        .iter()
        .filter_map(|project| match quotes.get(project.symbol) {
            Some(quote) => Some(CombinedRecord::new(*project, quote.clone())),
            None => {
                debug!(symbol = project.symbol, "no quote; skipping project");
                None
            }
        })
        .collect()
}

pub struct DatasetUseCase {
    catalog: Arc<dyn ProjectCatalog>,
    gateway: Arc<dyn MarketDataGateway>,
}

impl DatasetUseCase {
    pub fn new(catalog: Arc<dyn ProjectCatalog>, gateway: Arc<dyn MarketDataGateway>) -> Self {
        Self { catalog, gateway }
    }

    /// Fetch quotes for every catalog symbol and build the dataset.
    #[instrument(skip(self), fields(gateway = self.gateway.name()))]
    pub async fn load(&self) -> Result<Vec<CombinedRecord>, DomainError> {
        let symbols = self.catalog.symbols();
        let quotes = self.gateway.fetch_quotes(&symbols).await?;
        let records = combine(self.catalog.projects(), &quotes);

        info!(
            requested = symbols.len(),
            quoted = quotes.len(),
            records = records.len(),
            "dataset built"
        );
        Ok(records)
    }
}
