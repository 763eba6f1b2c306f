use super::GatewayError;
use crate::domain::entities::quote::QuoteMap;
use async_trait::async_trait;

/// Source of latest market quotes.
///
/// The returned map may hold fewer entries than requested; a missing
/// symbol means "no data", not an error.
#[async_trait]
pub trait MarketDataGateway: Send + Sync {
    /// Gateway name for logging.
    fn name(&self) -> &str;

    async fn fetch_quotes(&self, symbols: &[String]) -> Result<QuoteMap, GatewayError>;
}
