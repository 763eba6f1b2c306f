pub mod market_data_gateway;
pub mod news_source;
pub mod project_catalog;

pub use market_data_gateway::MarketDataGateway;
pub use news_source::NewsSource;
pub use project_catalog::ProjectCatalog;

/// Failure talking to an external data provider.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// HTTP or network error
    Network(String),
    /// Response parsing error
    Parse(String),
    /// Configuration error (missing API key, etc.)
    Config(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Network(msg) => write!(f, "Network error: {msg}"),
            GatewayError::Parse(msg) => write!(f, "Parse error: {msg}"),
            GatewayError::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for GatewayError {}
