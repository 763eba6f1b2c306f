use crate::domain::ports::GatewayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The provider answered but no catalog project had a quote.
    #[error("No data available. Please check API connectivity.")]
    NoData,

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}
