use crate::domain::entities::project::Project;
use crate::domain::entities::quote::Quote;
use crate::domain::values::metrics;
use serde::Serialize;

/// The four derived fields. Always present; `0.0` when not estimable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub revenue_per_user: f64,
    pub token_velocity: f64,
    pub burn_rate_estimate: f64,
    pub mcap_dau_ratio: f64,
}

impl DerivedMetrics {
    pub fn from_quote(quote: &Quote) -> Self {
        Self {
            revenue_per_user: metrics::revenue_per_user(
                quote.market_cap,
                quote.volume_24h,
                quote.price,
            ),
            token_velocity: metrics::token_velocity(quote.volume_24h, quote.market_cap),
            burn_rate_estimate: metrics::burn_rate_estimate(
                quote.circulating_supply,
                quote.total_supply,
                quote.max_supply,
            ),
            mcap_dau_ratio: metrics::mcap_dau_ratio(
                quote.market_cap,
                quote.volume_24h,
                quote.price,
            ),
        }
    }
}

/// One dashboard row: catalog entry, its quote and the derived metrics,
/// serialized as a single flat object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedRecord {
    #[serde(flatten)]
    pub project: Project,
    #[serde(flatten)]
    pub quote: Quote,
    #[serde(flatten)]
    pub metrics: DerivedMetrics,
}

impl CombinedRecord {
    pub fn new(project: Project, quote: Quote) -> Self {
        let metrics = DerivedMetrics::from_quote(&quote);
        Self {
            project,
            quote,
            metrics,
        }
    }

    /// Velocity per $1B of market cap. `0.0` without a market cap.
    pub fn utility_score(&self) -> f64 {
        if self.quote.market_cap > 0.0 {
            self.metrics.token_velocity / (self.quote.market_cap / 1e9)
        } else {
            0.0
        }
    }
}
