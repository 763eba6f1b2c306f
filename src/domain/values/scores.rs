//! Composite scores layered on top of the derived metrics.
//!
//! These are display heuristics for the project detail view. Like the
//! metrics they are total and fall back to a neutral value on degenerate
//! input.

use serde::Serialize;
use std::fmt;

/// Weighted price-change score. Weights favour the longer windows.
/// Missing windows are left out of both numerator and denominator.
pub fn performance_score(change_1h: Option<f64>, change_24h: Option<f64>, change_7d: Option<f64>) -> f64 {
    let weighted = [(change_1h, 0.1), (change_24h, 0.4), (change_7d, 0.5)];

    let mut score = 0.0;
    let mut total_weight = 0.0;
    for (change, weight) in weighted {
        if let Some(change) = change.filter(|c| c.is_finite()) {
            score += change * weight;
            total_weight += weight;
        }
    }

    if total_weight > 0.0 {
        score / total_weight
    } else {
        0.0
    }
}

/// Network value: log-scaled size, capped utility and liquidity.
pub fn network_value_score(market_cap: f64, volume_24h: f64, velocity: f64) -> f64 {
    if !(market_cap > 0.0 && volume_24h > 0.0) {
        return 0.0;
    }
    let size_factor = (market_cap / 1e6).log10();
    let utility_factor = (velocity * 10.0).min(5.0);
    let liquidity_factor = volume_24h / market_cap;

    let score = size_factor * 0.3 + utility_factor * 0.5 + liquidity_factor * 20.0 * 0.2;
    if score.is_finite() {
        score.max(0.0)
    } else {
        0.0
    }
}

/// Tokenomics sustainability on a 0–100 scale.
///
/// Revenue is capped at $10/user, velocity at 1x, burn at 50%.
pub fn sustainability_index(revenue_per_user: f64, burn_rate: f64, velocity: f64) -> f64 {
    let revenue_score = revenue_per_user.min(10.0) / 10.0;
    let velocity_score = velocity.min(1.0);
    let burn_score = burn_rate.min(50.0) / 50.0;

    let index = (revenue_score * 0.5 + velocity_score * 0.3 + burn_score * 0.2) * 100.0;
    if index.is_finite() {
        index
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStage {
    #[serde(rename = "Early Stage")]
    EarlyStage,
    Growing,
    Developing,
    Established,
    Mature,
    #[serde(rename = "Blue Chip")]
    BlueChip,
    Legacy,
}

impl ProjectStage {
    pub fn classify(market_cap: f64, velocity: f64, revenue_per_user: f64) -> Self {
        if market_cap < 10e6 {
            ProjectStage::EarlyStage
        } else if market_cap < 100e6 {
            if velocity > 0.1 && revenue_per_user > 0.5 {
                ProjectStage::Growing
            } else {
                ProjectStage::Developing
            }
        } else if market_cap < 1e9 {
            if velocity > 0.05 && revenue_per_user > 1.0 {
                ProjectStage::Established
            } else {
                ProjectStage::Mature
            }
        } else if velocity > 0.02 {
            ProjectStage::BlueChip
        } else {
            ProjectStage::Legacy
        }
    }
}

impl fmt::Display for ProjectStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectStage::EarlyStage => "Early Stage",
            ProjectStage::Growing => "Growing",
            ProjectStage::Developing => "Developing",
            ProjectStage::Established => "Established",
            ProjectStage::Mature => "Mature",
            ProjectStage::BlueChip => "Blue Chip",
            ProjectStage::Legacy => "Legacy",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// Buckets an absolute percentage move.
    pub fn from_volatility(volatility: f64) -> Self {
        if volatility < 5.0 {
            RiskLevel::Low
        } else if volatility < 15.0 {
            RiskLevel::Medium
        } else if volatility < 30.0 {
            RiskLevel::High
        } else {
            RiskLevel::VeryHigh
        }
    }
}
