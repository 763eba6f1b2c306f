use crate::domain::entities::combined_record::CombinedRecord;
use crate::domain::values::scores::{
    network_value_score, performance_score, sustainability_index, ProjectStage, RiskLevel,
};
use serde::Serialize;

/// Detail view for one project: the dashboard row plus composite scores.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectAnalysis {
    #[serde(flatten)]
    pub record: CombinedRecord,
    pub utility_score: f64,
    pub performance_score: f64,
    pub network_value_score: f64,
    pub sustainability_index: f64,
    pub stage: ProjectStage,
    pub risk_level: RiskLevel,
}

impl ProjectAnalysis {
    pub fn from_record(record: CombinedRecord) -> Self {
        let q = &record.quote;
        let m = &record.metrics;
        Self {
            utility_score: record.utility_score(),
            performance_score: performance_score(
                Some(q.percent_change_1h),
                Some(q.percent_change_24h),
                Some(q.percent_change_7d),
            ),
            network_value_score: network_value_score(q.market_cap, q.volume_24h, m.token_velocity),
            sustainability_index: sustainability_index(
                m.revenue_per_user,
                m.burn_rate_estimate,
                m.token_velocity,
            ),
            stage: ProjectStage::classify(q.market_cap, m.token_velocity, m.revenue_per_user),
            risk_level: RiskLevel::from_volatility(q.percent_change_24h.abs()),
            record,
        }
    }
}
