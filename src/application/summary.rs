use crate::application::filter::{top_by, SortKey};
use crate::domain::entities::combined_record::CombinedRecord;
use crate::domain::values::category::Category;
use serde::Serialize;

/// Velocity above which a token counts as actively used (>0.1x daily turnover).
pub const HIGH_VELOCITY: f64 = 0.1;
/// Velocity above which trading is healthy relative to valuation.
pub const EFFICIENT_VELOCITY: f64 = 0.05;
/// Revenue per user above which a project counts as profitable.
pub const PROFITABLE_REVENUE_PER_USER: f64 = 1.0;

const INSIGHT_COUNT: usize = 3;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryCard {
    pub label: String,
    pub count: usize,
    pub total: usize,
    pub rate_pct: f64,
}

impl SummaryCard {
    fn count_where(
        label: &str,
        records: &[CombinedRecord],
        pred: impl Fn(&CombinedRecord) -> bool,
    ) -> Self {
        let total = records.len();
        let count = records.iter().filter(|&r| pred(r)).count();
        let rate_pct = if total > 0 {
            count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self {
            label: label.to_string(),
            count,
            total,
            rate_pct,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Insight {
    pub symbol: String,
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_projects: usize,
    pub token_utility: SummaryCard,
    pub revenue_efficiency: SummaryCard,
    pub market_efficiency: SummaryCard,
    pub growth_momentum: SummaryCard,
    pub highest_utility: Vec<Insight>,
    pub most_capital_efficient: Vec<Insight>,
    pub value_plays: Vec<Insight>,
    pub category_counts: Vec<CategoryCount>,
}

pub fn summarize(records: &[CombinedRecord]) -> DashboardSummary {
    let insight = |r: &CombinedRecord, value: f64| Insight {
        symbol: r.project.symbol.to_string(),
        name: r.project.name.to_string(),
        value,
    };

    let highest_utility: Vec<Insight> = top_by(records, SortKey::Velocity, INSIGHT_COUNT, |_| true)
        .iter()
        .map(|r| insight(r, r.metrics.token_velocity))
        .collect();

    let most_capital_efficient: Vec<Insight> = top_by(records, SortKey::Revenue, INSIGHT_COUNT, |r| {
        r.metrics.revenue_per_user > 0.0
    })
    .iter()
    .map(|r| insight(r, r.metrics.revenue_per_user))
    .collect();

    let mut scored: Vec<(&CombinedRecord, f64)> = records
        .iter()
        .map(|r| (r, r.utility_score()))
        .filter(|(_, score)| *score > 0.0)
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    let value_plays: Vec<Insight> = scored
        .into_iter()
        .take(INSIGHT_COUNT)
        .map(|(r, score)| insight(r, score))
        .collect();

    let category_counts = Category::ALL
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: records.iter().filter(|r| r.project.category == category).count(),
        })
        .collect();

    DashboardSummary {
        total_projects: records.len(),
        token_utility: SummaryCard::count_where("Token Utility Rate", records, |r| {
            r.metrics.token_velocity > HIGH_VELOCITY
        }),
        revenue_efficiency: SummaryCard::count_where("Revenue Efficiency", records, |r| {
            r.metrics.revenue_per_user > PROFITABLE_REVENUE_PER_USER
        }),
        market_efficiency: SummaryCard::count_where("Market Efficiency", records, |r| {
            r.metrics.token_velocity > EFFICIENT_VELOCITY
        }),
        growth_momentum: SummaryCard::count_where("Growth Momentum", records, |r| {
            r.quote.percent_change_7d > 0.0
        }),
        highest_utility,
        most_capital_efficient,
        value_plays,
        category_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::project::Project;
    use crate::domain::entities::quote::Quote;

    fn record(
        symbol: &'static str,
        category: Category,
        price: f64,
        market_cap: f64,
        volume_24h: f64,
        change_7d: f64,
    ) -> CombinedRecord {
        CombinedRecord::new(
            Project::new(symbol, symbol, category),
            Quote {
                price,
                market_cap,
                volume_24h,
                percent_change_7d: change_7d,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_empty_dataset_has_zero_rates() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_projects, 0);
        assert_eq!(summary.token_utility.rate_pct, 0.0);
        assert_eq!(summary.growth_momentum.rate_pct, 0.0);
        assert!(summary.highest_utility.is_empty());
        assert!(summary.value_plays.is_empty());
        assert!(summary.category_counts.iter().all(|c| c.count == 0));
    }

    #[test]
    fn test_cards_and_insights() {
        let records = vec![
            // velocity 0.2, rpu: tx=2e8/(1*5)=4e7, dau=1.33e7, fees 6e5 -> 0.045
            record("AAA", Category::Web3, 1.0, 1e9, 2e8, 5.0),
            // velocity 0.06
            record("BBB", Category::Web3Gaming, 10.0, 1e8, 6e6, -1.0),
            // tiny price -> high rpu via DAU floor, velocity 0.01
            record("CCC", Category::Web3Gaming, 1000.0, 1e8, 1e6, 0.0),
            // no market cap at all
            record("DDD", Category::Web3, 0.0, 0.0, 0.0, 2.0),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.total_projects, 4);
        assert_eq!(summary.token_utility.count, 1);
        assert_eq!(summary.market_efficiency.count, 2);
        assert_eq!(summary.growth_momentum.count, 2);
        assert!((summary.growth_momentum.rate_pct - 50.0).abs() < 1e-12);

        assert_eq!(summary.highest_utility[0].symbol, "AAA");
        assert_eq!(summary.highest_utility.len(), 3);

        assert!(summary.most_capital_efficient.iter().all(|i| i.value > 0.0));
        assert!(summary.most_capital_efficient.iter().all(|i| i.symbol != "DDD"));

        // BBB: 0.06 / 0.1 = 0.6 per $1B beats AAA: 0.2 / 1.0
        assert_eq!(summary.value_plays[0].symbol, "BBB");
        assert!(summary.value_plays.iter().all(|i| i.symbol != "DDD"));

        let gaming = summary
            .category_counts
            .iter()
            .find(|c| c.category == Category::Web3Gaming)
            .unwrap();
        assert_eq!(gaming.count, 2);
    }
}
