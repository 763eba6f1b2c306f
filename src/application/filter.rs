use crate::domain::entities::combined_record::CombinedRecord;
use crate::domain::error::DomainError;
use crate::domain::values::category::Category;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default)]
pub struct DatasetFilter {
    pub category: Option<Category>,
    /// Case-insensitive substring of name or symbol.
    pub search: Option<String>,
}

impl DatasetFilter {
    pub fn accepts(&self, record: &CombinedRecord) -> bool {
        if let Some(category) = self.category {
            if record.project.category != category {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => record.project.matches(term),
            _ => true,
        }
    }

    pub fn apply(&self, records: &[CombinedRecord]) -> Vec<CombinedRecord> {
        records.iter().filter(|r| self.accepts(r)).cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    MarketCap,
    Volume,
    Price,
    Velocity,
    Revenue,
    Burn,
    McapDau,
    Change24h,
    Change7d,
    Name,
}

impl SortKey {
    fn value(&self, record: &CombinedRecord) -> f64 {
        match self {
            SortKey::MarketCap => record.quote.market_cap,
            SortKey::Volume => record.quote.volume_24h,
            SortKey::Price => record.quote.price,
            SortKey::Velocity => record.metrics.token_velocity,
            SortKey::Revenue => record.metrics.revenue_per_user,
            SortKey::Burn => record.metrics.burn_rate_estimate,
            SortKey::McapDau => record.metrics.mcap_dau_ratio,
            SortKey::Change24h => record.quote.percent_change_24h,
            SortKey::Change7d => record.quote.percent_change_7d,
            SortKey::Name => 0.0,
        }
    }

    /// Numeric keys sort descending, `Name` ascending. Stable for ties.
    pub fn compare(&self, a: &CombinedRecord, b: &CombinedRecord) -> Ordering {
        match self {
            SortKey::Name => a
                .project
                .name
                .to_lowercase()
                .cmp(&b.project.name.to_lowercase()),
            _ => self.value(b).total_cmp(&self.value(a)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::MarketCap => "market_cap",
            SortKey::Volume => "volume",
            SortKey::Price => "price",
            SortKey::Velocity => "velocity",
            SortKey::Revenue => "revenue",
            SortKey::Burn => "burn",
            SortKey::McapDau => "mcap_dau",
            SortKey::Change24h => "change_24h",
            SortKey::Change7d => "change_7d",
            SortKey::Name => "name",
        };
        write!(f, "{s}")
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "market_cap" | "mcap" => Ok(SortKey::MarketCap),
            "volume" | "volume_24h" => Ok(SortKey::Volume),
            "price" => Ok(SortKey::Price),
            "velocity" | "token_velocity" => Ok(SortKey::Velocity),
            "revenue" | "revenue_per_user" => Ok(SortKey::Revenue),
            "burn" | "burn_rate" => Ok(SortKey::Burn),
            "mcap_dau" | "mcap_dau_ratio" => Ok(SortKey::McapDau),
            "change_24h" => Ok(SortKey::Change24h),
            "change_7d" => Ok(SortKey::Change7d),
            "name" => Ok(SortKey::Name),
            _ => Err(DomainError::InvalidInput(format!("Unknown sort key: {s}"))),
        }
    }
}

pub fn sort_records(records: &mut [CombinedRecord], key: SortKey) {
    records.sort_by(|a, b| key.compare(a, b));
}

/// Top `n` records by `key` among those passing `keep`.
pub fn top_by(
    records: &[CombinedRecord],
    key: SortKey,
    n: usize,
    keep: impl Fn(&CombinedRecord) -> bool,
) -> Vec<CombinedRecord> {
    let mut kept: Vec<CombinedRecord> = records.iter().filter(|&r| keep(r)).cloned().collect();
    sort_records(&mut kept, key);
    kept.truncate(n);
    kept
}
