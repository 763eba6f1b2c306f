use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Latest USD market quote for one symbol.
///
/// Numeric fields the provider did not report are `0.0`. `max_supply`
/// stays optional: `None` means the token is uncapped (or the cap is
/// unknown), which is not the same as a cap of zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub price: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub percent_change_1h: f64,
    pub percent_change_24h: f64,
    pub percent_change_7d: f64,
    pub circulating_supply: f64,
    pub total_supply: f64,
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Quotes keyed by symbol. Symbols without data are simply absent.
pub type QuoteMap = HashMap<String, Quote>;
