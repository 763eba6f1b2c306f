use crate::domain::entities::quote::{Quote, QuoteMap};
use crate::domain::ports::{GatewayError, MarketDataGateway};
use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

pub const DEFAULT_BASE_URL: &str = "https://pro-api.coinmarketcap.com/v1";

/// CoinMarketCap latest-quotes client (`/cryptocurrency/quotes/latest`, USD).
pub struct CoinMarketCapGateway {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl CoinMarketCapGateway {
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.into())
                .trim_end_matches('/')
                .to_string(),
            client: reqwest::Client::builder()
                .user_agent("web3pulse/0.1")
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct QuotesResponse {
    #[serde(default)]
    data: Option<HashMap<String, CmcAsset>>,
}

#[derive(Debug, Deserialize)]
struct CmcAsset {
    #[serde(default, deserialize_with = "lenient_f64")]
    circulating_supply: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    total_supply: f64,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    max_supply: Option<f64>,
    #[serde(default)]
    quote: HashMap<String, CmcQuote>,
}

#[derive(Debug, Deserialize)]
struct CmcQuote {
    #[serde(default, deserialize_with = "lenient_f64")]
    price: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    market_cap: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    volume_24h: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    percent_change_1h: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    percent_change_24h: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    percent_change_7d: f64,
    #[serde(default)]
    last_updated: Option<String>,
}

/// Numbers, numeric strings, null or anything else. Non-numeric becomes `None`.
fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| match v {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|v| v.is_finite()))
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_f64(deserializer)?.unwrap_or(0.0))
}

fn into_quote_map(response: QuotesResponse) -> QuoteMap {
    response
        .data
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(symbol, asset)| {
            let Some(usd) = asset.quote.get("USD") else {
                debug!(%symbol, "no USD quote in response");
                return None;
            };
            let quote = Quote {
                price: usd.price,
                market_cap: usd.market_cap,
                volume_24h: usd.volume_24h,
                percent_change_1h: usd.percent_change_1h,
                percent_change_24h: usd.percent_change_24h,
                percent_change_7d: usd.percent_change_7d,
                circulating_supply: asset.circulating_supply,
                total_supply: asset.total_supply,
                max_supply: asset.max_supply,
                last_updated: usd.last_updated.clone(),
            };
            Some((symbol, quote))
        })
        .collect()
}

/// Decode a raw `quotes/latest` body.
pub fn parse_quotes(body: &str) -> Result<QuoteMap, GatewayError> {
    let response: QuotesResponse =
        serde_json::from_str(body).map_err(|e| GatewayError::Parse(e.to_string()))?;
    Ok(into_quote_map(response))
}

#[async_trait]
impl MarketDataGateway for CoinMarketCapGateway {
    fn name(&self) -> &str {
        "coinmarketcap"
    }

    #[instrument(skip(self, symbols), fields(count = symbols.len()))]
    async fn fetch_quotes(&self, symbols: &[String]) -> Result<QuoteMap, GatewayError> {
        if symbols.is_empty() {
            return Ok(QuoteMap::new());
        }
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GatewayError::Config("WEB3PULSE_CMC_API_KEY is not set".into())
        })?;

        let resp = self
            .client
            .get(format!("{}/cryptocurrency/quotes/latest", self.base_url))
            .header("Accept", "application/json")
            .header("X-CMC_PRO_API_KEY", api_key)
            .query(&[
                ("symbol", symbols.join(",").as_str()),
                ("convert", "USD"),
                ("skip_invalid", "true"),
            ])
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(GatewayError::Network(format!(
                "CoinMarketCap API returned {}",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        parse_quotes(&body)
    }
}
