//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use web3pulse::domain::entities::news_article::NewsArticle;
use web3pulse::domain::entities::quote::{Quote, QuoteMap};
use web3pulse::domain::ports::{GatewayError, MarketDataGateway, NewsSource};
use web3pulse::infrastructure::catalog::CuratedCatalog;
use web3pulse::infrastructure::gateways::fixed::FixedGateway;
use web3pulse::infrastructure::news::placeholder::PlaceholderNews;
use web3pulse::Web3Pulse;

pub const TTL: Duration = Duration::from_secs(300);

pub fn quote(price: f64, market_cap: f64, volume_24h: f64) -> Quote {
    Quote {
        price,
        market_cap,
        volume_24h,
        ..Default::default()
    }
}

/// Quotes for a handful of catalog symbols, deliberately inserted out of catalog order.
pub fn sample_quotes() -> Vec<(&'static str, Quote)> {
    vec![
        (
            "AXS",
            Quote {
                percent_change_7d: 12.0,
                ..quote(6.5, 9e8, 1.8e8)
            },
        ),
        (
            "UNI",
            Quote {
                circulating_supply: 6e8,
                total_supply: 8e8,
                max_supply: Some(1e9),
                percent_change_7d: -3.0,
                ..quote(2.0, 1e9, 5e7)
            },
        ),
        (
            "ETH",
            Quote {
                percent_change_24h: 1.5,
                percent_change_7d: 4.0,
                ..quote(3000.0, 3.6e11, 1.8e10)
            },
        ),
        ("GALA", quote(0.03, 1.2e9, 0.0)),
    ]
}

pub fn setup_with(gateway: Arc<dyn MarketDataGateway>) -> Web3Pulse {
    Web3Pulse::with_providers(
        Arc::new(CuratedCatalog),
        gateway,
        Arc::new(PlaceholderNews),
        TTL,
        TTL,
    )
}

pub fn setup() -> (Web3Pulse, Arc<FixedGateway>) {
    let gateway = Arc::new(FixedGateway::from_pairs(sample_quotes()));
    (setup_with(gateway.clone()), gateway)
}

/// Fails the first `failures` calls, then serves an empty quote map.
pub struct FlakyGateway {
    failures: usize,
    calls: AtomicUsize,
}

impl FlakyGateway {
    pub fn new(failures: usize) -> Self {
        Self {
            failures,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketDataGateway for FlakyGateway {
    fn name(&self) -> &str {
        "flaky"
    }

    async fn fetch_quotes(&self, _symbols: &[String]) -> Result<QuoteMap, GatewayError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if n < self.failures {
            Err(GatewayError::Network("connection refused".into()))
        } else {
            Ok(QuoteMap::new())
        }
    }
}

/// News source with a fixed number of numbered articles that counts calls.
pub struct CountingNews {
    articles: usize,
    calls: AtomicUsize,
}

impl CountingNews {
    pub fn new(articles: usize) -> Self {
        Self {
            articles,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NewsSource for CountingNews {
    fn name(&self) -> &str {
        "counting"
    }

    async fn latest(&self) -> Result<Vec<NewsArticle>, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((0..self.articles)
            .map(|i| NewsArticle {
                title: format!("Story {i}"),
                description: String::new(),
                url: format!("https://news.test/{i}"),
                source: "Test Wire".into(),
                published_at: "2026-10-17T00:00:00Z".into(),
            })
            .collect())
    }
}

/// News source whose provider always errors.
pub struct FailingNews;

#[async_trait]
impl NewsSource for FailingNews {
    fn name(&self) -> &str {
        "failing"
    }

    async fn latest(&self) -> Result<Vec<NewsArticle>, GatewayError> {
        Err(GatewayError::Network("NewsAPI returned 429 Too Many Requests".into()))
    }
}
