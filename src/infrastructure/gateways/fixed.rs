use crate::domain::entities::quote::{Quote, QuoteMap};
use crate::domain::ports::{GatewayError, MarketDataGateway};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory gateway serving a fixed set of quotes.
///
/// Answers only for requested symbols it knows about and counts calls,
/// which makes it handy for exercising caches and the pipeline offline.
#[derive(Debug, Default)]
pub struct FixedGateway {
    quotes: QuoteMap,
    calls: AtomicUsize,
}

impl FixedGateway {
    pub fn new(quotes: QuoteMap) -> Self {
        Self {
            quotes,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Quote)>,
        S: Into<String>,
    {
        Self::new(pairs.into_iter().map(|(s, q)| (s.into(), q)).collect())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketDataGateway for FixedGateway {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn fetch_quotes(&self, symbols: &[String]) -> Result<QuoteMap, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(symbols
            .iter()
            .filter_map(|s| self.quotes.get(s).map(|q| (s.clone(), q.clone())))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_only_requested_known_symbols() {
        let gateway = FixedGateway::from_pairs([("UNI", Quote::default()), ("ETH", Quote::default())]);
        let quotes = gateway
            .fetch_quotes(&["UNI".into(), "DOGE".into()])
            .await
            .unwrap();
        assert_eq!(quotes.len(), 1);
        assert!(quotes.contains_key("UNI"));
        assert_eq!(gateway.calls(), 1);
    }
}
