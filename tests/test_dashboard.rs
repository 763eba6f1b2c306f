//! Dashboard views: table rows, summary cards, project detail, news, catalog.

mod common;

use common::{setup, setup_with, CountingNews, FailingNews, TTL};
use std::sync::Arc;
use std::time::Duration;
use web3pulse::application::filter::{DatasetFilter, SortKey};
use web3pulse::cli::watch::watch;
use web3pulse::domain::error::DomainError;
use web3pulse::domain::values::category::Category;
use web3pulse::domain::values::scores::ProjectStage;
use web3pulse::infrastructure::catalog::CuratedCatalog;
use web3pulse::infrastructure::gateways::fixed::FixedGateway;
use web3pulse::Web3Pulse;

#[tokio::test]
async fn test_dashboard_sorted_and_limited() {
    let (app, _) = setup();
    let records = app
        .dashboard(&DatasetFilter::default(), SortKey::MarketCap, Some(2))
        .await
        .unwrap();
    let symbols: Vec<&str> = records.iter().map(|r| r.project.symbol).collect();
    assert_eq!(symbols, vec!["ETH", "GALA"]);
}

#[tokio::test]
async fn test_dashboard_category_and_search() {
    let (app, _) = setup();
    let gaming = DatasetFilter {
        category: Some(Category::Web3Gaming),
        search: None,
    };
    let records = app.dashboard(&gaming, SortKey::Name, None).await.unwrap();
    let symbols: Vec<&str> = records.iter().map(|r| r.project.symbol).collect();
    assert_eq!(symbols, vec!["AXS", "GALA"]);

    let search = DatasetFilter {
        category: None,
        search: Some("ether".into()),
    };
    let records = app.dashboard(&search, SortKey::MarketCap, None).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].project.symbol, "ETH");
}

#[tokio::test]
async fn test_empty_dataset_is_no_data() {
    let app = setup_with(Arc::new(FixedGateway::default()));
    let err = app
        .dashboard(&DatasetFilter::default(), SortKey::MarketCap, None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NoData));
    assert_eq!(
        err.to_string(),
        "No data available. Please check API connectivity."
    );
    assert!(matches!(
        app.summary(&DatasetFilter::default()).await,
        Err(DomainError::NoData)
    ));
}

#[tokio::test]
async fn test_filter_matching_nothing_is_empty_not_no_data() {
    let (app, _) = setup();
    let filter = DatasetFilter {
        category: None,
        search: Some("zzz".into()),
    };
    let records = app.dashboard(&filter, SortKey::MarketCap, None).await.unwrap();
    assert!(records.is_empty());
    assert_eq!(app.summary(&filter).await.unwrap().total_projects, 0);
}

#[tokio::test]
async fn test_summary_over_sample() {
    let (app, _) = setup();
    let summary = app.summary(&DatasetFilter::default()).await.unwrap();

    assert_eq!(summary.total_projects, 4);
    // AXS: 1.8e8 / 9e8 = 0.2 velocity
    assert_eq!(summary.token_utility.count, 1);
    assert_eq!(summary.highest_utility[0].symbol, "AXS");
    // AXS and ETH up on the week
    assert_eq!(summary.growth_momentum.count, 2);
    assert!((summary.growth_momentum.rate_pct - 50.0).abs() < 1e-9);
    assert_eq!(summary.value_plays[0].symbol, "AXS");
}

#[tokio::test]
async fn test_project_detail() {
    let (app, _) = setup();
    let analysis = app.project("eth").await.unwrap();
    assert_eq!(analysis.record.project.symbol, "ETH");
    assert_eq!(analysis.stage, ProjectStage::BlueChip);
}

#[tokio::test]
async fn test_project_not_in_catalog_or_unquoted() {
    let (app, _) = setup();
    assert!(matches!(app.project("DOGE").await, Err(DomainError::NotFound(_))));
    // In the catalog but the gateway has no quote for it
    assert!(matches!(app.project("AAVE").await, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_news_limit() {
    let app = Web3Pulse::with_providers(
        Arc::new(CuratedCatalog),
        Arc::new(FixedGateway::default()),
        Arc::new(CountingNews::new(20)),
        TTL,
        TTL,
    );
    assert_eq!(app.news(10).await.len(), 10);
    assert_eq!(app.news(50).await.len(), 20);
}

#[tokio::test]
async fn test_placeholder_news_by_default() {
    let app = setup_with(Arc::new(FixedGateway::default()));
    let news = app.news(10).await;
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].source, "System");
}

#[tokio::test]
async fn test_failing_news_source_yields_empty_feed() {
    let app = Web3Pulse::with_providers(
        Arc::new(CuratedCatalog),
        Arc::new(FixedGateway::default()),
        Arc::new(FailingNews),
        TTL,
        TTL,
    );
    assert!(app.news(10).await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_watch_stops_on_shutdown_raised_mid_render() {
    let (app, gateway) = setup();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let mut tx = Some(tx);
    let shutdown = async {
        let _ = rx.await;
    };

    let renders = watch(
        &app,
        &DatasetFilter::default(),
        SortKey::MarketCap,
        Some(2),
        Duration::from_secs(60),
        shutdown,
        |result| {
            assert_eq!(result.unwrap().len(), 2);
            if let Some(tx) = tx.take() {
                let _ = tx.send(());
            }
        },
    )
    .await;

    assert_eq!(renders, 1);
    assert_eq!(gateway.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_watch_renders_each_period_and_reports_errors() {
    let app = setup_with(Arc::new(FixedGateway::default()));
    let mut errors = 0;
    let renders = watch(
        &app,
        &DatasetFilter::default(),
        SortKey::MarketCap,
        None,
        Duration::from_secs(60),
        tokio::time::sleep(Duration::from_secs(150)),
        |result| {
            if matches!(result, Err(DomainError::NoData)) {
                errors += 1;
            }
        },
    )
    .await;

    // ticks at 0s, 60s and 120s
    assert_eq!(renders, 3);
    assert_eq!(errors, 3);
}

#[test]
fn test_catalog_listing() {
    let (app, _) = setup();
    assert_eq!(app.catalog(None).len(), 100);
    assert_eq!(app.catalog(Some(Category::Web3Gaming)).len(), 49);
}
