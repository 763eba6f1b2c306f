use clap::Parser;
use std::time::Duration;
use web3pulse::application::filter::{DatasetFilter, SortKey};
use web3pulse::cli::commands::{Cli, Commands};
use web3pulse::cli::render::records_table;
use web3pulse::cli::watch::watch;
use web3pulse::config::AppConfig;
use web3pulse::domain::error::DomainError;
use web3pulse::domain::values::category::Category;
use web3pulse::logging::init_tracing;
use web3pulse::Web3Pulse;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = AppConfig::from_env();
    init_tracing(config.log_json);

    let app = Web3Pulse::new(&config);

    let result = run_command(&app, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(app: &Web3Pulse, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Dashboard {
            category,
            search,
            sort,
            limit,
            json,
        } => {
            let filter = parse_filter(category, search)?;
            let sort: SortKey = sort.parse()?;
            let records = app.dashboard(&filter, sort, limit).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                println!("{}", records_table(&records));
            }
        }
        Commands::Watch {
            category,
            search,
            sort,
            limit,
            interval,
        } => {
            let filter = parse_filter(category, search)?;
            let sort: SortKey = sort.parse()?;
            let period = Duration::from_secs(interval.max(1));
            let shutdown = async {
                let _ = tokio::signal::ctrl_c().await;
            };
            watch(app, &filter, sort, limit, period, shutdown, |result| match result {
                Ok(records) => {
                    println!("{}", records_table(&records));
                    println!(
                        "Last updated: {}",
                        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
                    );
                }
                Err(e) => eprintln!("Error loading dashboard: {e}"),
            })
            .await;
        }
        Commands::Summary { category, search } => {
            let filter = parse_filter(category, search)?;
            let summary = app.summary(&filter).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Project { symbol } => {
            let analysis = app.project(&symbol).await?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Commands::News { limit } => {
            let articles = app.news(limit).await;
            if articles.is_empty() {
                println!("No recent news articles available.");
            } else {
                println!("{}", serde_json::to_string_pretty(&articles)?);
            }
        }
        Commands::Catalog { category } => {
            let cat = parse_category(category)?;
            let projects = app.catalog(cat);
            println!("{}", serde_json::to_string_pretty(&projects)?);
        }
    }
    Ok(())
}

fn parse_category(category: Option<String>) -> Result<Option<Category>, DomainError> {
    category.map(|c| c.parse()).transpose()
}

fn parse_filter(
    category: Option<String>,
    search: Option<String>,
) -> Result<DatasetFilter, DomainError> {
    Ok(DatasetFilter {
        category: parse_category(category)?,
        search,
    })
}
