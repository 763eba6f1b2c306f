use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "web3pulse", about = "Web3 and Web3 Gaming token analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project table with derived metrics
    Dashboard {
        /// Category filter (web3, web3-gaming)
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive match on name or symbol
        #[arg(long)]
        search: Option<String>,
        /// Sort key (market_cap, volume, price, velocity, revenue, burn, mcap_dau, change_24h, change_7d, name)
        #[arg(long, default_value = "market_cap")]
        sort: String,
        #[arg(long)]
        limit: Option<usize>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Re-render the dashboard table on an interval until interrupted
    Watch {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value = "market_cap")]
        sort: String,
        #[arg(long)]
        limit: Option<usize>,
        /// Seconds between renders (quotes refresh per the market cache TTL)
        #[arg(long, default_value = "60")]
        interval: u64,
    },
    /// Summary cards and insights
    Summary {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Detail view for one project
    Project {
        /// Token symbol (e.g. UNI)
        symbol: String,
    },
    /// Latest Web3 news
    News {
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// List tracked projects
    Catalog {
        #[arg(long)]
        category: Option<String>,
    },
}
