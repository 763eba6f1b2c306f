pub mod coinmarketcap;
pub mod fixed;
