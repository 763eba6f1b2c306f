pub mod cache;
pub mod catalog;
pub mod gateways;
pub mod news;
