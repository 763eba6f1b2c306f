pub mod analysis;
pub mod filter;
pub mod news;
pub mod pipeline;
pub mod summary;
