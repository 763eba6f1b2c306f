pub mod newsapi;
pub mod placeholder;
