pub mod combined_record;
pub mod news_article;
pub mod project;
pub mod quote;
