pub mod avito_scraper;
pub mod cache;
pub mod card;
pub mod debug;
pub mod error;
pub mod listing;
pub mod models;
pub mod parser;
