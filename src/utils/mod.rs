/// Module containing environment configuration helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing markup scraping helpers
pub mod parsing;

pub use config::*;
pub use logger::*;
