/// Module containing cookie jar persistence
pub mod cookie_store;

pub use cookie_store::*;
