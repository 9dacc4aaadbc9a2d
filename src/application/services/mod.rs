/// Module containing the account service for listing accounts
pub mod account_service;
/// Module containing the order service for placing and tracking orders
pub mod order_service;

pub use crate::application::interfaces::account::*;
pub use crate::application::interfaces::order::*;
pub use account_service::AccountServiceImpl;
pub use order_service::OrderServiceImpl;
