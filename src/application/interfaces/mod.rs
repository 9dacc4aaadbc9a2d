/// Account service interface
pub mod account;
/// Order service interface
pub mod order;
