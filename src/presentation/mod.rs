/// Account models and the account summary parser
pub mod account;
/// Order enumerations, confirmations and status records
pub mod order;

pub use account::*;
pub use order::*;
