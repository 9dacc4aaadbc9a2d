use crate::error::AppError;
use crate::presentation::account::AccountList;
use async_trait::async_trait;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Lists the accounts reachable by the session
    ///
    /// One request to the account summary page; rows that cannot be parsed
    /// are left out rather than reported.
    async fn list_accounts(&self) -> Result<AccountList, AppError>;
}
