use crate::application::interfaces::account::AccountService;
use crate::error::AppError;
use crate::presentation::account::{AccountList, parse_account_list};
use crate::session::interface::FtSession;
use crate::transport::http_client::FtHttpClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the account service
pub struct AccountServiceImpl<T: FtHttpClient> {
    session: Arc<FtSession<T>>,
}

impl<T: FtHttpClient> AccountServiceImpl<T> {
    /// Creates a new instance of the account service
    pub fn new(session: Arc<FtSession<T>>) -> Self {
        Self { session }
    }

    /// Gets the session the service runs on
    pub fn get_session(&self) -> Arc<FtSession<T>> {
        self.session.clone()
    }
}

#[async_trait]
impl<T: FtHttpClient + 'static> AccountService for AccountServiceImpl<T> {
    async fn list_accounts(&self) -> Result<AccountList, AppError> {
        info!("Getting account list");

        let html = self
            .session
            .transport()
            .get(&self.session.endpoints().account_list())
            .await?;
        let accounts = AccountList::new(parse_account_list(&html));

        debug!("Account list obtained: {} accounts", accounts.len());
        Ok(accounts)
    }
}
