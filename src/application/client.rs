/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Client for the Firstrade web interface
//!
//! Wires the transport, the cookie store and the session together and exposes
//! the account and order services on a single value.
//!
//! # Example
//! ```ignore
//! use firstrade_client::prelude::*;
//!
//! let client = Client::new(Config::new()).await?;
//! for account in client.list_accounts().await?.accounts {
//!     println!("{} {}", account.number, account.balance);
//! }
//! ```

use crate::application::config::Config;
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::order::OrderService;
use crate::application::services::{AccountServiceImpl, OrderServiceImpl};
use crate::error::AppError;
use crate::model::requests::OrderRequest;
use crate::presentation::account::AccountList;
use crate::presentation::order::{CancelReceipt, OrderConfirmation, OrderStatus};
use crate::session::auth::FtAuth;
use crate::session::interface::{FtAuthenticator, FtSession};
use crate::storage::{CookieStore, FileCookieStore};
use crate::transport::http_client::{FtHttpClient, FtHttpClientImpl};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Authenticated client exposing the account and order services
pub struct Client<T: FtHttpClient = FtHttpClientImpl> {
    session: Arc<FtSession<T>>,
    accounts: AccountServiceImpl<T>,
    orders: OrderServiceImpl<T>,
}

impl Client<FtHttpClientImpl> {
    /// Creates a client and establishes its session
    ///
    /// The cookie jar is read from `config.session.cookie_file` and written
    /// back there after a fresh login when `config.session.persistent` is set.
    ///
    /// # Errors
    /// * [`AppError::Authentication`] if the site rejects the credentials or PIN
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let transport = Arc::new(FtHttpClientImpl::new(&config.rest_api)?);
        let store: Arc<dyn CookieStore> =
            Arc::new(FileCookieStore::new(config.session.cookie_file.clone()));
        Self::with_transport(transport, store, config).await
    }
}

impl<T: FtHttpClient + 'static> Client<T> {
    /// Creates a client over an explicit transport and cookie store
    pub async fn with_transport(
        transport: Arc<T>,
        store: Arc<dyn CookieStore>,
        config: Config,
    ) -> Result<Self, AppError> {
        let auth = FtAuth::new(transport, store);
        let session = auth
            .establish(config.credentials, config.session.persistent)
            .await?;
        info!(
            "Client ready ({})",
            if session.reused_cookies() {
                "reused cookies"
            } else {
                "fresh login"
            }
        );
        Ok(Self::from_session(Arc::new(session)))
    }

    /// Creates a client over an already established session
    pub fn from_session(session: Arc<FtSession<T>>) -> Self {
        Self {
            accounts: AccountServiceImpl::new(session.clone()),
            orders: OrderServiceImpl::new(session.clone()),
            session,
        }
    }

    /// Gets the underlying session
    pub fn session(&self) -> &FtSession<T> {
        &self.session
    }
}

#[async_trait]
impl<T: FtHttpClient + 'static> AccountService for Client<T> {
    async fn list_accounts(&self) -> Result<AccountList, AppError> {
        self.accounts.list_accounts().await
    }
}

#[async_trait]
impl<T: FtHttpClient + 'static> OrderService for Client<T> {
    async fn place_order(&self, request: &OrderRequest) -> Result<OrderConfirmation, AppError> {
        self.orders.place_order(request).await
    }

    async fn cancel_order(
        &self,
        account: &str,
        order_id: &str,
    ) -> Result<CancelReceipt, AppError> {
        self.orders.cancel_order(account, order_id).await
    }

    async fn get_orders_status(&self, account: &str) -> Result<Vec<OrderStatus>, AppError> {
        self.orders.get_orders_status(account).await
    }
}
