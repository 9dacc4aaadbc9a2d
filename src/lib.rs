/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Firstrade Client
//!
//! Unofficial asynchronous client for the Firstrade web interface.
//!
//! The site has no public API, so this crate drives the same forms a browser
//! submits and scrapes the HTML/XML fragments the site answers with:
//!
//! - Session establishment through the login and PIN forms, with optional
//!   reuse of a persisted cookie jar
//! - Account listing from the account summary page
//! - Order placement (preview or live), cancellation and status queries
//!
//! ## Usage
//!
//! ```ignore
//! use firstrade_client::prelude::*;
//!
//! setup_logger();
//! let client = Client::new(Config::new()).await?;
//!
//! let accounts = client.list_accounts().await?;
//! let request = OrderRequest::new(
//!     &accounts.accounts[0].number,
//!     "AAPL",
//!     PriceType::Limit,
//!     OrderType::Buy,
//!     1.0,
//!     Duration::Day,
//! )
//! .with_price(150.0);
//!
//! // Preview is the default, nothing is executed
//! let confirmation = client.place_order(&request).await?;
//! println!("{confirmation}");
//! ```

/// Application layer: configuration, services and the client facade
pub mod application;
/// Global constants: protocol markers and defaults
pub mod constants;
/// Error types
pub mod error;
/// Request/response models and the endpoint table
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Presentation models: accounts and orders as reported by the site
pub mod presentation;
/// Session establishment and the login state machine
pub mod session;
/// At-rest persistence of the session cookie jar
pub mod storage;
/// HTTP transport
pub mod transport;
/// Utilities: configuration helpers, logging and markup parsing
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
