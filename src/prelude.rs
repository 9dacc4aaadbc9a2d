/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Firstrade Client Prelude
//!
//! Brings the commonly used types and traits into scope.
//!
//! ```rust
//! use firstrade_client::prelude::*;
//!
//! let request = OrderRequest::new(
//!     "A1234567",
//!     "AAPL",
//!     PriceType::Market,
//!     OrderType::Buy,
//!     1.0,
//!     Duration::Day,
//! );
//! assert!(request.dry_run);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the client
pub use crate::application::config::{Config, Credentials, RestApiConfig, SessionConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, FtResult};

// ============================================================================
// SESSION AND TRANSPORT
// ============================================================================

/// Session establishment
pub use crate::session::{
    FtAuth, FtAuthenticator, FtSession, LoginEvent, LoginState, ProbeOutcome,
};

/// HTTP transport
pub use crate::transport::http_client::{FtHttpClient, FtHttpClientImpl};

/// Endpoint table
pub use crate::model::endpoints::Endpoints;

/// Cookie jar persistence
pub use crate::storage::{CookieMap, CookieStore, FileCookieStore, MemoryCookieStore};

// ============================================================================
// SERVICES
// ============================================================================

/// Client facade
pub use crate::application::client::Client;

/// Service traits and implementations
pub use crate::application::services::{
    AccountService, AccountServiceImpl, OrderService, OrderServiceImpl,
};

// ============================================================================
// MODELS
// ============================================================================

/// Accounts
pub use crate::presentation::account::{Account, AccountList, parse_account_list};

/// Orders
pub use crate::presentation::order::{
    CancelReceipt, Duration, OrderConfirmation, OrderStatus, OrderType, PriceType,
};

/// Order requests
pub use crate::model::requests::OrderRequest;

/// Response parsers
pub use crate::model::responses::{parse_order_confirmation, parse_order_statuses};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
