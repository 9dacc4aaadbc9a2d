/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::order::{Duration, OrderType, PriceType};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Order to submit to the order bar
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    /// Account number the order is placed in
    pub account: String,
    /// Ticker symbol
    pub symbol: String,
    /// Pricing strategy
    pub price_type: PriceType,
    /// Direction
    pub order_type: OrderType,
    /// Number of shares, must be positive
    pub quantity: f64,
    /// Time in force
    pub duration: Duration,
    /// Limit/stop price, ignored for market orders
    pub price: f64,
    /// Preview only: the site computes the confirmation without executing
    pub dry_run: bool,
}

impl OrderRequest {
    /// Creates a preview request with a zero price
    pub fn new(
        account: &str,
        symbol: &str,
        price_type: PriceType,
        order_type: OrderType,
        quantity: f64,
        duration: Duration,
    ) -> Self {
        Self {
            account: account.to_string(),
            symbol: symbol.to_string(),
            price_type,
            order_type,
            quantity,
            duration,
            price: 0.0,
            dry_run: true,
        }
    }

    /// Sets the limit/stop price
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Chooses between preview (`true`) and live execution (`false`)
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Checks the request before anything is sent
    pub fn validate(&self) -> Result<(), AppError> {
        if self.account.trim().is_empty() {
            return Err(AppError::InvalidInput("account must not be empty".to_string()));
        }
        if self.symbol.trim().is_empty() {
            return Err(AppError::InvalidInput("symbol must not be empty".to_string()));
        }
        if !(self.quantity.is_finite() && self.quantity > 0.0) {
            return Err(AppError::InvalidInput(format!(
                "quantity must be positive, got {}",
                self.quantity
            )));
        }
        Ok(())
    }

    /// Value sent as `limitPrice`: empty for market orders
    pub fn limit_price(&self) -> String {
        match self.price_type {
            PriceType::Market => String::new(),
            _ => format_number(self.price),
        }
    }

    /// Builds the full order bar form
    ///
    /// The conditional-order fields are sent with their neutral values, the
    /// form is rejected without them.
    pub fn to_form(&self) -> Vec<(&'static str, String)> {
        let preview = if self.dry_run { "1" } else { "" };
        vec![
            ("submiturl", "/cgi-bin/orderbar".to_string()),
            ("orderbar_clordid", String::new()),
            ("orderbar_accountid", String::new()),
            ("stockorderpage", "yes".to_string()),
            ("submitOrders", "1".to_string()),
            ("previewOrders", preview.to_string()),
            ("lotMethod", "1".to_string()),
            ("accountType", "1".to_string()),
            ("quoteprice", String::new()),
            ("viewederror", String::new()),
            ("stocksubmittedcompanyname1", String::new()),
            ("accountId", self.account.clone()),
            ("transactionType", self.order_type.code().to_string()),
            ("quantity", format_number(self.quantity)),
            ("symbol", self.symbol.clone()),
            ("priceType", self.price_type.code().to_string()),
            ("limitPrice", self.limit_price()),
            ("duration", self.duration.code().to_string()),
            ("qualifier", "0".to_string()),
            ("cond_symbol0_0", String::new()),
            ("cond_type0_0", "2".to_string()),
            ("cond_compare_type0_0", "2".to_string()),
            ("cond_compare_value0_0", String::new()),
            ("cond_and_or0", "1".to_string()),
            ("cond_symbol0_1", String::new()),
            ("cond_type0_1", "2".to_string()),
            ("cond_compare_type0_1", "2".to_string()),
            ("cond_compare_value0_1", String::new()),
        ]
    }
}

/// Cancellation form
pub fn cancel_form(account: &str, order_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("accountId", account.to_string()),
        ("clordid", order_id.to_string()),
    ]
}

/// Status listing form
pub fn order_status_form(account: &str) -> Vec<(&'static str, String)> {
    vec![("page", "all".to_string()), ("accountId", account.to_string())]
}

// Whole numbers without a trailing ".0", as a browser would type them
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
