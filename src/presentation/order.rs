/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::ORDER_REJECTED;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pricing strategy of an order
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceType {
    /// Executed immediately at the current market price
    Market,
    /// Executed at the limit price or better
    #[default]
    Limit,
    /// Becomes a market order once the stop price trades
    Stop,
    /// Becomes a limit order once the stop price trades
    StopLimit,
    /// Stop trailing the market by a dollar amount
    TrailingStopDollar,
    /// Stop trailing the market by a percentage
    TrailingStopPercent,
}

impl PriceType {
    /// Code the order form expects
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            PriceType::Market => "1",
            PriceType::Limit => "2",
            PriceType::Stop => "3",
            PriceType::StopLimit => "4",
            PriceType::TrailingStopDollar => "5",
            PriceType::TrailingStopPercent => "6",
        }
    }
}

/// Time in force of an order
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Duration {
    /// Valid for the regular session of the day
    #[default]
    Day,
    /// Good for 90 days
    Gt90,
    /// Pre-market session only
    PreMarket,
    /// After-market session only
    AfterMarket,
    /// Day including the extended sessions
    DayExt,
}

impl Duration {
    /// Code the order form expects
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Duration::Day => "0",
            Duration::Gt90 => "1",
            Duration::PreMarket => "A",
            Duration::AfterMarket => "P",
            Duration::DayExt => "D",
        }
    }
}

/// Direction of an order
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Buy to open a long position
    #[default]
    Buy,
    /// Sell a long position
    Sell,
    /// Sell borrowed shares
    SellShort,
    /// Buy back a short position
    BuyToCover,
}

impl OrderType {
    /// Code the order form expects
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            OrderType::Buy => "B",
            OrderType::Sell => "S",
            OrderType::SellShort => "SS",
            OrderType::BuyToCover => "BC",
        }
    }
}

/// Outcome of an order submission as reported by the site
///
/// Whether the order was previewed or executed depends on the request; the
/// site reports both the same way.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderConfirmation {
    /// The site accepted the order (or the preview)
    Accepted {
        /// Raw `<success>` value, usually `Yes`
        success: String,
        /// Confirmation table, header → cell
        fields: HashMap<String, String>,
        /// Order reference (live) or preview id
        order_id: String,
        /// Raw `<errcode>` value
        errcode: String,
    },
    /// The site refused the order
    Rejected {
        /// Raw action text explaining the refusal
        actiondata: String,
        /// Raw `<errcode>` value
        errcode: String,
    },
}

impl OrderConfirmation {
    /// True for [`OrderConfirmation::Accepted`]
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, OrderConfirmation::Accepted { .. })
    }

    /// The raw `<success>` value
    #[must_use]
    pub fn success(&self) -> &str {
        match self {
            OrderConfirmation::Accepted { success, .. } => success,
            OrderConfirmation::Rejected { .. } => ORDER_REJECTED,
        }
    }

    /// Order id, only for accepted orders
    #[must_use]
    pub fn order_id(&self) -> Option<&str> {
        match self {
            OrderConfirmation::Accepted { order_id, .. } => Some(order_id),
            OrderConfirmation::Rejected { .. } => None,
        }
    }

    /// Confirmation table cell for `header`, only for accepted orders
    #[must_use]
    pub fn field(&self, header: &str) -> Option<&str> {
        match self {
            OrderConfirmation::Accepted { fields, .. } => fields.get(header).map(String::as_str),
            OrderConfirmation::Rejected { .. } => None,
        }
    }

    /// The raw `<errcode>` value
    #[must_use]
    pub fn errcode(&self) -> &str {
        match self {
            OrderConfirmation::Accepted { errcode, .. }
            | OrderConfirmation::Rejected { errcode, .. } => errcode,
        }
    }
}

/// One order as reported by the status listing: input name → value
pub type OrderStatus = HashMap<String, String>;

/// Receipt of a cancellation request
///
/// Best-effort: the site's answer to a cancellation is not validated, so a
/// receipt only proves the request was delivered. Confirm through
/// `get_orders_status` when it matters.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CancelReceipt {
    /// Account the order belongs to
    pub account: String,
    /// Order the cancellation was requested for
    pub order_id: String,
    /// Unparsed response body
    pub response: String,
}
