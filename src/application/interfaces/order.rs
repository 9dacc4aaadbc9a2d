use crate::error::AppError;
use crate::model::requests::OrderRequest;
use crate::presentation::order::{CancelReceipt, OrderConfirmation, OrderStatus};
use async_trait::async_trait;

#[async_trait]
/// Service for placing, cancelling and tracking orders through the order bar
///
/// Calls are independent: nothing from one call is kept for the next, so a
/// confirmation belongs to the caller that placed the order.
pub trait OrderService: Send + Sync {
    /// Submits an order, as a preview when `request.dry_run` is set
    ///
    /// # Errors
    /// * [`AppError::InvalidInput`] for a non-positive quantity, before any request
    /// * [`AppError::ResponseShape`] when the response lacks the expected tags
    async fn place_order(&self, request: &OrderRequest) -> Result<OrderConfirmation, AppError>;

    /// Requests the cancellation of an order
    ///
    /// Best-effort: the site's answer is returned unparsed in the receipt and
    /// is not checked. Only transport failures are reported.
    async fn cancel_order(&self, account: &str, order_id: &str)
    -> Result<CancelReceipt, AppError>;

    /// Lists the status of every order of an account, in the order the site reports them
    async fn get_orders_status(&self, account: &str) -> Result<Vec<OrderStatus>, AppError>;
}
