/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::interfaces::order::OrderService;
use crate::error::AppError;
use crate::model::requests::{OrderRequest, cancel_form, order_status_form};
use crate::model::responses::{parse_order_confirmation, parse_order_statuses};
use crate::presentation::order::{CancelReceipt, OrderConfirmation, OrderStatus};
use crate::session::interface::FtSession;
use crate::transport::http_client::FtHttpClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Implementation of the order service
pub struct OrderServiceImpl<T: FtHttpClient> {
    session: Arc<FtSession<T>>,
}

impl<T: FtHttpClient> OrderServiceImpl<T> {
    /// Creates a new instance of the order service
    pub fn new(session: Arc<FtSession<T>>) -> Self {
        Self { session }
    }

    /// Gets the session the service runs on
    pub fn get_session(&self) -> Arc<FtSession<T>> {
        self.session.clone()
    }
}

#[async_trait]
impl<T: FtHttpClient + 'static> OrderService for OrderServiceImpl<T> {
    async fn place_order(&self, request: &OrderRequest) -> Result<OrderConfirmation, AppError> {
        request.validate()?;
        info!(
            "Placing {} {} order: {} {} x {} in {}",
            if request.dry_run { "preview" } else { "live" },
            request.price_type,
            request.order_type,
            request.symbol,
            request.quantity,
            request.account
        );

        let body = self
            .session
            .transport()
            .post_form(&self.session.endpoints().orderbar(), &request.to_form())
            .await?;
        let confirmation = parse_order_confirmation(&body, request.dry_run)?;

        match &confirmation {
            OrderConfirmation::Accepted { order_id, .. } => {
                info!("Order accepted: {}", order_id)
            }
            OrderConfirmation::Rejected { errcode, .. } => {
                warn!("Order rejected, errcode {:?}", errcode)
            }
        }
        Ok(confirmation)
    }

    async fn cancel_order(
        &self,
        account: &str,
        order_id: &str,
    ) -> Result<CancelReceipt, AppError> {
        info!("Cancelling order {} in {}", order_id, account);

        let response = self
            .session
            .transport()
            .post_form(
                &self.session.endpoints().cxlorder(),
                &cancel_form(account, order_id),
            )
            .await?;

        warn!(
            "Cancellation of order {} sent; the site's acknowledgement is not verified",
            order_id
        );
        Ok(CancelReceipt {
            account: account.to_string(),
            order_id: order_id.to_string(),
            response,
        })
    }

    async fn get_orders_status(&self, account: &str) -> Result<Vec<OrderStatus>, AppError> {
        info!("Getting order status for {}", account);

        let body = self
            .session
            .transport()
            .post_form(
                &self.session.endpoints().get_xml(),
                &order_status_form(account),
            )
            .await?;
        let statuses = parse_order_statuses(&body)?;

        debug!("Order status obtained: {} orders", statuses.len());
        Ok(statuses)
    }
}
