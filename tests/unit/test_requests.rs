use crate::common::{SESSION_OK_BODY, ScriptedTransport, form_value};
use firstrade_client::application::config::Credentials;
use firstrade_client::application::services::{OrderService, OrderServiceImpl};
use firstrade_client::error::AppError;
use firstrade_client::model::requests::OrderRequest;
use firstrade_client::presentation::order::{Duration, OrderType, PriceType};
use firstrade_client::session::{FtAuth, FtAuthenticator};
use firstrade_client::storage::MemoryCookieStore;
use firstrade_client::transport::http_client::FtHttpClient;
use std::sync::Arc;

const PREVIEW_BODY: &str = concat!(
    "<response><success>Yes</success><actiondata>",
    "&lt;table&gt;&lt;tr&gt;&lt;th&gt;Symbol&lt;/th&gt;&lt;/tr&gt;",
    "&lt;tr&gt;&lt;td&gt;AAPL&lt;/td&gt;&lt;/tr&gt;&lt;/table&gt;",
    "&lt;div id=&quot;P-77&quot; style=&quot;display:none&quot;&gt;&lt;/div&gt;",
    "</actiondata><errcode></errcode></response>"
);

async fn order_service(transport: Arc<ScriptedTransport>) -> OrderServiceImpl<ScriptedTransport> {
    let auth = FtAuth::new(transport, Arc::new(MemoryCookieStore::new()));
    let session = auth
        .establish(Credentials::new("jdoe", "pw", "1"), false)
        .await
        .unwrap();
    OrderServiceImpl::new(Arc::new(session))
}

#[tokio::test]
async fn test_market_order_sends_empty_limit_price() {
    let transport =
        Arc::new(ScriptedTransport::new(&[SESSION_OK_BODY]).with_post_body(PREVIEW_BODY));
    let service = order_service(transport.clone()).await;

    for price in [0.0, 12.5, 99999.0] {
        let request = OrderRequest::new(
            "AB1234",
            "AAPL",
            PriceType::Market,
            OrderType::Buy,
            5.0,
            Duration::Day,
        )
        .with_price(price);
        let confirmation = service.place_order(&request).await.unwrap();
        assert_eq!(confirmation.order_id(), Some("P-77"));
    }

    let posts = transport.posts_to(&transport.endpoints().orderbar());
    assert_eq!(posts.len(), 3);
    for post in &posts {
        assert_eq!(form_value(post, "limitPrice"), Some(""));
        assert_eq!(form_value(post, "priceType"), Some("1"));
        assert_eq!(form_value(post, "previewOrders"), Some("1"));
        assert_eq!(form_value(post, "accountId"), Some("AB1234"));
        assert_eq!(form_value(post, "cond_and_or0"), Some("1"));
    }
}

#[tokio::test]
async fn test_invalid_quantity_sends_nothing() {
    let transport = Arc::new(ScriptedTransport::new(&[SESSION_OK_BODY]));
    let service = order_service(transport.clone()).await;

    let request = OrderRequest::new(
        "AB1234",
        "AAPL",
        PriceType::Limit,
        OrderType::Buy,
        -1.0,
        Duration::Day,
    );
    let result = service.place_order(&request).await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert!(transport.posts_to(&transport.endpoints().orderbar()).is_empty());
}

#[tokio::test]
async fn test_cancel_order_is_best_effort() {
    let transport = Arc::new(
        ScriptedTransport::new(&[SESSION_OK_BODY]).with_post_body("<html>whatever</html>"),
    );
    let service = order_service(transport.clone()).await;

    let receipt = service.cancel_order("AB1234", "ORD-9").await.unwrap();

    assert_eq!(receipt.order_id, "ORD-9");
    assert_eq!(receipt.account, "AB1234");
    assert_eq!(receipt.response, "<html>whatever</html>");
    let posts = transport.posts_to(&transport.endpoints().cxlorder());
    assert_eq!(posts.len(), 1);
    assert_eq!(form_value(&posts[0], "clordid"), Some("ORD-9"));
    assert_eq!(form_value(&posts[0], "accountId"), Some("AB1234"));
}

#[tokio::test]
async fn test_orders_status_posts_list_all() {
    let transport = Arc::new(
        ScriptedTransport::new(&[SESSION_OK_BODY])
            .with_post_body(r#"<orderstatus><status><input name="a" value="1"></status></orderstatus>"#),
    );
    let service = order_service(transport.clone()).await;

    let statuses = service.get_orders_status("AB1234").await.unwrap();

    assert_eq!(statuses.len(), 1);
    let posts = transport.posts_to(&transport.endpoints().get_xml());
    assert_eq!(posts.len(), 1);
    assert_eq!(form_value(&posts[0], "page"), Some("all"));
    assert_eq!(form_value(&posts[0], "accountId"), Some("AB1234"));
}
