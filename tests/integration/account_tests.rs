use crate::common::logged_in_client;
use firstrade_client::application::services::AccountService;
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_list_accounts() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let page = concat!(
        "<html><body><table>",
        r#"<tr><th><a href="/cgi-bin/main?a=1">90011234-Margin JOHN Q PUBLIC</a></th><td>12,500.75</td></tr>"#,
        r#"<tr><th><a href="/cgi-bin/main?a=2">90015678-IRA JOHN PUBLIC</a></th><td>0.00</td></tr>"#,
        "</table></body></html>"
    );
    let summary = server
        .mock("GET", "/cgi-bin/getaccountlist")
        .match_header("cookie", Matcher::Regex("sid=fresh".to_string()))
        .with_body(page)
        .create_async()
        .await;

    let accounts = client.list_accounts().await.unwrap();

    summary.assert_async().await;
    assert_eq!(accounts.numbers(), vec!["90011234", "90015678"]);
    let margin = accounts.find("90011234").unwrap();
    assert_eq!(margin.account_type, "Margin");
    assert_eq!(margin.owner, "JOHNQ");
    assert_eq!(margin.balance, 12500.75);
    assert_eq!(accounts.total_balance(), 12500.75);
}

#[tokio::test]
async fn test_list_accounts_empty_page() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;
    server
        .mock("GET", "/cgi-bin/getaccountlist")
        .with_body("<html><body>No accounts</body></html>")
        .create_async()
        .await;

    let accounts = client.list_accounts().await.unwrap();
    assert!(accounts.is_empty());
}
