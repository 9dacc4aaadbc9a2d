use crate::common::{
    LoginMocks, SESSION_FAILED_BODY, authenticated_probe, credentials, test_config,
};
use assert_json_diff::assert_json_eq;
use firstrade_client::application::client::Client;
use firstrade_client::error::AppError;
use firstrade_client::session::{FtAuth, FtAuthenticator};
use firstrade_client::storage::{CookieStore, FileCookieStore, MemoryCookieStore};
use firstrade_client::transport::http_client::{FtHttpClient, FtHttpClientImpl};
use mockito::{Matcher, Server};
use serde_json::json;
use std::fs;
use std::sync::Arc;

#[tokio::test]
async fn test_fresh_login_persists_cookies() {
    let mut server = Server::new_async().await;
    let mocks = LoginMocks::create(&mut server).await;

    let dir = tempfile::tempdir().unwrap();
    let cookie_file = dir.path().join("ft_cookies.json");
    let config = test_config(&server).persistent(&cookie_file);

    let client = Client::new(config).await.unwrap();

    assert!(!client.session().reused_cookies());
    assert!(client.session().is_persistent());
    mocks.anonymous_probe.assert_async().await;
    mocks.login_page.assert_async().await;
    mocks.login_post.assert_async().await;
    mocks.pin_post.assert_async().await;
    mocks.session_probe.assert_async().await;

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&cookie_file).unwrap()).unwrap();
    assert_json_eq!(written, json!({"sid": "fresh"}));
}

#[tokio::test]
async fn test_persisted_cookies_skip_login() {
    let mut server = Server::new_async().await;
    let probe = authenticated_probe(&mut server).await;
    let login = server
        .mock("POST", "/cgi-bin/login")
        .expect(0)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let cookie_file = dir.path().join("ft_cookies.json");
    fs::write(&cookie_file, r#"{"sid": "fresh"}"#).unwrap();

    let client = Client::new(test_config(&server).persistent(&cookie_file))
        .await
        .unwrap();

    assert!(client.session().reused_cookies());
    assert_eq!(
        client.session().cookies().get("sid").map(String::as_str),
        Some("fresh")
    );
    probe.assert_async().await;
    login.assert_async().await;
}

#[tokio::test]
async fn test_stale_cookies_fall_back_to_login() {
    let mut server = Server::new_async().await;
    let stale_probe = server
        .mock("GET", "/cgi-bin/getxml")
        .match_header("cookie", Matcher::Regex("sid=stale".to_string()))
        .with_body(SESSION_FAILED_BODY)
        .create_async()
        .await;
    let login_page = server
        .mock("GET", "/cgi-bin/login")
        .with_body("<html></html>")
        .create_async()
        .await;
    let login_post = server
        .mock("POST", "/cgi-bin/login")
        .with_header("set-cookie", "sid=fresh; Path=/")
        .create_async()
        .await;
    let pin_post = server
        .mock("POST", Matcher::Regex(r"^/cgi-bin/enter_pin".to_string()))
        .create_async()
        .await;
    let fresh_probe = authenticated_probe(&mut server).await;

    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileCookieStore::new(dir.path().join("jar.json")));
    store
        .save(&[("sid".to_string(), "stale".to_string())].into_iter().collect())
        .unwrap();

    let config = test_config(&server);
    let transport = Arc::new(FtHttpClientImpl::new(&config.rest_api).unwrap());
    let auth = FtAuth::new(transport, store.clone());
    let session = auth.establish(credentials(), true).await.unwrap();

    assert!(!session.reused_cookies());
    assert_eq!(store.load().get("sid").map(String::as_str), Some("fresh"));
    stale_probe.assert_async().await;
    login_page.assert_async().await;
    login_post.assert_async().await;
    pin_post.assert_async().await;
    fresh_probe.assert_async().await;
}

#[tokio::test]
async fn test_rejected_credentials() {
    let mut server = Server::new_async().await;
    let probe = server
        .mock("GET", "/cgi-bin/getxml")
        .with_body(SESSION_FAILED_BODY)
        .expect(2)
        .create_async()
        .await;
    server
        .mock("GET", "/cgi-bin/login")
        .create_async()
        .await;
    server
        .mock("POST", "/cgi-bin/login")
        .with_body("<html>invalid login</html>")
        .create_async()
        .await;
    server
        .mock("POST", Matcher::Regex(r"^/cgi-bin/enter_pin".to_string()))
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let cookie_file = dir.path().join("ft_cookies.json");
    let result = Client::new(test_config(&server).persistent(&cookie_file)).await;

    assert!(matches!(result, Err(AppError::Authentication(_))));
    assert!(!cookie_file.exists());
    probe.assert_async().await;
}

#[tokio::test]
async fn test_server_error_during_probe() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/cgi-bin/getxml")
        .with_status(503)
        .create_async()
        .await;

    let config = test_config(&server);
    let transport = Arc::new(FtHttpClientImpl::new(&config.rest_api).unwrap());
    let result =
        Client::with_transport(transport, Arc::new(MemoryCookieStore::new()), config).await;

    match result {
        Err(AppError::Unexpected(status)) => assert_eq!(status.as_u16(), 503),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("login should not succeed"),
    }
}

#[tokio::test]
async fn test_session_failed_page_with_error_status_leads_to_login() {
    let mut server = Server::new_async().await;
    let mocks = LoginMocks::with_probe_status(&mut server, 401).await;

    let client = Client::new(test_config(&server)).await.unwrap();

    assert!(!client.session().reused_cookies());
    mocks.anonymous_probe.assert_async().await;
    mocks.login_post.assert_async().await;
    mocks.pin_post.assert_async().await;
    mocks.session_probe.assert_async().await;
}

#[tokio::test]
async fn test_browser_headers_are_sent() {
    let mut server = Server::new_async().await;
    let probe = server
        .mock("GET", "/cgi-bin/getxml")
        .match_header("accept-language", "en-US,en;q=0.9")
        .match_header("upgrade-insecure-requests", "1")
        .match_header("user-agent", Matcher::Regex("Chrome".to_string()))
        .match_header("referer", Matcher::Regex("/cgi-bin/main$".to_string()))
        .with_body("<response/>")
        .create_async()
        .await;

    let config = test_config(&server);
    let transport = FtHttpClientImpl::new(&config.rest_api).unwrap();
    let body = transport.get(&transport.endpoints().get_xml()).await.unwrap();

    assert_eq!(body, "<response/>");
    probe.assert_async().await;
}
