use crate::common::{SESSION_OK_BODY, ScriptedTransport};
use firstrade_client::application::config::Credentials;
use firstrade_client::application::services::{AccountService, AccountServiceImpl};
use firstrade_client::presentation::account::{Account, parse_account_list};
use firstrade_client::session::{FtAuth, FtAuthenticator};
use firstrade_client::storage::MemoryCookieStore;
use std::sync::Arc;
use tokio_test::block_on;

const SUMMARY_PAGE: &str = concat!(
    "<table>",
    r#"<tr><th><a href="/cgi-bin/main?acct=AB1234">AB1234-IRA JOHN DOE</a></th><td>1,234.56</td></tr>"#,
    r#"<tr><th>Total</th><td>9,999.99</td></tr>"#,
    r#"<tr><th><a href="/cgi-bin/main?acct=CD5678">CD5678-Individual JANE ROE</a></th><td>250</td></tr>"#,
    r##"<tr><th><a href="#">broken row</a></th><td>1.00</td></tr>"##,
    "</table>"
);

#[test]
fn test_parse_account_list_in_page_order() {
    let accounts = parse_account_list(SUMMARY_PAGE);
    assert_eq!(
        accounts,
        vec![
            Account {
                number: "AB1234".to_string(),
                account_type: "IRA".to_string(),
                owner: "JOHNDOE".to_string(),
                balance: 1234.56,
            },
            Account {
                number: "CD5678".to_string(),
                account_type: "Individual".to_string(),
                owner: "JANEROE".to_string(),
                balance: 250.0,
            },
        ]
    );
}

#[test]
fn test_parse_account_list_without_rows() {
    assert!(parse_account_list("<html><body>No accounts</body></html>").is_empty());
}

#[test]
fn test_account_service_lists_accounts() {
    let transport = Arc::new(ScriptedTransport::new(&[SESSION_OK_BODY]));
    let auth = FtAuth::new(transport.clone(), Arc::new(MemoryCookieStore::new()));
    let session = block_on(auth.establish(Credentials::new("jdoe", "pw", "1"), false)).unwrap();
    let service = AccountServiceImpl::new(Arc::new(session));

    // The scripted transport answers GETs outside the probe with an empty page
    let accounts = block_on(service.list_accounts()).unwrap();
    assert!(accounts.is_empty());
    assert_eq!(accounts.total_balance(), 0.0);
}
