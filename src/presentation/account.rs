use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use pretty_simple_display::DisplaySimple;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

static ACCOUNT_ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<tr><th><a href=".*?">(.*?)</a></th><td>(.*?)</td></tr>"#)
        .expect("valid account row regex")
});

/// Account reachable by the session
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Account number
    pub number: String,
    /// Account type token, e.g. `IRA` or `Individual`
    pub account_type: String,
    /// Owner code, the owner name tokens joined without separator
    pub owner: String,
    /// Account value as shown on the summary page
    pub balance: f64,
}

impl Account {
    /// Builds an account from the anchor text and balance cell of a summary row
    ///
    /// The anchor reads `NUMBER-TYPE OWNER1 OWNER2`; `None` when it does not.
    pub fn from_row(label: &str, balance: &str) -> Option<Self> {
        let (number, rest) = label.split_once('-')?;
        let mut tokens = rest.split(' ');
        let account_type = tokens.next()?;
        let owner = format!("{}{}", tokens.next()?, tokens.next()?);
        let balance = balance.trim().replace(',', "").parse::<f64>().ok()?;

        Some(Self {
            number: number.to_string(),
            account_type: account_type.to_string(),
            owner,
            balance,
        })
    }
}

/// Accounts listed on the summary page, in page order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AccountList {
    /// Accounts in the order the page lists them
    pub accounts: Vec<Account>,
    /// When the summary page was fetched
    pub fetched_at: DateTime<Utc>,
}

impl AccountList {
    /// Wraps already parsed accounts, stamped with the current time
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts,
            fetched_at: Utc::now(),
        }
    }

    /// Account numbers in page order
    pub fn numbers(&self) -> Vec<&str> {
        self.accounts.iter().map(|a| a.number.as_str()).collect()
    }

    /// Looks an account up by number
    pub fn find(&self, number: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number == number)
    }

    /// Sum of all balances
    pub fn total_balance(&self) -> f64 {
        self.accounts.iter().map(|a| a.balance).sum()
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// True when the page listed no account
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// Parses the account summary page
///
/// Rows that do not have the expected shape are skipped silently.
pub fn parse_account_list(html: &str) -> Vec<Account> {
    ACCOUNT_ROW_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let account = Account::from_row(&caps[1], &caps[2]);
            if account.is_none() {
                debug!("Skipping account row {:?}", &caps[0]);
            }
            account
        })
        .collect()
}
