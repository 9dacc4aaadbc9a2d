/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::USER_AGENT;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Table of the site's endpoints, derived from a base URL
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Creates the table for the given base URL (trailing slashes ignored)
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn cgi(&self, path: &str) -> String {
        format!("{}/cgi-bin/{}", self.base_url, path)
    }

    /// Session probe (GET) and order status listing (POST)
    pub fn get_xml(&self) -> String {
        self.cgi("getxml")
    }

    /// Login page (GET) and credentials submission (POST)
    pub fn login(&self) -> String {
        self.cgi("login")
    }

    /// PIN submission
    pub fn pin(&self) -> String {
        self.cgi("enter_pin?destination_page=home")
    }

    /// Account summary page
    pub fn account_list(&self) -> String {
        self.cgi("getaccountlist")
    }

    /// Order submission
    pub fn orderbar(&self) -> String {
        self.cgi("orderbar")
    }

    /// Order cancellation
    pub fn cxlorder(&self) -> String {
        self.cgi("cxlorder")
    }

    /// Fixed browser header profile sent with every request
    pub fn session_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("User-Agent", USER_AGENT.to_string()),
            (
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
            ),
            ("Accept-Language", "en-US,en;q=0.9".to_string()),
            ("Connection", "keep-alive".to_string()),
            ("Origin", self.base_url.clone()),
            ("Referer", format!("{}/cgi-bin/main", self.base_url)),
            ("Upgrade-Insecure-Requests", "1".to_string()),
        ]
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_BASE_URL)
    }
}
