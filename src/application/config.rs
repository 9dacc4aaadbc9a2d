use crate::constants::{DEFAULT_BASE_URL, DEFAULT_COOKIE_FILE};
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Login credentials for the Firstrade web interface
pub struct Credentials {
    /// Login username
    pub username: String,
    /// Login password, never serialized
    #[serde(skip_serializing)]
    pub password: String,
    /// Account PIN asked for after the password, never serialized
    #[serde(skip_serializing)]
    pub pin: String,
}

impl Credentials {
    /// Creates a new set of credentials
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        pin: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            pin: pin.into(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration of the HTTP transport
pub struct RestApiConfig {
    /// Base URL of the web interface, every endpoint is derived from it
    pub base_url: String,
    /// Optional request timeout in seconds; `None` keeps the HTTP client default
    pub timeout: Option<u64>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration of session persistence
pub struct SessionConfig {
    /// Save the cookie jar after a fresh successful login
    pub persistent: bool,
    /// File holding the persisted cookie jar
    pub cookie_file: PathBuf,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Firstrade client
pub struct Config {
    /// Login credentials
    pub credentials: Credentials,
    /// Transport configuration
    pub rest_api: RestApiConfig,
    /// Session persistence configuration
    pub session: SessionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment and an optional `.env` file
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `FT_USERNAME` | `default_username` |
    /// | `FT_PASSWORD` | `default_password` |
    /// | `FT_PIN` | `default_pin` |
    /// | `FT_BASE_URL` | `https://invest.firstrade.com` |
    /// | `FT_REST_TIMEOUT` | unset |
    /// | `FT_PERSISTENT_SESSION` | `false` |
    /// | `FT_COOKIE_FILE` | `ft_cookies.json` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("FT_USERNAME", String::from("default_username"));
        let password = get_env_or_default("FT_PASSWORD", String::from("default_password"));
        let pin = get_env_or_default("FT_PIN", String::from("default_pin"));

        if username == "default_username" {
            error!("FT_USERNAME not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("FT_PASSWORD not found in environment variables or .env file");
        }
        if pin == "default_pin" {
            error!("FT_PIN not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                username,
                password,
                pin,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("FT_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_none("FT_REST_TIMEOUT"),
            },
            session: SessionConfig {
                persistent: get_env_flag("FT_PERSISTENT_SESSION", false),
                cookie_file: PathBuf::from(get_env_or_default(
                    "FT_COOKIE_FILE",
                    String::from(DEFAULT_COOKIE_FILE),
                )),
            },
        }
    }

    /// Builds a configuration from explicit values, ignoring the environment
    pub fn with_credentials(credentials: Credentials, base_url: &str) -> Self {
        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: None,
            },
            session: SessionConfig {
                persistent: false,
                cookie_file: PathBuf::from(DEFAULT_COOKIE_FILE),
            },
        }
    }

    /// Enables cookie persistence into the given file
    #[must_use]
    pub fn persistent(mut self, cookie_file: impl Into<PathBuf>) -> Self {
        self.session.persistent = true;
        self.session.cookie_file = cookie_file.into();
        self
    }
}
