/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::config::RestApiConfig;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::endpoints::Endpoints;
use crate::storage::CookieMap;
use async_trait::async_trait;
use reqwest::cookie::{CookieStore as _, Jar};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Narrow HTTP capability the session and services depend on
///
/// Implementations own the cookie jar: cookies set by responses are kept and
/// sent back on later requests.
#[async_trait]
pub trait FtHttpClient: Send + Sync {
    /// GETs `url` and returns the body text
    async fn get(&self, url: &str) -> Result<String, AppError>;

    /// GETs `url` and returns the status with the body, whatever the status
    async fn get_with_status(&self, url: &str) -> Result<(StatusCode, String), AppError>;

    /// POSTs `form` url-encoded to `url` and returns the body text
    async fn post_form(&self, url: &str, form: &[(&str, String)]) -> Result<String, AppError>;

    /// Snapshot of the cookie jar
    fn cookies(&self) -> CookieMap;

    /// Adds the given cookies to the jar
    fn load_cookies(&self, cookies: &CookieMap);

    /// Endpoint table the transport was built for
    fn endpoints(&self) -> &Endpoints;
}

/// `reqwest` implementation of [`FtHttpClient`]
pub struct FtHttpClientImpl {
    client: Client,
    jar: Arc<Jar>,
    cookie_url: Url,
    endpoints: Endpoints,
}

impl FtHttpClientImpl {
    /// Creates a transport with an empty cookie jar
    pub fn new(config: &RestApiConfig) -> Result<Self, AppError> {
        let endpoints = Endpoints::new(&config.base_url);
        // Cookies without an explicit path are scoped to /cgi-bin, so the jar
        // is read through a URL under it.
        let cookie_url = Url::parse(&endpoints.get_xml()).map_err(|e| {
            AppError::InvalidInput(format!("invalid base url {}: {e}", config.base_url))
        })?;

        let jar = Arc::new(Jar::default());
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_provider(jar.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            client: builder.build()?,
            jar,
            cookie_url,
            endpoints,
        })
    }

    fn with_headers(&self, mut request: RequestBuilder) -> RequestBuilder {
        for (name, value) in self.endpoints.session_headers() {
            request = request.header(name, value);
        }
        request
    }

    async fn send(&self, request: RequestBuilder) -> Result<String, AppError> {
        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl FtHttpClient for FtHttpClientImpl {
    async fn get(&self, url: &str) -> Result<String, AppError> {
        debug!("GET {}", url);
        self.send(self.with_headers(self.client.get(url))).await
    }

    async fn get_with_status(&self, url: &str) -> Result<(StatusCode, String), AppError> {
        debug!("GET {}", url);
        let response = self.with_headers(self.client.get(url)).send().await?;
        let status = response.status();
        debug!("Response status: {}", status);
        Ok((status, response.text().await?))
    }

    async fn post_form(&self, url: &str, form: &[(&str, String)]) -> Result<String, AppError> {
        debug!("POST {} ({} fields)", url, form.len());
        self.send(self.with_headers(self.client.post(url)).form(form))
            .await
    }

    fn cookies(&self) -> CookieMap {
        let Some(header) = self.jar.cookies(&self.cookie_url) else {
            return CookieMap::new();
        };
        header
            .to_str()
            .map(parse_cookie_header)
            .unwrap_or_default()
    }

    fn load_cookies(&self, cookies: &CookieMap) {
        for (name, value) in cookies {
            self.jar
                .add_cookie_str(&format!("{name}={value}; Path=/"), &self.cookie_url);
        }
        debug!("Loaded {} cookies into the jar", cookies.len());
    }

    fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

/// Splits a `Cookie` request header (`a=1; b=2`) into a map
pub fn parse_cookie_header(header: &str) -> CookieMap {
    header
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            let name = name.trim();
            (!name.is_empty()).then(|| (name.to_string(), value.trim().to_string()))
        })
        .collect()
}
