/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Session establishment for the Firstrade web interface
//!
//! The site only offers browser forms, so login replays them in order:
//! - probe the session status page with any persisted cookies
//! - fetch the login page, post username and password
//! - post the PIN
//! - probe again to confirm

use crate::application::config::Credentials;
use crate::error::AppError;
use crate::session::interface::{FtAuthenticator, FtSession};
use crate::session::state::{LoginEvent, LoginState, ProbeOutcome};
use crate::storage::CookieStore;
use crate::transport::http_client::FtHttpClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Authentication manager driving the login state machine over a transport
pub struct FtAuth<T: FtHttpClient> {
    transport: Arc<T>,
    store: Arc<dyn CookieStore>,
}

impl<T: FtHttpClient> FtAuth<T> {
    /// Creates a manager over a fresh transport and a cookie store
    pub fn new(transport: Arc<T>, store: Arc<dyn CookieStore>) -> Self {
        Self { transport, store }
    }

    async fn probe(&self) -> Result<ProbeOutcome, AppError> {
        let (status, body) = self
            .transport
            .get_with_status(&self.transport.endpoints().get_xml())
            .await?;
        let outcome = ProbeOutcome::from_response(status, &body)?;
        debug!("Session probe: {}", outcome);
        Ok(outcome)
    }

    async fn submit_credentials(&self, credentials: &Credentials) -> Result<(), AppError> {
        let endpoints = self.transport.endpoints();
        // The login page hands out the cookies the form post is checked against
        self.transport.get(&endpoints.login()).await?;

        let form = [
            ("redirect", String::new()),
            ("ft_locale", "en-us".to_string()),
            ("login.x", "Log In".to_string()),
            ("username", credentials.username.clone()),
            ("password", credentials.password.clone()),
            ("destination_page", "home".to_string()),
        ];
        self.transport.post_form(&endpoints.login(), &form).await?;
        debug!("Credentials submitted for {}", credentials.username);
        Ok(())
    }

    async fn submit_pin(&self, credentials: &Credentials) -> Result<(), AppError> {
        let form = [
            ("destination_page", "home".to_string()),
            ("pin", credentials.pin.clone()),
            ("pin.x", "++OK++".to_string()),
            ("sring", "0".to_string()),
        ];
        self.transport
            .post_form(&self.transport.endpoints().pin(), &form)
            .await?;
        debug!("PIN submitted");
        Ok(())
    }
}

#[async_trait]
impl<T: FtHttpClient + 'static> FtAuthenticator<T> for FtAuth<T> {
    async fn establish(
        &self,
        credentials: Credentials,
        persistent: bool,
    ) -> Result<FtSession<T>, AppError> {
        let mut state = LoginState::Unvalidated;
        let mut fresh_login = false;

        while !state.is_terminal() {
            state = match state {
                LoginState::Unvalidated => {
                    let cookies = self.store.load();
                    self.transport.load_cookies(&cookies);
                    state.next(LoginEvent::CookiesLoaded)
                }
                LoginState::CookieCheck => {
                    let outcome = self.probe().await?;
                    if outcome == ProbeOutcome::Authenticated {
                        info!("Persisted session cookies accepted");
                    }
                    state.next(LoginEvent::Probed(outcome))
                }
                LoginState::LoginForm => {
                    info!("Logging in as {}", credentials.username);
                    self.submit_credentials(&credentials).await?;
                    fresh_login = true;
                    state.next(LoginEvent::CredentialsSubmitted)
                }
                LoginState::PinForm => {
                    self.submit_pin(&credentials).await?;
                    let outcome = self.probe().await?;
                    state.next(LoginEvent::Probed(outcome))
                }
                LoginState::Validated | LoginState::Failed => state,
            };
        }

        if state == LoginState::Failed {
            error!("Login failed for {}", credentials.username);
            return Err(AppError::Authentication(
                "login failed, check your credentials".to_string(),
            ));
        }

        if fresh_login && persistent {
            self.store.save(&self.transport.cookies())?;
        }

        info!("✓ Session established for {}", credentials.username);
        Ok(FtSession::new(
            self.transport.clone(),
            credentials,
            persistent,
            !fresh_login,
        ))
    }
}
