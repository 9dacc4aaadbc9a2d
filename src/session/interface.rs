use crate::application::config::Credentials;
use crate::error::AppError;
use crate::model::endpoints::Endpoints;
use crate::session::state::{LoginState, ProbeOutcome};
use crate::storage::CookieMap;
use crate::transport::http_client::FtHttpClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Authenticated session against the Firstrade web interface
///
/// Only [`FtAuthenticator::establish`] hands these out, so holding one means
/// the site accepted the transport's cookie jar when it was built.
pub struct FtSession<T: FtHttpClient> {
    transport: Arc<T>,
    credentials: Credentials,
    persistent: bool,
    reused_cookies: bool,
}

impl<T: FtHttpClient> FtSession<T> {
    pub(crate) fn new(
        transport: Arc<T>,
        credentials: Credentials,
        persistent: bool,
        reused_cookies: bool,
    ) -> Self {
        Self {
            transport,
            credentials,
            persistent,
            reused_cookies,
        }
    }

    /// Transport carrying the authenticated cookie jar
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Endpoint table of the transport
    pub fn endpoints(&self) -> &Endpoints {
        self.transport.endpoints()
    }

    /// Credentials the session was established with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Whether the cookie jar is persisted after a fresh login
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// True when persisted cookies were accepted and no login was needed
    pub fn reused_cookies(&self) -> bool {
        self.reused_cookies
    }

    /// Login state the session ended in, always [`LoginState::Validated`]
    pub fn state(&self) -> LoginState {
        LoginState::Validated
    }

    /// Snapshot of the authenticated cookie jar
    pub fn cookies(&self) -> CookieMap {
        self.transport.cookies()
    }

    /// Probes the session status endpoint again
    ///
    /// Useful for long-lived processes: the site expires idle sessions and
    /// this reports it without attempting a new login.
    pub async fn probe(&self) -> Result<ProbeOutcome, AppError> {
        let (status, body) = self
            .transport
            .get_with_status(&self.endpoints().get_xml())
            .await?;
        let outcome = ProbeOutcome::from_response(status, &body)?;
        debug!("Session probe: {}", outcome);
        Ok(outcome)
    }
}

/// Drives the login protocol and produces authenticated sessions
#[async_trait]
pub trait FtAuthenticator<T: FtHttpClient>: Send + Sync {
    /// Establishes an authenticated session
    ///
    /// Persisted cookies are tried first; when the site rejects them a full
    /// login (password then PIN) is performed. With `persistent`, the jar of a
    /// fresh, confirmed login is saved.
    ///
    /// # Errors
    /// * [`AppError::Authentication`] when the site still reports a failed
    ///   session after the full login
    /// * any transport error, unchanged
    async fn establish(
        &self,
        credentials: Credentials,
        persistent: bool,
    ) -> Result<FtSession<T>, AppError>;
}
