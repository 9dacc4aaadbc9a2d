/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Login protocol as an explicit state machine.
//!
//! ```text
//! Unvalidated --CookiesLoaded--> CookieCheck --Probed(Authenticated)--> Validated
//!                                     |
//!                            Probed(SessionFailed)
//!                                     v
//!                                 LoginForm --CredentialsSubmitted--> PinForm
//!                                                                       |
//!                               Validated <--Probed(Authenticated)------+
//!                               Failed    <--Probed(SessionFailed)------+
//! ```
//!
//! Transitions are pure so the protocol can be exercised without a server.

use crate::constants::SESSION_FAILED_MARKER;
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// State of the login protocol
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoginState {
    /// Nothing known yet, persisted cookies not loaded
    #[default]
    Unvalidated,
    /// Persisted cookies installed, waiting for the session probe
    CookieCheck,
    /// Cookies rejected, username and password must be submitted
    LoginForm,
    /// Password accepted, PIN submitted, waiting for the confirming probe
    PinForm,
    /// The site accepts the cookie jar
    Validated,
    /// A full login still ended on the session-failed page
    Failed,
}

/// Result of probing the session status endpoint
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProbeOutcome {
    /// No sentinel in the response
    Authenticated,
    /// The response carries the session-failed sentinel
    SessionFailed,
}

impl ProbeOutcome {
    /// Classifies a probe response body
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        if body.contains(SESSION_FAILED_MARKER) {
            ProbeOutcome::SessionFailed
        } else {
            ProbeOutcome::Authenticated
        }
    }

    /// Classifies a probe response of any status
    ///
    /// The sentinel decides even on an error status. An error status without
    /// it is [`AppError::Unexpected`].
    pub fn from_response(status: StatusCode, body: &str) -> Result<Self, AppError> {
        match Self::from_body(body) {
            ProbeOutcome::SessionFailed => Ok(ProbeOutcome::SessionFailed),
            ProbeOutcome::Authenticated if status.is_success() => Ok(ProbeOutcome::Authenticated),
            ProbeOutcome::Authenticated => Err(AppError::Unexpected(status)),
        }
    }
}

/// Something that happened while driving the login protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginEvent {
    /// The persisted jar (possibly empty) was installed in the transport
    CookiesLoaded,
    /// The session probe answered
    Probed(ProbeOutcome),
    /// Username and password were posted
    CredentialsSubmitted,
}

impl LoginState {
    /// Next state for `event`; pairs that make no sense leave the state unchanged
    #[must_use]
    pub fn next(self, event: LoginEvent) -> LoginState {
        use LoginEvent::*;
        use LoginState::*;
        use ProbeOutcome::*;

        match (self, event) {
            (Unvalidated, CookiesLoaded) => CookieCheck,
            (CookieCheck, Probed(Authenticated)) => Validated,
            (CookieCheck, Probed(SessionFailed)) => LoginForm,
            (LoginForm, CredentialsSubmitted) => PinForm,
            (PinForm, Probed(Authenticated)) => Validated,
            (PinForm, Probed(SessionFailed)) => Failed,
            (state, event) => {
                warn!("Ignoring login event {:?} in state {}", event, state);
                state
            }
        }
    }

    /// True for `Validated` and `Failed`
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, LoginState::Validated | LoginState::Failed)
    }
}
