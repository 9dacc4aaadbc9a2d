/// Session establishment over the login and PIN forms
pub mod auth;
/// Authenticated session handle and the authenticator trait
pub mod interface;
/// Login protocol state machine
pub mod state;

pub use auth::FtAuth;
pub use interface::{FtAuthenticator, FtSession};
pub use state::{LoginEvent, LoginState, ProbeOutcome};
