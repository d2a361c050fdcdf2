//! GitHub connectivity check.
//!
//! # Responsibility
//! - Perform the authenticated user-identity request that validates a
//!   stored token.
//!
//! # Invariants
//! - The check never mutates the note store; failure is terminal at the
//!   call site and is not retried.
//! - Success is defined purely by an HTTP success status.

use crate::config::settings::BackupConfig;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Fixed user-identity endpoint used for the token check.
pub const USER_ENDPOINT: &str = "https://api.github.com/user";

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub type ConnectivityResult<T> = Result<T, ConnectivityError>;

/// Connectivity check failure.
#[derive(Debug)]
pub enum ConnectivityError {
    /// Username or token is missing from the configuration.
    MissingCredentials,
    /// The request never produced an HTTP response.
    Transport(reqwest::Error),
    /// The service answered with a non-success status.
    AuthFailed { status: u16 },
}

impl Display for ConnectivityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredentials => write!(f, "username and token are required"),
            Self::Transport(err) => write!(f, "connection test failed: {err}"),
            Self::AuthFailed { status } => {
                write!(f, "connection test rejected with status {status}")
            }
        }
    }
}

impl Error for ConnectivityError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ConnectivityError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Verifies that the stored token authenticates against the service.
///
/// Sends one authenticated GET to [`USER_ENDPOINT`]; success iff the status
/// is in the 2xx range.
pub fn check_connection(config: &BackupConfig) -> ConnectivityResult<()> {
    if !config.has_credentials() {
        return Err(ConnectivityError::MissingCredentials);
    }

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("quillnote/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let response = client
        .get(USER_ENDPOINT)
        .header("Authorization", format!("token {}", config.token.trim()))
        .header("Accept", ACCEPT_HEADER)
        .send()?;

    let status = response.status();
    if status.is_success() {
        info!("event=connectivity_check module=remote status=ok");
        Ok(())
    } else {
        warn!(
            "event=connectivity_check module=remote status=error http_status={}",
            status.as_u16()
        );
        Err(ConnectivityError::AuthFailed {
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{check_connection, ConnectivityError};
    use crate::config::settings::BackupConfig;

    #[test]
    fn missing_credentials_fail_before_any_request() {
        let config = BackupConfig::default();
        let err = check_connection(&config).unwrap_err();
        assert!(matches!(err, ConnectivityError::MissingCredentials));
    }

    #[test]
    fn whitespace_credentials_do_not_count() {
        let config = BackupConfig {
            username: "  ".into(),
            token: "\t".into(),
            ..BackupConfig::default()
        };
        let err = check_connection(&config).unwrap_err();
        assert!(matches!(err, ConnectivityError::MissingCredentials));
    }
}
