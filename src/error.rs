// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Refresh(RefreshError),
}

/// Errors raised by the pull-refresh sequence.
///
/// The controller never retries or suppresses a failed callback; the error
/// is surfaced to whoever started the sequence while the state machine still
/// takes its normal reset path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshError {
    /// The caller-supplied refresh callback failed.
    CallbackFailed(String),
}

impl fmt::Display for RefreshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshError::CallbackFailed(msg) => write!(f, "Refresh callback failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Refresh(e) => write!(f, "Refresh Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}
impl std::error::Error for RefreshError {}

impl From<RefreshError> for Error {
    fn from(err: RefreshError) -> Self {
        Error::Refresh(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn refresh_error_carries_callback_message() {
        let err: Error = RefreshError::CallbackFailed("feed unavailable".into()).into();
        assert!(format!("{}", err).contains("feed unavailable"));
    }
}
