// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Search(SearchRequestError),
}

/// Failure of a request against the image-search API.
///
/// Transport failures, non-success HTTP statuses and undecodable bodies all
/// collapse into this one type carrying a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequestError {
    message: String,
}

impl SearchRequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Error for a response whose HTTP status is not a success.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        Self::new(format!("Request failed with status code {status}"))
    }

    /// Error for a response body that does not match the expected shape.
    pub fn malformed(detail: impl fmt::Display) -> Self {
        Self::new(format!("Malformed response: {detail}"))
    }

    /// Returns the user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SearchRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<reqwest::Error> for SearchRequestError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_status(status.as_u16());
        }

        // The request URL carries the API key and must not reach the UI or logs.
        let err = err.without_url();
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::new(message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Search(e) => write!(f, "Search Error: {}", e),
        }
    }
}

impl From<SearchRequestError> for Error {
    fn from(err: SearchRequestError) -> Self {
        Error::Search(err)
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
    fn status_error_message_names_the_code() {
        let err = SearchRequestError::from_status(429);
        assert_eq!(err.message(), "Request failed with status code 429");
    }

    #[test]
    fn search_error_displays_bare_message() {
        let err = SearchRequestError::new("connection refused");
        assert_eq!(err.to_string(), "connection refused");

        let wrapped: Error = err.into();
        assert_eq!(wrapped.to_string(), "Search Error: connection refused");
    }

    #[test]
    fn malformed_error_keeps_detail() {
        let err = SearchRequestError::malformed("missing field `hits`");
        assert!(err.message().starts_with("Malformed response:"));
        assert!(err.message().contains("hits"));
    }
}
