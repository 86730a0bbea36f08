//! Error types for lookups and configuration.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Status name used for network failures and non-success HTTP responses.
pub const STATUS_ERROR: &str = "error";
/// Status name used when a response body is not a valid split tree.
pub const STATUS_PARSE_ERROR: &str = "parsererror";

/// Why a lookup did not produce a tree.
///
/// `Display` is the exact text shown in the result area.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request never completed, or the server answered with a failure status.
    #[error("Error: {status}")]
    Transport {
        status: String,
        /// Message from the server's `{"err": ...}` body, when there was one.
        detail: Option<String>,
    },

    #[error("Error: parsererror")]
    Decode(#[from] serde_json::Error),

    #[error("Error: invalid word {0:?}")]
    InvalidWord(String),
}

#[derive(Deserialize)]
struct ServerErrorBody {
    err: String,
}

impl LookupError {
    /// A failure with no response to inspect.
    pub fn transport(status: impl Into<String>) -> Self {
        Self::Transport {
            status: status.into(),
            detail: None,
        }
    }

    /// A non-success HTTP response. The body is scanned for the server's
    /// `{"err": "..."}` message but never fails to decode.
    pub fn from_response(code: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ServerErrorBody>(body)
            .ok()
            .map(|b| b.err)
            .or_else(|| (code != 0).then(|| format!("HTTP {code}")));
        Self::Transport {
            status: STATUS_ERROR.to_string(),
            detail,
        }
    }

    /// The short status name, as XHR reports it.
    pub fn status(&self) -> &str {
        match self {
            Self::Transport { status, .. } => status,
            Self::Decode(_) => STATUS_PARSE_ERROR,
            Self::InvalidWord(_) => "invalid",
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Transport { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Failure to load a [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("max_definitions must be at least 1")]
    NoDefinitions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_display() {
        let err = LookupError::transport("error");
        assert_eq!(err.to_string(), "Error: error");
        assert_eq!(err.status(), "error");
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn test_from_response_reads_server_message() {
        let err = LookupError::from_response(400, r#"{"err":"Invalid input word"}"#);
        assert_eq!(err.to_string(), "Error: error");
        assert_eq!(err.detail(), Some("Invalid input word"));
    }

    #[test]
    fn test_from_response_without_json_body() {
        let err = LookupError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Error: error");
        assert_eq!(err.detail(), Some("HTTP 502"));
    }

    #[test]
    fn test_decode_display() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err = LookupError::from(json_err);
        assert_eq!(err.to_string(), "Error: parsererror");
        assert_eq!(err.status(), STATUS_PARSE_ERROR);
    }

    #[test]
    fn test_invalid_word_display() {
        let err = LookupError::InvalidWord("abc1".to_string());
        assert_eq!(err.to_string(), "Error: invalid word \"abc1\"");
    }
}
