use error_location::ErrorLocation;
use serde_json::Value;
use std::panic::Location;
use thiserror::Error;

const UNAUTHORIZED: u16 = 401;
const NOT_FOUND: u16 = 404;

/// Errors that can occur during API calls and session handling
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error(
        "API error ({status}): {} {location}",
        .message.as_deref().unwrap_or("request failed")
    )]
    Api {
        status: u16,
        code: Option<String>,
        message: Option<String>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session storage error: {message} {location}")]
    Session {
        message: String,
        location: ErrorLocation,
        #[source]
        source: ih_config::ConfigError,
    },

    #[error("{message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logging {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert session file error with context
    #[track_caller]
    pub fn from_session(err: ih_config::ConfigError) -> Self {
        ClientError::Session {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Build an API error from a non-success response body.
    ///
    /// Business errors carry `{"detail": "..."}`; validation and internal
    /// errors carry `{"error": {"code": "...", "message": "..."}}`.
    #[track_caller]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed: Option<Value> = serde_json::from_slice(body).ok();

        let detail = parsed
            .as_ref()
            .and_then(|v| v.get("detail"))
            .and_then(|v| v.as_str())
            .map(String::from);

        let error = parsed.as_ref().and_then(|v| v.get("error"));
        let code = error
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
            .map(String::from);
        let message = detail.or_else(|| {
            error
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
                .map(String::from)
        });

        ClientError::Api {
            status,
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a client-side rejection with location
    #[track_caller]
    pub fn rejected<S: Into<String>>(message: S) -> Self {
        ClientError::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a logger setup error with location
    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        ClientError::Logging {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Expired or invalid token
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(UNAUTHORIZED)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(NOT_FOUND)
    }

    /// Message to show the user: the server-provided message when there is
    /// one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            ClientError::Rejected { message, .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// The error text without its source location, for printing to the user.
    pub fn display_message(&self) -> String {
        match self {
            ClientError::Http { message, .. } => format!("HTTP request error: {message}"),
            ClientError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            ClientError::Api { status, .. } => format!("API error ({status}): request failed"),
            ClientError::Json { message, .. } => format!("JSON parse error: {message}"),
            ClientError::Session { source, .. } => {
                format!("Session storage error: {}", source.display_message())
            }
            ClientError::Rejected { message, .. } => message.clone(),
            ClientError::Logging { message, .. } => format!("Logger error: {message}"),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<ih_config::ConfigError> for ClientError {
    #[track_caller]
    fn from(err: ih_config::ConfigError) -> Self {
        ClientError::from_session(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
