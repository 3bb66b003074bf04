//! Routing engine error types.

use std::fmt;

use super::convert::ConversionError;

/// Errors from calling the routing engine.
#[derive(Debug)]
pub enum EngineError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Engine returned an error status code
    ApiError { status: u16, message: String },

    /// Rate limited by the engine
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,

    /// Engine or mock data not available
    NotConfigured(String),

    /// Response could not be turned into legs
    Conversion(ConversionError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Http(e) => write!(f, "HTTP error: {e}"),
            EngineError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            EngineError::ApiError { status, message } => {
                write!(f, "engine error {status}: {message}")
            }
            EngineError::RateLimited => write!(f, "rate limited by routing engine"),
            EngineError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
            EngineError::NotConfigured(msg) => write!(f, "not configured: {msg}"),
            EngineError::Conversion(e) => write!(f, "bad engine response: {e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Http(e) => Some(e),
            EngineError::Conversion(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for EngineError {
    fn from(err: reqwest::Error) -> Self {
        EngineError::Http(err)
    }
}

impl From<ConversionError> for EngineError {
    fn from(err: ConversionError) -> Self {
        EngineError::Conversion(err)
    }
}
