use thiserror::Error;

/// Failures that can end the handling of a single gateway request
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The upstream catalog could not be reached (transport, timeout, WebDriver session)
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// The upstream document could not be turned into a queryable tree
    #[error("parse failed: {0}")]
    Parse(String),

    /// A required caller parameter is missing or empty
    #[error("{0}")]
    Validation(String),

    /// The gateway configuration is unusable
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GatewayError {
    /// True when the caller, not the upstream site, is at fault
    pub fn is_caller_error(&self) -> bool {
        matches!(self, GatewayError::Validation(_))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        // Only a body that arrived but could not be decoded is a parse failure
        if e.is_decode() {
            GatewayError::Parse(e.to_string())
        } else {
            GatewayError::Fetch(e.to_string())
        }
    }
}

impl From<fantoccini::error::CmdError> for GatewayError {
    fn from(e: fantoccini::error::CmdError) -> Self {
        GatewayError::Fetch(e.to_string())
    }
}

impl From<fantoccini::error::NewSessionError> for GatewayError {
    fn from(e: fantoccini::error::NewSessionError) -> Self {
        GatewayError::Fetch(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
