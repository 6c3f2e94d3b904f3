//! Error types for a render cycle.

use thiserror::Error;

/// Fixed message carried by every network failure.
pub const NETWORK_ERROR_MESSAGE: &str = "network response was not ok";

/// Why a render cycle did not touch the page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The configuration resource could not be retrieved.
    #[error("{message}: {cause}")]
    Network { message: &'static str, cause: String },

    /// The configuration body is not a valid configuration document.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A target element is absent from the page.
    #[error("element with id `{0}` not found")]
    MissingElement(String),

    /// The generated CSS would end the style element early when the page is written out.
    #[error("generated CSS contains a `</style` sequence")]
    UnsafeStyleText,

    #[error(transparent)]
    Style(#[from] StyleError),
}

impl RenderError {
    pub fn network(cause: impl Into<String>) -> Self {
        RenderError::Network {
            message: NETWORK_ERROR_MESSAGE,
            cause: cause.into(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, RenderError::Network { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, RenderError::Parse(_))
    }
}

/// CSS post-processing failures.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("generated CSS failed to parse: {0}")]
    Parse(String),

    #[error("failed to print CSS: {0}")]
    Print(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_starts_with_fixed_message() {
        let err = RenderError::network("HTTP 500 Internal Server Error");
        assert!(err.is_network());
        assert!(matches!(
            &err,
            RenderError::Network { message, .. } if *message == NETWORK_ERROR_MESSAGE
        ));
        assert!(err.to_string().starts_with(NETWORK_ERROR_MESSAGE));
        assert!(err.to_string().ends_with("HTTP 500 Internal Server Error"));
    }

    #[test]
    fn json_errors_convert_to_parse() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RenderError = json_err.into();
        assert!(err.is_parse());
        assert!(err.to_string().starts_with("failed to parse configuration"));
    }
}
