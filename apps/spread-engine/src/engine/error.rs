//! Engine error types.

use thiserror::Error;

/// Errors from spread construction and optimization.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Request parameters failed validation; nothing was computed.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What was wrong with the request.
        message: String,
    },

    /// The quote table holds no quotes for the requested underlying.
    #[error("No quotes available for underlying '{underlying}'")]
    NoQuotesForUnderlying {
        /// The underlying that was requested.
        underlying: String,
    },

    /// Manually-declared legs do not form the required spread shape.
    #[error("Invalid spread shape: {message}")]
    InvalidSpreadShape {
        /// Which precondition the legs violated.
        message: String,
    },
}

impl EngineError {
    /// Invalid request with a message.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Invalid spread shape with a message.
    #[must_use]
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidSpreadShape {
            message: message.into(),
        }
    }

    /// Stable error code for API payloads and logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } => "INVALID_REQUEST",
            Self::NoQuotesForUnderlying { .. } => "NO_QUOTES_FOR_UNDERLYING",
            Self::InvalidSpreadShape { .. } => "INVALID_SPREAD_SHAPE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EngineError::invalid_request("quantity must be positive");
        assert_eq!(err.to_string(), "Invalid request: quantity must be positive");
        assert_eq!(err.code(), "INVALID_REQUEST");
    }

    #[test]
    fn no_quotes_display() {
        let err = EngineError::NoQuotesForUnderlying {
            underlying: "PETR4".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No quotes available for underlying 'PETR4'"
        );
        assert_eq!(err.code(), "NO_QUOTES_FOR_UNDERLYING");
    }
}
