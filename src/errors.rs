use serde::Serialize;

/// All application errors, categorized by domain.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ── Validation ──
    #[error("Invalid input: {0}")]
    Validation(String),

    // ── Trading ──
    #[error("Insufficient funds: cost {cost:.2} exceeds available {available:.2}")]
    InsufficientFunds { cost: f64, available: f64 },

    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("No position held in {0}")]
    PositionNotFound(String),
}

/// Serializable error response for the frontend.
#[derive(Debug, Serialize, Clone)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let code = match err {
            AppError::Validation(_) => "VALIDATION",
            AppError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            AppError::UnknownInstrument(_) => "UNKNOWN_INSTRUMENT",
            AppError::PositionNotFound(_) => "POSITION_NOT_FOUND",
        };
        ErrorResponse {
            code: code.to_string(),
            message: err.to_string(),
        }
    }
}

// Allow AppError to cross directly into the shell's JSON responses.
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let response = ErrorResponse::from(self);
        response.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::InsufficientFunds {
            cost: 150.0,
            available: 100.0,
        };
        let resp = ErrorResponse::from(&err);
        assert_eq!(resp.code, "INSUFFICIENT_FUNDS");
        assert!(resp.message.contains("150.00"));
    }

    #[test]
    fn test_error_serializes_as_response() {
        let err = AppError::UnknownInstrument("MOON".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "UNKNOWN_INSTRUMENT");
        assert_eq!(json["message"], "Unknown instrument: MOON");
    }
}
