//! # API Error Type
//!
//! The one error shape the mobile screens receive.
//!
//! ```json
//! { "code": "VALIDATION_ERROR", "message": "id is required" }
//! ```
//!
//! ## Error Flow
//! ```text
//! JSON action ──serde──► serde_json::Error ─┐
//!                                            ├──► ApiError ──► UI (Alert)
//! cart transition ──────► CoreError ────────┘
//! ```

use ecogrow_core::CoreError;
use serde::Serialize;

/// Error returned across the UI boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (malformed action or candidate)
    ValidationError,

    /// Checkout attempted with nothing in the cart
    EmptyCart,

    /// Checkout attempted with a total too large to bill
    TotalOverflow,

    /// Anything else
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyCart => ApiError::new(ErrorCode::EmptyCart, "Your cart is empty"),
            CoreError::TotalOverflow => ApiError::new(
                ErrorCode::TotalOverflow,
                "Cart total is too large to check out",
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// A payload that does not deserialize is a caller contract violation,
/// except when the failure is not about the data itself.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data | Category::Syntax | Category::Eof => {
                ApiError::validation(format!("Invalid cart action: {}", err))
            }
            Category::Io => {
                tracing::error!("I/O error while reading cart action: {}", err);
                ApiError::internal("Could not read cart action")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
