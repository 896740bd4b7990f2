//! # Error Types
//!
//! Domain-specific error types for ecogrow-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ecogrow-core errors (this file)                                       │
//! │  ├── CoreError        - Rejected cart operations                       │
//! │  └── ValidationError  - Candidate contract violations                  │
//! │                                                                         │
//! │  ecogrow-session errors (separate crate)                               │
//! │  ├── ConfigError      - Bad environment configuration                  │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → UI                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown ids in `remove_item` / `set_item_amount` are NOT errors: a tap on
//! "Remove" racing an earlier removal is normal UI behaviour.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart-level errors.
///
/// A call that returns one of these leaves the input snapshot untouched and
/// still usable.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout was requested for a cart with no items.
    #[error("Cart is empty")]
    EmptyCart,

    /// The cart total does not fit in `Money`; billing a clamped value
    /// would undercharge.
    #[error("Cart total is too large")]
    TotalOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These signal a caller contract violation: the product source handed the
/// cart something that would corrupt totals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value is not representable, e.g. a price with fractions of a cent.
    #[error("{field} {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
