//! # Validation Module
//!
//! Contract checks applied to everything that enters the cart.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Product screen / UI bridge                                   │
//! │  └── Type validation (JSON: missing, string or fractional-cent price)   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── id present and bounded                                            │
//! │  └── price not negative                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  cart::add_item                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ecogrow_core::validation::{validate_price_cents, validate_product_id};
//!
//! assert!(validate_product_id("p1").is_ok());
//! assert!(validate_product_id("  ").is_err());
//! assert!(validate_price_cents(0).is_ok());
//! assert!(validate_price_cents(-1).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::CartCandidate;
use crate::MAX_PRODUCT_ID_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product identifier.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most `MAX_PRODUCT_ID_LEN` characters
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.chars().count() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a price in minor units.
///
/// Zero is allowed (giveaway seedlings).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an add-to-cart candidate.
pub fn validate_candidate(candidate: &CartCandidate) -> ValidationResult<()> {
    validate_product_id(&candidate.id)?;
    validate_price_cents(candidate.price.cents())
}

// =============================================================================
// Unit Tests
// =============================================================================
