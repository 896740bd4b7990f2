//! # Domain Types
//!
//! The two value types the cart deals in.
//!
//! ```text
//! ┌─────────────────────────┐   add_item    ┌─────────────────────────┐
//! │     CartCandidate       │ ────────────► │        LineItem         │
//! │  ─────────────────────  │               │  ─────────────────────  │
//! │  id                     │               │  id                     │
//! │  plant_name             │               │  plant_name             │
//! │  category               │               │  category               │
//! │  price                  │               │  price (frozen)         │
//! │                         │               │  amount (>= 1)          │
//! └─────────────────────────┘               └─────────────────────────┘
//! ```
//!
//! Field names are camelCase on the wire (`plantName`) to match the
//! documents the mobile screens already produce.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Cart Candidate
// =============================================================================

/// A product offered to the cart by the product detail screen.
///
/// No quantity: each add contributes one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartCandidate {
    /// Stable product identifier (backend document id).
    pub id: String,

    /// Display name.
    pub plant_name: String,

    /// Category tag, e.g. "flower" or "succulent".
    pub category: String,

    /// Unit price; decimal major units on the wire (`12.5`).
    pub price: Money,
}

impl CartCandidate {
    /// Creates a candidate.
    pub fn new(
        id: impl Into<String>,
        plant_name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        CartCandidate {
            id: id.into(),
            plant_name: plant_name.into(),
            category: category.into(),
            price,
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in a cart.
///
/// Uses the snapshot pattern: name, category and price are frozen at the
/// moment the product was first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    pub id: String,
    pub plant_name: String,
    pub category: String,
    /// Unit price at add time.
    pub price: Money,
    /// Quantity held. Never below 1 inside a cart.
    pub amount: i64,
}

impl LineItem {
    /// Builds a fresh line holding a single unit of the candidate.
    pub(crate) fn first_unit(candidate: &CartCandidate) -> Self {
        LineItem {
            id: candidate.id.clone(),
            plant_name: candidate.plant_name.clone(),
            category: candidate.category.clone(),
            price: candidate.price,
            amount: 1,
        }
    }

    /// Unit price × amount.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price * self.amount
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
