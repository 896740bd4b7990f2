//! # ecogrow-core: Pure Cart Logic for EcoGrow
//!
//! This crate holds the one piece of real logic in the EcoGrow shop: the
//! shopping cart. Everything here is a pure function over immutable
//! snapshots, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        EcoGrow Cart Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Mobile UI (React Native screens)                │   │
//! │  │     Product Detail ──► Cart Screen ──► Pay Now ──► Shipping     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartAction (JSON)                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 ecogrow-session (SessionCart)                   │   │
//! │  │     dispatch, add_item, remove_item, set_item_amount, checkout  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ecogrow-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │ add/remove│  │   rules   │  │   │
//! │  │   │ Candidate │  │           │  │ set amount│  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO BACKEND • NO GLOBAL STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The cart snapshot and its three transitions
//! - [`types`] - Line items and add-to-cart candidates
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Candidate validation
//!
//! ## Design Principles
//!
//! 1. **Snapshots**: Operations take `&Cart` and return a new `Cart`
//! 2. **No I/O**: Backend, network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are minor units (i64); JSON
//!    carries decimal major units (`12.5`)
//! 4. **Explicit Errors**: Rejected calls return typed errors, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use ecogrow_core::cart::{self, Cart};
//! use ecogrow_core::{CartCandidate, Money};
//!
//! let rose = CartCandidate::new("p1", "Rose", "flower", Money::from_cents(1000));
//!
//! let empty = Cart::new();
//! let one = cart::add_item(&empty, &rose).unwrap();
//! let two = cart::add_item(&one, &rose).unwrap();
//!
//! assert_eq!(two.len(), 1);
//! assert_eq!(two.get("p1").unwrap().amount, 2);
//! assert_eq!(cart::cart_total(&two), Money::from_cents(2000));
//!
//! // Earlier snapshots are untouched
//! assert_eq!(one.get("p1").unwrap().amount, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{CartCandidate, LineItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity contributed by a single `add_item` call.
///
/// The product screen only ever offers "Add to Cart" one unit at a time.
/// Callers that want N units use `set_item_amount`.
pub const ADD_INCREMENT: i64 = 1;

/// Maximum length of a product identifier.
///
/// Backend document IDs are 20 characters; the limit leaves room for
/// other product sources without letting unbounded strings into the cart.
pub const MAX_PRODUCT_ID_LEN: usize = 128;
