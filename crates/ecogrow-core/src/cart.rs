//! # Cart Module
//!
//! The shopping cart snapshot and the only three ways to derive a new one.
//!
//! ## Cart Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Transitions                                     │
//! │                                                                         │
//! │  UI Action            Function               Result                     │
//! │  ─────────            ────────               ──────                     │
//! │                                                                         │
//! │  Add to Cart ───────► add_item() ──────────► id known?  amount + 1     │
//! │                                              id new?    append, amt 1   │
//! │                                                                         │
//! │  Tap "-" / "+" ─────► set_item_amount() ───► n < 1?     remove          │
//! │                                              id known?  amount = n      │
//! │                                              id new?    unchanged       │
//! │                                                                         │
//! │  Tap "Remove" ──────► remove_item() ───────► id known?  drop it         │
//! │                                              id new?    unchanged       │
//! │                                                                         │
//! │  Every function takes &Cart and returns a NEW Cart.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `id`
//! - Insertion order is display order
//! - Every `amount` is >= 1

use serde::Serialize;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{CartCandidate, LineItem};
use crate::validation::validate_candidate;
use crate::ADD_INCREMENT;

// =============================================================================
// Cart Snapshot
// =============================================================================

/// An immutable snapshot of the cart.
///
/// The item list is private: code outside this module can read a cart but
/// can only obtain a different one through [`add_item`], [`remove_item`]
/// or [`set_item_amount`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Line items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Looks up a line by product id.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all amounts.
    pub fn total_quantity(&self) -> i64 {
        total_quantity(&self.items)
    }

    /// Same as [`cart_total`].
    pub fn total(&self) -> Money {
        cart_total(self)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Transitions
// =============================================================================

/// Adds one unit of `candidate` to the cart.
///
/// ## Behavior
/// - Product already in cart: its amount goes up by one, position unchanged
/// - Product not in cart: appended at the end with amount 1
///
/// ## Errors
/// Returns `CoreError::Validation` if the candidate has an empty id or a
/// negative price. The input snapshot is untouched either way.
///
/// ## Example
/// ```rust
/// use ecogrow_core::cart::{add_item, cart_total, Cart};
/// use ecogrow_core::{CartCandidate, Money};
///
/// let rose = CartCandidate::new("p1", "Rose", "flower", Money::from_cents(1000));
/// let cart = add_item(&Cart::new(), &rose).unwrap();
///
/// assert_eq!(cart.len(), 1);
/// assert_eq!(cart_total(&cart), Money::from_cents(1000));
/// ```
pub fn add_item(cart: &Cart, candidate: &CartCandidate) -> CoreResult<Cart> {
    validate_candidate(candidate)?;

    let mut items = cart.items.clone();
    match items.iter_mut().find(|item| item.id == candidate.id) {
        Some(item) => item.amount = item.amount.saturating_add(ADD_INCREMENT),
        None => items.push(LineItem::first_unit(candidate)),
    }

    Ok(Cart { items })
}

/// Removes the line with `id`.
///
/// An unknown id yields a cart equal to the input.
pub fn remove_item(cart: &Cart, id: &str) -> Cart {
    Cart {
        items: cart
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect(),
    }
}

/// Sets the amount of the line with `id`.
///
/// ## Behavior
/// - `amount < 1`: the line is removed (same as [`remove_item`])
/// - id present: amount replaced, nothing else changes
/// - id absent: cart unchanged
pub fn set_item_amount(cart: &Cart, id: &str, amount: i64) -> Cart {
    if amount < 1 {
        return remove_item(cart, id);
    }

    Cart {
        items: cart
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    LineItem {
                        amount,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect(),
    }
}

// =============================================================================
// Derived Reads
// =============================================================================

/// Unit price × amount.
#[inline]
pub fn line_total(item: &LineItem) -> Money {
    item.line_total()
}

/// Sum of every line total.
///
/// Saturates at the `Money` limit; use [`checked_cart_total`] where a clamped
/// value must not be billed.
pub fn cart_total(cart: &Cart) -> Money {
    cart.items.iter().map(line_total).sum()
}

/// Sum of every line total, or `None` if any step overflows.
pub fn checked_cart_total(cart: &Cart) -> Option<Money> {
    cart.items.iter().try_fold(Money::zero(), |total, item| {
        item.price
            .checked_multiply_quantity(item.amount)
            .and_then(|line| total.checked_add(line))
    })
}

/// Sum of line amounts, saturating at `i64::MAX`.
pub fn total_quantity(items: &[LineItem]) -> i64 {
    items
        .iter()
        .fold(0i64, |acc, item| acc.saturating_add(item.amount))
}

// =============================================================================
// Unit Tests
// =============================================================================
