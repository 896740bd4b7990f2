//! # Session Cart
//!
//! The single holder of "the current cart" for a shopping session.
//!
//! ## Thread Safety
//! The snapshot lives behind `Arc<Mutex<Arc<Cart>>>` because:
//! 1. Two taps on "+" can arrive back to back
//! 2. Each operation must read the snapshot the previous one produced
//! 3. Readers should get a cheap, immutable handle (`Arc<Cart>`)
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Cart Operations                              │
//! │                                                                         │
//! │  lock ──► current: Arc<Cart> ──► ecogrow_core::cart::* ──► next: Cart  │
//! │                                                               │         │
//! │              next == current? ──yes──► keep the same Arc      │         │
//! │                      │                                        │         │
//! │                      no ──────────► replace with Arc::new(next)         │
//! │  unlock                                                                 │
//! │                                                                         │
//! │  Observers compare the Arc they hold with Arc::ptr_eq to see changes.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ecogrow_core::cart::{self, Cart};
use ecogrow_core::{CartCandidate, CoreResult, Money};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::action::CartAction;
use crate::error::ApiError;
use crate::order::OrderDraft;

/// Cart totals summary for the cart screen footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_price: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.len(),
            total_quantity: cart.total_quantity(),
            total_price: cart::cart_total(cart),
        }
    }
}

/// Session-scoped cart state.
///
/// Cloning gives another handle to the same cart, so a clone can be moved
/// into each UI callback or worker thread.
#[derive(Debug, Clone, Default)]
pub struct SessionCart {
    current: Arc<Mutex<Arc<Cart>>>,
}

impl SessionCart {
    /// Starts a session with an empty cart.
    pub fn new() -> Self {
        SessionCart::default()
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<Cart> {
        Arc::clone(&self.lock())
    }

    /// True when the cart has been replaced since `seen` was taken.
    pub fn has_changed_since(&self, seen: &Arc<Cart>) -> bool {
        !Arc::ptr_eq(&self.lock(), seen)
    }

    /// Totals of the current snapshot.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self.snapshot().as_ref())
    }

    /// Adds one unit of `candidate`.
    pub fn add_item(&self, candidate: &CartCandidate) -> CoreResult<Arc<Cart>> {
        debug!(product_id = %candidate.id, price = %candidate.price, "add_item");
        self.try_replace("add_item", |current| cart::add_item(current, candidate))
    }

    /// Removes a product; unknown ids leave the cart as it is.
    pub fn remove_item(&self, id: &str) -> Arc<Cart> {
        debug!(product_id = %id, "remove_item");
        self.replace("remove_item", |current| cart::remove_item(current, id))
    }

    /// Sets a product's amount; anything below 1 removes it.
    pub fn set_item_amount(&self, id: &str, amount: i64) -> Arc<Cart> {
        debug!(product_id = %id, amount = amount, "set_item_amount");
        self.replace("set_item_amount", |current| {
            cart::set_item_amount(current, id, amount)
        })
    }

    /// Applies a UI action.
    pub fn dispatch(&self, action: &CartAction) -> CoreResult<Arc<Cart>> {
        debug!(action = action.kind(), product_id = %action.product_id(), "dispatch");
        self.try_replace(action.kind(), |current| action.apply(current))
    }

    /// Parses and applies an action coming straight from the UI bridge.
    pub fn dispatch_json(&self, json: &str) -> Result<Arc<Cart>, ApiError> {
        let action: CartAction = serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "rejected malformed cart action");
            ApiError::from(e)
        })?;
        Ok(self.dispatch(&action)?)
    }

    /// Freezes the current snapshot into an order draft.
    ///
    /// The cart is not cleared; persisting the draft is up to the caller.
    pub fn checkout(&self) -> CoreResult<OrderDraft> {
        let snapshot = self.snapshot();
        let draft = OrderDraft::from_cart(&snapshot)?;
        debug!(
            order_id = %draft.id,
            items = draft.items.len(),
            total = %draft.total_price,
            "checkout"
        );
        Ok(draft)
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Snapshots are swapped whole, so a guard recovered from a poisoned
    /// lock still holds a complete cart.
    fn lock(&self) -> MutexGuard<'_, Arc<Cart>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn replace<F>(&self, op: &'static str, f: F) -> Arc<Cart>
    where
        F: FnOnce(&Cart) -> Cart,
    {
        let mut current = self.lock();
        let next = f(&**current);
        Self::commit(op, &mut *current, next)
    }

    fn try_replace<F>(&self, op: &'static str, f: F) -> CoreResult<Arc<Cart>>
    where
        F: FnOnce(&Cart) -> CoreResult<Cart>,
    {
        let mut current = self.lock();
        let next = f(&**current).map_err(|e| {
            warn!(op = op, error = %e, "cart operation rejected");
            e
        })?;
        Ok(Self::commit(op, &mut *current, next))
    }

    fn commit(op: &'static str, current: &mut Arc<Cart>, next: Cart) -> Arc<Cart> {
        if **current == next {
            debug!(op = op, "cart unchanged");
        } else {
            *current = Arc::new(next);
            debug!(op = op, items = current.len(), total = %current.total(), "cart replaced");
        }
        Arc::clone(current)
    }
}
