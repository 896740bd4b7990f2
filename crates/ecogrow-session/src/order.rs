//! # Order Drafts
//!
//! What "Pay Now" hands to the persistence layer.
//!
//! ```text
//! SessionCart::checkout()
//!      │
//!      ▼
//! OrderDraft { id, items, totalPrice, createdAt }
//!      │
//!      ▼
//! backend `orders` collection  (not this crate)
//! ```
//!
//! The draft is a frozen copy of the snapshot. The cart itself is left as
//! it is; the shipping screen still shows it.

use chrono::{DateTime, Utc};
use ecogrow_core::cart::{self, Cart};
use ecogrow_core::{CoreError, CoreResult, LineItem, Money};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An order ready to be written by the backend collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderDraft {
    /// Client-side reference (UUID v4).
    pub id: String,

    /// Line items at checkout time (frozen).
    pub items: Vec<LineItem>,

    /// Sum of line totals.
    pub total_price: Money,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl OrderDraft {
    /// Freezes a cart snapshot into an order draft.
    ///
    /// ## Errors
    /// - `CoreError::EmptyCart` if there is nothing to order
    /// - `CoreError::TotalOverflow` if the total does not fit in `Money`
    pub fn from_cart(cart: &Cart) -> CoreResult<Self> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        let total_price = cart::checked_cart_total(cart).ok_or(CoreError::TotalOverflow)?;

        Ok(OrderDraft {
            id: uuid::Uuid::new_v4().to_string(),
            items: cart.items().to_vec(),
            total_price,
            created_at: Utc::now(),
        })
    }

    /// Total number of units ordered, saturating at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        cart::total_quantity(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecogrow_core::cart::{add_item, set_item_amount};
    use ecogrow_core::CartCandidate;

    fn line(id: &str, price_cents: i64, amount: i64) -> Cart {
        let cart = add_item(
            &Cart::new(),
            &CartCandidate::new(id, "Plant", "flower", Money::from_cents(price_cents)),
        )
        .unwrap();
        set_item_amount(&cart, id, amount)
    }

    fn two_line_cart() -> Cart {
        let cart = add_item(
            &Cart::new(),
            &CartCandidate::new("p1", "Rose", "flower", Money::from_cents(1000)),
        )
        .unwrap();
        let cart = set_item_amount(&cart, "p1", 2);
        add_item(
            &cart,
            &CartCandidate::new("p2", "Fern", "foliage", Money::from_cents(500)),
        )
        .unwrap()
    }

    #[test]
    fn test_from_cart_freezes_snapshot() {
        let cart = two_line_cart();
        let draft = OrderDraft::from_cart(&cart).unwrap();

        assert_eq!(draft.items, cart.items());
        assert_eq!(draft.total_price, Money::from_cents(2500));
        assert_eq!(draft.total_quantity(), 3);
        assert!(uuid::Uuid::parse_str(&draft.id).is_ok());
    }

    #[test]
    fn test_total_quantity_saturates() {
        let cart = line("p1", 0, i64::MAX);
        let cart = add_item(
            &cart,
            &CartCandidate::new("p2", "Free seeds", "seed", Money::zero()),
        )
        .unwrap();
        let cart = set_item_amount(&cart, "p2", i64::MAX);

        let draft = OrderDraft::from_cart(&cart).unwrap();
        assert_eq!(draft.total_price, Money::zero());
        assert_eq!(draft.total_quantity(), i64::MAX);
        assert_eq!(draft.total_quantity(), cart.total_quantity());
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        let cart = line("p1", 2, i64::MAX);
        assert!(matches!(
            OrderDraft::from_cart(&cart),
            Err(CoreError::TotalOverflow)
        ));

        let cart = line("p1", i64::MAX / 2 + 1, 2);
        assert!(matches!(
            OrderDraft::from_cart(&cart),
            Err(CoreError::TotalOverflow)
        ));
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        assert!(matches!(
            OrderDraft::from_cart(&Cart::new()),
            Err(CoreError::EmptyCart)
        ));
    }

    #[test]
    fn test_document_shape() {
        let draft = OrderDraft::from_cart(&two_line_cart()).unwrap();
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json["totalPrice"], 25);
        assert_eq!(json["items"][0]["price"], 10);
        assert_eq!(json["items"][1]["plantName"], "Fern");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_drafts_get_distinct_ids() {
        let cart = two_line_cart();
        let a = OrderDraft::from_cart(&cart).unwrap();
        let b = OrderDraft::from_cart(&cart).unwrap();
        assert_ne!(a.id, b.id);
    }
}
