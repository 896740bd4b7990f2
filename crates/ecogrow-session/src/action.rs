//! # Cart Actions
//!
//! The three messages the screens send to the cart, in the same JSON shape
//! the mobile app has always dispatched them. Prices are decimal major units,
//! as the product screen stores them (`12.5` is Rs.12.50):
//!
//! ```text
//! { "type": "ADD_TO_CART",        "payload": { "id": "p1", "plantName": "Rose", "price": 12.5, ... } }
//! { "type": "REMOVE_FROM_CART",   "payload": "p1" }
//! { "type": "UPDATE_ITEM_AMOUNT", "payload": { "id": "p1", "amount": 3 } }
//! ```
//!
//! [`CartAction::apply`] is the reducer: it maps an action onto the pure
//! transitions in `ecogrow_core::cart`.

use ecogrow_core::cart::{self, Cart};
use ecogrow_core::{CartCandidate, CoreResult};
use serde::{Deserialize, Serialize};

/// A cart action sent by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// "Add to Cart" on the product detail screen.
    AddToCart(CartCandidate),

    /// "Remove" on a cart row.
    RemoveFromCart(String),

    /// "-" / "+" on a cart row.
    UpdateItemAmount { id: String, amount: i64 },
}

impl CartAction {
    pub fn add_to_cart(candidate: CartCandidate) -> Self {
        CartAction::AddToCart(candidate)
    }

    pub fn remove_from_cart(id: impl Into<String>) -> Self {
        CartAction::RemoveFromCart(id.into())
    }

    pub fn update_item_amount(id: impl Into<String>, amount: i64) -> Self {
        CartAction::UpdateItemAmount {
            id: id.into(),
            amount,
        }
    }

    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddToCart(_) => "add_to_cart",
            CartAction::RemoveFromCart(_) => "remove_from_cart",
            CartAction::UpdateItemAmount { .. } => "update_item_amount",
        }
    }

    /// Product id the action targets.
    pub fn product_id(&self) -> &str {
        match self {
            CartAction::AddToCart(candidate) => &candidate.id,
            CartAction::RemoveFromCart(id) => id,
            CartAction::UpdateItemAmount { id, .. } => id,
        }
    }

    /// Computes the next snapshot. Only `AddToCart` can fail.
    pub fn apply(&self, current: &Cart) -> CoreResult<Cart> {
        match self {
            CartAction::AddToCart(candidate) => cart::add_item(current, candidate),
            CartAction::RemoveFromCart(id) => Ok(cart::remove_item(current, id)),
            CartAction::UpdateItemAmount { id, amount } => {
                Ok(cart::set_item_amount(current, id, *amount))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecogrow_core::Money;

    #[test]
    fn test_add_to_cart_wire_format() {
        // The product screen also sends `amount: 1`; it is ignored.
        let json = r#"{
            "type": "ADD_TO_CART",
            "payload": { "id": "p1", "plantName": "Rose", "category": "flower", "price": 12.5, "amount": 1 }
        }"#;
        let action: CartAction = serde_json::from_str(json).unwrap();

        assert_eq!(
            action,
            CartAction::add_to_cart(CartCandidate::new(
                "p1",
                "Rose",
                "flower",
                Money::from_cents(1250)
            ))
        );
        assert_eq!(action.kind(), "add_to_cart");
        assert_eq!(action.product_id(), "p1");
    }

    #[test]
    fn test_remove_and_update_wire_format() {
        let remove: CartAction =
            serde_json::from_str(r#"{"type":"REMOVE_FROM_CART","payload":"p2"}"#).unwrap();
        assert_eq!(remove, CartAction::remove_from_cart("p2"));

        let update: CartAction = serde_json::from_str(
            r#"{"type":"UPDATE_ITEM_AMOUNT","payload":{"id":"p2","amount":4}}"#,
        )
        .unwrap();
        assert_eq!(update, CartAction::update_item_amount("p2", 4));
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let json = serde_json::to_value(CartAction::update_item_amount("p1", 0)).unwrap();
        assert_eq!(json["type"], "UPDATE_ITEM_AMOUNT");
        assert_eq!(json["payload"]["amount"], 0);
    }

    #[test]
    fn test_malformed_actions_are_rejected() {
        let bad = [
            r#"{"type":"ADD_TO_CART","payload":{"plantName":"Rose","category":"flower","price":10}}"#,
            r#"{"type":"ADD_TO_CART","payload":{"id":"p1","plantName":"Rose","category":"flower"}}"#,
            r#"{"type":"ADD_TO_CART","payload":{"id":"p1","plantName":"Rose","category":"flower","price":12.345}}"#,
            r#"{"type":"UPDATE_ITEM_AMOUNT","payload":{"id":"p1","amount":"3"}}"#,
            r#"{"type":"CLEAR_CART"}"#,
        ];
        for json in bad {
            assert!(serde_json::from_str::<CartAction>(json).is_err(), "{json}");
        }
    }

    #[test]
    fn test_apply_reduces_sequence() {
        let rose = CartCandidate::new("p1", "Rose", "flower", Money::from_cents(1000));
        let actions = [
            CartAction::add_to_cart(rose.clone()),
            CartAction::add_to_cart(rose),
            CartAction::update_item_amount("p1", 5),
            CartAction::remove_from_cart("p9"),
        ];

        let cart = actions
            .iter()
            .try_fold(Cart::new(), |cart, action| action.apply(&cart))
            .unwrap();

        assert_eq!(cart.get("p1").unwrap().amount, 5);
        assert_eq!(cart.total(), Money::from_cents(5000));
    }
}
