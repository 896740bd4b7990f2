use ecogrow_core::cart::{add_item, cart_total, remove_item, set_item_amount, Cart};
use ecogrow_core::{CartCandidate, Money};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn candidate_strategy() -> impl Strategy<Value = CartCandidate> {
    ("p[0-9]{1,2}", "[A-Za-z ]{1,12}", 0_i64..100_000_i64).prop_map(|(id, name, price)| {
        CartCandidate::new(id, name, "flower", Money::from_cents(price))
    })
}

/// Carts reachable through the public operations: a run of adds followed by
/// amount changes.
fn cart_strategy() -> impl Strategy<Value = Cart> {
    (
        proptest::collection::vec(candidate_strategy(), 0..12),
        proptest::collection::vec((0_usize..12, 1_i64..50), 0..6),
    )
        .prop_map(|(adds, bumps)| {
            let cart = adds.iter().fold(Cart::new(), |cart, c| {
                add_item(&cart, c).expect("generated candidates are valid")
            });
            bumps.into_iter().fold(cart, |cart, (index, amount)| {
                match cart.items().get(index).map(|item| item.id.clone()) {
                    Some(id) => set_item_amount(&cart, &id, amount),
                    None => cart,
                }
            })
        })
}

fn others(cart: &Cart, id: &str) -> Vec<ecogrow_core::LineItem> {
    cart.iter().filter(|item| item.id != id).cloned().collect()
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn add_new_item_appends_single_unit(cart in cart_strategy(), candidate in candidate_strategy()) {
        prop_assume!(!cart.contains(&candidate.id));

        let next = add_item(&cart, &candidate).unwrap();

        prop_assert_eq!(next.len(), cart.len() + 1);
        prop_assert_eq!(&next.items()[..cart.len()], cart.items());
        let added = next.items().last().unwrap();
        prop_assert_eq!(&added.id, &candidate.id);
        prop_assert_eq!(added.amount, 1);
        prop_assert_eq!(next.total_quantity(), cart.total_quantity() + 1);
    }

    #[test]
    fn add_existing_item_increments_by_one(cart in cart_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!cart.is_empty());
        let existing = pick.get(cart.items()).clone();
        let again = CartCandidate::new(
            existing.id.clone(),
            existing.plant_name.clone(),
            existing.category.clone(),
            existing.price,
        );

        let next = add_item(&cart, &again).unwrap();

        prop_assert_eq!(next.len(), cart.len());
        prop_assert_eq!(next.get(&existing.id).unwrap().amount, existing.amount + 1);
        prop_assert_eq!(others(&next, &existing.id), others(&cart, &existing.id));
    }

    #[test]
    fn remove_absent_is_noop(cart in cart_strategy(), id in "q[0-9]{1,3}") {
        prop_assert_eq!(remove_item(&cart, &id), cart);
    }

    #[test]
    fn remove_present_drops_exactly_one(cart in cart_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!cart.is_empty());
        let id = pick.get(cart.items()).id.clone();

        let next = remove_item(&cart, &id);

        prop_assert_eq!(next.len(), cart.len() - 1);
        prop_assert!(!next.contains(&id));
        prop_assert_eq!(next.items().to_vec(), others(&cart, &id));
    }

    #[test]
    fn remove_is_idempotent(cart in cart_strategy(), id in "p[0-9]{1,2}") {
        let once = remove_item(&cart, &id);
        prop_assert_eq!(remove_item(&once, &id), once);
    }

    #[test]
    fn non_positive_amount_removes(
        cart in cart_strategy(),
        pick in any::<prop::sample::Index>(),
        amount in -1_000_i64..=0,
    ) {
        prop_assume!(!cart.is_empty());
        let id = pick.get(cart.items()).id.clone();

        let next = set_item_amount(&cart, &id, amount);

        prop_assert!(!next.contains(&id));
        prop_assert_eq!(next, remove_item(&cart, &id));
    }

    #[test]
    fn positive_amount_replaces(
        cart in cart_strategy(),
        pick in any::<prop::sample::Index>(),
        amount in 1_i64..10_000,
    ) {
        prop_assume!(!cart.is_empty());
        let id = pick.get(cart.items()).id.clone();

        let next = set_item_amount(&cart, &id, amount);

        prop_assert_eq!(next.get(&id).unwrap().amount, amount);
        prop_assert_eq!(others(&next, &id), others(&cart, &id));
    }

    #[test]
    fn amounts_never_drop_below_one(
        cart in cart_strategy(),
        ops in proptest::collection::vec((0_usize..12, -5_i64..5), 0..20),
    ) {
        let result = ops.into_iter().fold(cart, |cart, (index, amount)| {
            match cart.items().get(index).map(|item| item.id.clone()) {
                Some(id) => set_item_amount(&cart, &id, amount),
                None => cart,
            }
        });
        prop_assert!(result.iter().all(|item| item.amount >= 1));
    }

    #[test]
    fn total_is_sum_of_lines(cart in cart_strategy()) {
        let expected: i64 = cart.iter().map(|item| item.price.cents() * item.amount).sum();
        prop_assert_eq!(cart_total(&cart).cents(), expected);
    }
}

// =============================================================================
// Worked scenarios
// =============================================================================

fn rose() -> CartCandidate {
    CartCandidate::new("p1", "Rose", "flower", Money::from_cents(1000))
}

fn fern() -> CartCandidate {
    CartCandidate::new("p2", "Fern", "foliage", Money::from_cents(500))
}

#[test]
fn scenario_add_to_empty_cart() {
    let cart = add_item(&Cart::new(), &rose()).unwrap();

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get("p1").unwrap().amount, 1);
    assert_eq!(cart.get("p1").unwrap().price, Money::from_cents(1000));
    assert_eq!(cart_total(&cart), Money::from_cents(1000));
}

#[test]
fn scenario_add_merges_into_existing_line() {
    let cart = set_item_amount(&add_item(&Cart::new(), &rose()).unwrap(), "p1", 2);
    let next = add_item(&cart, &rose()).unwrap();

    assert_eq!(next.len(), 1);
    assert_eq!(next.get("p1").unwrap().amount, 3);
    assert_eq!(cart_total(&next), Money::from_cents(3000));
}

#[test]
fn scenario_zero_amount_drops_line() {
    let cart = add_item(&Cart::new(), &rose()).unwrap();
    let cart = set_item_amount(&cart, "p1", 2);
    let cart = add_item(&cart, &fern()).unwrap();

    let next = set_item_amount(&cart, "p1", 0);

    assert_eq!(next.len(), 1);
    assert_eq!(next.items()[0].id, "p2");
    assert_eq!(next.items()[0].amount, 1);
    assert_eq!(cart_total(&next), Money::from_cents(500));
}

#[test]
fn scenario_remove_unknown_id() {
    let cart = add_item(&Cart::new(), &rose()).unwrap();
    let next = remove_item(&cart, "p9");

    assert_eq!(next, cart);
    assert_eq!(cart_total(&next), Money::from_cents(1000));
}
