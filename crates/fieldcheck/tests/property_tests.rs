//! Property-based tests for the traversal engine.

use fieldcheck::prelude::*;
use proptest::prelude::*;

#[derive(Describe, Clone, Debug)]
struct Item {
    #[check(valid = "minLength 1, maxLength 8")]
    label: String,
    #[check(valid = "higherThan 0, lowerThan 100")]
    qty: i64,
}

#[derive(Describe, Clone, Debug)]
struct Order {
    #[check(valid = "minLength 3")]
    reference: String,
    items: Vec<Item>,
    #[check(optional, valid = "password")]
    secret: Option<String>,
}

fn checker() -> Checker {
    Checker::builder().bundled_checks().build()
}

fn valid_item() -> impl Strategy<Value = Item> {
    ("[a-z]{1,8}", 0i64..=100).prop_map(|(label, qty)| Item { label, qty })
}

fn any_item() -> impl Strategy<Value = Item> {
    (".{0,12}", -50i64..150).prop_map(|(label, qty)| Item { label, qty })
}

fn valid_order() -> impl Strategy<Value = Order> {
    (
        "[A-Z]{3,10}",
        prop::collection::vec(valid_item(), 0..6),
        prop::option::of("[a-z]{9,16}"),
    )
        .prop_map(|(reference, items, secret)| Order {
            reference,
            items,
            secret,
        })
}

fn any_order() -> impl Strategy<Value = Order> {
    (
        ".{0,6}",
        prop::collection::vec(any_item(), 0..6),
        prop::option::of(".{0,12}"),
    )
        .prop_map(|(reference, items, secret)| Order {
            reference,
            items,
            secret,
        })
}

// ============================================================================
// IDEMPOTENCY: check(x) == check(x)
// ============================================================================

proptest! {
    #[test]
    fn check_is_idempotent(order in any_order()) {
        let checker = checker();
        prop_assert_eq!(checker.check(&order), checker.check(&order));
    }
}

// ============================================================================
// VALID INPUTS: no violated rule means an empty report
// ============================================================================

proptest! {
    #[test]
    fn valid_orders_have_no_errors(order in valid_order()) {
        let errors = checker().check(&order);
        prop_assert!(errors.is_empty(), "unexpected errors: {}", errors);
    }
}

// ============================================================================
// SINGLE VIOLATION: exactly one path with exactly one error
// ============================================================================

proptest! {
    #[test]
    fn single_violation_yields_single_error(
        mut order in valid_order().prop_filter("needs items", |o| !o.items.is_empty()),
        pick in any::<prop::sample::Index>(),
        qty in 101i64..1_000,
    ) {
        let index = pick.index(order.items.len());
        order.items[index].qty = qty;

        let errors = checker().check(&order);
        let expected = format!("items.{index}.qty");
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors.total_error_count(), 1);
        prop_assert_eq!(errors.error_keys(&expected), vec![keys::VAL_TO_BIG]);
    }
}

// ============================================================================
// PATHS: every reported path points at a declared field
// ============================================================================

proptest! {
    #[test]
    fn reported_paths_are_well_formed(order in any_order()) {
        for path in checker().check(&order).paths() {
            let valid = path == "reference"
                || path == "secret"
                || path.strip_prefix("items.").is_some_and(|rest| {
                    rest.split_once('.').is_some_and(|(index, field)| {
                        index.parse::<usize>().is_ok() && (field == "label" || field == "qty")
                    })
                });
            prop_assert!(valid, "unexpected path {}", path);
        }
    }
}
