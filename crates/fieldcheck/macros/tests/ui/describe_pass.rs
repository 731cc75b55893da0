//! Tests for the Describe derive macro - supported shapes.

use std::collections::VecDeque;
use std::rc::Rc;

use fieldcheck::Describe;
use fieldcheck::foundation::{Inspect, Value};
use fieldcheck::{Checker, checks};

#[derive(Describe)]
pub struct Address {
    #[check(valid = "minLength 1")]
    street: String,
    #[check(valid = "higherThan 1000, lowerThan 9999", optional)]
    zip: Option<u32>,
}

#[derive(Describe)]
pub struct Account<'a, T> {
    #[check(valid = "minLength 3", serial = "user_name,omitempty")]
    name: &'a str,
    #[check(optional = "true")]
    nickname: Option<Box<str>>,
    address: Address,
    history: Vec<Address>,
    queue: VecDeque<Rc<Address>>,
    scores: [f64; 3],
    #[check(skip)]
    handle: std::fs::File,
    extra: T,
}

#[derive(Describe)]
pub struct Empty {}

#[derive(Describe)]
pub struct Unit;

#[derive(Describe)]
pub struct Raw {
    r#type: String,
}

fn main() {
    let raw = Raw { r#type: String::new() };
    assert_eq!(raw.describe()[0].name(), "type");
    assert!(raw.is_zero());
    assert_eq!(raw.snapshot(), Value::Record);

    assert!(Empty {}.describe().is_empty());
    assert!(Unit.describe().is_empty());

    let mut checker = Checker::new();
    checker.add_checks(checks::bundled());
    assert!(checker.check(&Unit).is_empty());
}
