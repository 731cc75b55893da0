//! End-to-end tests: derived records walked by a checker with the bundled
//! checks registered.

use fieldcheck::prelude::*;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

// ============================================================================
// FIXTURES
// ============================================================================

#[derive(Describe)]
struct Login {
    #[check(valid = "minLength 1, maxLength 200", serial = "-")]
    name: String,
    #[serde(rename = "pass")]
    #[check(valid = "password")]
    password: String,
}

fn login(name: &str, password: &str) -> Login {
    Login {
        name: name.into(),
        password: password.into(),
    }
}

#[derive(Describe)]
struct Street {
    #[check(valid = "minLength 3")]
    line: String,
}

fn street(line: &str) -> Street {
    Street { line: line.into() }
}

#[derive(Describe)]
struct Customer {
    #[check(valid = "minLength 1")]
    name: String,
    #[serde(rename = "addr")]
    address: Street,
    previous: Vec<Street>,
    #[check(optional)]
    backup: Option<Box<Street>>,
    #[check(valid = "higherThan 0, lowerThan 120")]
    age: i32,
}

fn customer() -> Customer {
    Customer {
        name: "Ada".into(),
        address: street("Main St"),
        previous: vec![street("Elm St"), street("Oak St")],
        backup: None,
        age: 36,
    }
}

#[fixture]
fn checker() -> Checker {
    Checker::builder().bundled_checks().build()
}

fn paths(errors: &ErrorsMap) -> Vec<&str> {
    errors.paths().collect()
}

// ============================================================================
// CONCRETE SCENARIOS
// ============================================================================

#[rstest]
fn valid_login_has_no_errors(checker: Checker) {
    assert!(checker.check(&login("Mario", "Jumping 1234")).is_empty());
}

#[rstest]
fn empty_name_and_short_password(checker: Checker) {
    let errors = checker.check(&login("", "Jump"));

    assert_eq!(paths(&errors), vec!["name", "password"]);
    assert_eq!(errors.error_keys("name"), vec![keys::VAL_TO_SHORT]);
    assert_eq!(errors.error_keys("password"), vec![keys::VAL_TO_SHORT]);
}

#[rstest]
fn report_renders_one_line_per_path(checker: Checker) {
    let errors = checker.check(&login("", "Jump"));
    insta::assert_snapshot!(errors.to_string(), @r"
    name: Value is too short
    password: Value is too short
    ");
}

// ============================================================================
// NAME RESOLUTION
// ============================================================================

#[rstest]
#[case::intrinsic_names(Options::default(), "Mario", "Jump", vec!["password"])]
#[case::serial_name(Options::with_serial_names(SerialNames::default()), "Mario", "Jump", vec!["pass"])]
#[case::dash_falls_back(Options::with_serial_names(SerialNames::default()), "", "Jumping 1234", vec!["name"])]
#[case::dash_skipped(Options::with_serial_names(SerialNames::ignoring_skipped()), "", "Jumping 1234", vec![])]
fn name_resolution(
    mut checker: Checker,
    #[case] options: Options,
    #[case] name: &str,
    #[case] password: &str,
    #[case] expected: Vec<&str>,
) {
    checker.set_options(options);
    let errors = checker.check(&login(name, password));
    assert_eq!(paths(&errors), expected);
}

#[rstest]
fn skipped_field_rules_never_run() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    let ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran);

    let checker = Checker::builder()
        .serial_names(SerialNames::ignoring_skipped())
        .check("minLength", move |_: &Context<'_>| {
            flag.store(true, Ordering::SeqCst);
            Err(CheckError::too_short())
        })
        .check("maxLength", |_: &Context<'_>| Ok(()))
        .check("password", |_: &Context<'_>| Ok(()))
        .build();

    assert!(checker.check(&login("", "x")).is_empty());
    assert!(!ran.load(Ordering::SeqCst));
}

// ============================================================================
// NESTING
// ============================================================================

#[rstest]
fn nested_record_and_sequence_paths(checker: Checker) {
    let mut input = customer();
    input.address = street("A");
    input.previous[1] = street("");

    let errors = checker.check(&input);
    assert_eq!(paths(&errors), vec!["address.line", "previous.1.line"]);
}

#[rstest]
fn nested_paths_use_serial_names(mut checker: Checker) {
    checker.set_options(Options::with_serial_names(SerialNames::default()));
    let mut input = customer();
    input.address = street("A");

    assert_eq!(paths(&checker.check(&input)), vec!["addr.line"]);
}

#[rstest]
fn optional_wrapper_keeps_the_path(checker: Checker) {
    let mut input = customer();
    input.backup = Some(Box::new(street("No")));

    let errors = checker.check(&input);
    assert_eq!(paths(&errors), vec!["backup.line"]);
    assert_eq!(errors.error_keys("backup.line"), vec![keys::VAL_TO_SHORT]);
}

#[rstest]
fn optional_zero_record_is_skipped(checker: Checker) {
    let mut input = customer();
    input.backup = Some(Box::new(street("")));

    assert!(checker.check(&input).is_empty());
}

#[rstest]
#[case(-1, Some(keys::VAL_TO_SMALL))]
#[case(0, None)]
#[case(120, None)]
#[case(121, Some(keys::VAL_TO_BIG))]
fn numeric_bounds(checker: Checker, #[case] age: i32, #[case] expected: Option<&str>) {
    let mut input = customer();
    input.age = age;

    let errors = checker.check(&input);
    assert_eq!(errors.error_keys("age").first().copied(), expected);
}

// ============================================================================
// OPTIONAL FIELDS
// ============================================================================

#[derive(Describe)]
struct Profile {
    #[check(valid = "minLength 5", optional)]
    bio: String,
    #[check(valid = "higherThan 18", optional = "True")]
    age: Option<u8>,
    #[check(valid = "minLength 5", optional = "false")]
    motto: String,
}

#[rstest]
#[case::all_zero("", None, "long enough", vec![])]
#[case::bio_violates("abc", None, "long enough", vec!["bio"])]
#[case::age_violates("", Some(12), "long enough", vec!["age"])]
#[case::age_zero_skipped("", Some(0), "long enough", vec![])]
#[case::not_optional("", None, "", vec!["motto"])]
fn optional_semantics(
    checker: Checker,
    #[case] bio: &str,
    #[case] age: Option<u8>,
    #[case] motto: &str,
    #[case] expected: Vec<&str>,
) {
    let profile = Profile {
        bio: bio.into(),
        age,
        motto: motto.into(),
    };
    assert_eq!(paths(&checker.check(&profile)), expected);
}

// ============================================================================
// REGISTRY INTERACTION
// ============================================================================

#[derive(Describe)]
struct Ticket {
    #[check(valid = "doesNotExist, lowerThan 10")]
    rank: u8,
    #[check(valid = "minLength 2")]
    code: String,
}

#[rstest]
fn unregistered_check_does_not_stop_evaluation(checker: Checker) {
    let errors = checker.check(&Ticket {
        rank: 11,
        code: "x".into(),
    });

    assert_eq!(errors.error_keys("rank"), vec![keys::NOT_DEFINED, keys::VAL_TO_BIG]);
    assert_eq!(errors.error_keys("code"), vec![keys::VAL_TO_SHORT]);
}

#[derive(Describe)]
struct Typos {
    #[check(valid = "password,")]
    trailing: String,
    #[check(valid = "")]
    empty: String,
    #[check(valid = "minLength 1,, maxLength 3")]
    doubled: String,
}

#[rstest]
fn stray_commas_report_undefined_checks(checker: Checker) {
    let errors = checker.check(&Typos {
        trailing: "Jumping 1234".into(),
        empty: "x".into(),
        doubled: "abc".into(),
    });

    assert_eq!(errors.error_keys("trailing"), vec![keys::NOT_DEFINED]);
    assert_eq!(errors.error_keys("empty"), vec![keys::NOT_DEFINED]);
    assert_eq!(errors.error_keys("doubled"), vec![keys::NOT_DEFINED]);
}

#[derive(Describe)]
struct Reading {
    #[check(valid = "lowerThan 18")]
    upper: f64,
    #[check(valid = "higherThan 18")]
    lower: f32,
}

#[rstest]
#[case::fraction_above_upper(18.5, 18.0, vec![])]
#[case::fraction_below_lower(18.0, 17.5, vec!["lower"])]
#[case::next_integer(19.0, 18.0, vec!["upper"])]
fn floats_truncate_toward_zero(
    checker: Checker,
    #[case] upper: f64,
    #[case] lower: f32,
    #[case] expected: Vec<&str>,
) {
    assert_eq!(paths(&checker.check(&Reading { upper, lower })), expected);
}

#[rstest]
fn empty_registry_reports_every_rule() {
    let errors = Checker::new().check(&login("Mario", "Jumping 1234"));
    assert_eq!(
        errors.error_keys("name"),
        vec![keys::NOT_DEFINED, keys::NOT_DEFINED]
    );
    assert_eq!(errors.error_keys("password"), vec![keys::NOT_DEFINED]);
}

#[rstest]
fn later_registration_replaces_earlier(mut checker: Checker) {
    checker.add_check("password", |_: &Context<'_>| Ok(()));
    assert!(checker.check(&login("Mario", "Jump")).is_empty());
}

#[rstest]
fn malformed_argument_is_a_typed_error(checker: Checker) {
    #[derive(Describe)]
    struct Broken {
        #[check(valid = "minLength three")]
        value: String,
    }

    let errors = checker.check(&Broken {
        value: "abc".into(),
    });
    let error = &errors.get("value").unwrap()[0];
    assert_eq!(error.key, keys::INVALID_ARG);
    assert_eq!(error.param("argument"), Some("three"));
}

// ============================================================================
// REPORT SERIALIZATION
// ============================================================================

#[rstest]
fn report_serializes_as_path_map(checker: Checker) {
    let errors = checker.check(&login("", "Jump"));

    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        serde_json::json!({
            "name": [{
                "key": "VAL_TO_SHORT",
                "message": "Value is too short",
                "params": [["min", "1"], ["actual", "0"]]
            }],
            "password": [{
                "key": "VAL_TO_SHORT",
                "message": "Value is too short",
                "params": [["min", "9"], ["actual", "4"]]
            }]
        })
    );
}

#[rstest]
fn checker_from_json_options() {
    let options: Options =
        serde_json::from_str(r#"{ "serial_names": { "ignore_skipped": true } }"#).unwrap();
    let checker = Checker::builder().options(options).bundled_checks().build();

    assert_eq!(paths(&checker.check(&login("", "Jump"))), vec!["pass"]);
}

#[rstest]
fn repeated_checks_are_equal(checker: Checker) {
    let input = login("", "Jump");
    assert_eq!(checker.check(&input), checker.check(&input));
}
