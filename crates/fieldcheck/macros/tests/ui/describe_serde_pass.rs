//! Tests for the Describe derive macro alongside serde derives.

use fieldcheck::Describe;
use fieldcheck::{Checker, SerialNames};
use serde::{Deserialize, Serialize};

#[derive(Describe, Serialize, Deserialize, Default)]
pub struct Login {
    #[serde(skip)]
    #[check(valid = "minLength 1, maxLength 200")]
    name: String,

    #[serde(rename = "pass", default)]
    #[check(valid = "password")]
    password: String,

    #[serde(rename(serialize = "mail", deserialize = "email"))]
    email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

fn main() {
    let login = Login::default();
    let serial: Vec<_> = login.describe().iter().map(|f| f.serial_name()).collect();
    assert_eq!(serial, vec![Some("-"), Some("pass"), Some("mail"), None]);

    let checker = Checker::builder()
        .serial_names(SerialNames::ignoring_skipped())
        .bundled_checks()
        .build();
    let errors = checker.check(&login);
    assert_eq!(errors.paths().collect::<Vec<_>>(), vec!["pass"]);
}
