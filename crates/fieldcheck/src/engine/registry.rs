//! Name to check-function registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{CheckError, Context};

type CheckFn = dyn Fn(&Context<'_>) -> Result<(), CheckError> + Send + Sync;

/// A shared check function.
///
/// Checks are pure: they read the [`Context`] and either accept the value or
/// return the failure to record. Cloning a `Check` is a reference-count bump.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::{CheckError, Context, Value};
/// use fieldcheck::Check;
///
/// let not_absent = Check::new(|ctx: &Context<'_>| match ctx.value() {
///     Value::Absent => Err(CheckError::new("REQUIRED", "Value is required")),
///     _ => Ok(()),
/// });
///
/// let ctx = Context::new(Value::Absent, "required", "", "name", "name");
/// assert!(not_absent.call(&ctx).is_err());
/// ```
#[derive(Clone)]
pub struct Check(Arc<CheckFn>);

impl Check {
    /// Wraps a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Context<'_>) -> Result<(), CheckError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Runs the check.
    pub fn call(&self, ctx: &Context<'_>) -> Result<(), CheckError> {
        (self.0)(ctx)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Check(..)")
    }
}

/// Registered checks keyed by the name rules refer to.
///
/// Lookup is an exact string match. Registering a name twice replaces the
/// earlier function.
#[derive(Default, Clone)]
pub struct CheckRegistry {
    checks: HashMap<String, Check>,
}

impl CheckRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `check` under `name`, returning the function it replaced.
    pub fn insert(&mut self, name: impl Into<String>, check: Check) -> Option<Check> {
        let name = name.into();
        let previous = self.checks.insert(name.clone(), check);
        if previous.is_some() {
            tracing::debug!(check = %name, "check registration replaced an earlier one");
        }
        previous
    }

    /// Looks up a check by name.
    pub fn get(&self, name: &str) -> Option<&Check> {
        self.checks.get(name)
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.checks.contains_key(name)
    }

    /// Removes a check, returning it if it was registered.
    pub fn remove(&mut self, name: &str) -> Option<Check> {
        self.checks.remove(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.checks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("count", &self.checks.len())
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Value;

    fn ctx() -> Context<'static> {
        Context::new(Value::Str("x"), "probe", "", "f", "f")
    }

    fn always(key: &'static str) -> Check {
        Check::new(move |_| Err(CheckError::new(key, key)))
    }

    #[test]
    fn test_empty_registry() {
        let reg = CheckRegistry::new();
        assert!(reg.is_empty());
        assert!(reg.get("minLength").is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut reg = CheckRegistry::new();
        assert!(reg.insert("probe", always("FIRST")).is_none());
        assert!(reg.insert("probe", always("SECOND")).is_some());

        assert_eq!(reg.len(), 1);
        let err = reg.get("probe").unwrap().call(&ctx()).unwrap_err();
        assert_eq!(err.key, "SECOND");
    }

    #[test]
    fn test_lookup_is_exact() {
        let mut reg = CheckRegistry::new();
        reg.insert("minLength", always("A"));
        assert!(reg.contains("minLength"));
        assert!(!reg.contains("minlength"));
        assert!(!reg.contains("minLength "));
    }

    #[test]
    fn test_names_sorted_and_remove() {
        let mut reg = CheckRegistry::new();
        reg.insert("b", always("B"));
        reg.insert("a", always("A"));
        assert_eq!(reg.names(), vec!["a", "b"]);

        assert!(reg.remove("a").is_some());
        assert!(reg.remove("a").is_none());
        assert_eq!(reg.names(), vec!["b"]);
    }
}
