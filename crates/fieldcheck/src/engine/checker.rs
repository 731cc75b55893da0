//! The traversal engine.

use super::naming::{self, DisplayName};
use super::options::{Options, SerialNames};
use super::path::FieldPath;
use super::registry::{Check, CheckRegistry};
use super::rule::parse_rules;
use crate::foundation::{CheckError, Context, Describe, ErrorsMap, Inspect, Shape};

// ============================================================================
// CHECKER
// ============================================================================

/// Walks records and runs the checks their fields declare.
///
/// A `Checker` is configured once and then reused: `check` takes `&self`,
/// registration takes `&mut self`, so a configured checker can be shared
/// (for instance behind an `Arc`) without any internal locking.
///
/// # Examples
///
/// ```
/// use fieldcheck::{Checker, Describe, checks, foundation::keys};
///
/// #[derive(Describe)]
/// struct Login {
///     #[check(valid = "minLength 1, maxLength 200")]
///     name: String,
///     #[check(valid = "password")]
///     password: String,
/// }
///
/// let mut checker = Checker::new();
/// checker.add_checks(checks::bundled());
///
/// let errors = checker.check(&Login { name: String::new(), password: "Jump".into() });
/// assert_eq!(errors.error_keys("name"), vec![keys::VAL_TO_SHORT]);
/// assert_eq!(errors.error_keys("password"), vec![keys::VAL_TO_SHORT]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Checker {
    registry: CheckRegistry,
    options: Options,
}

impl Checker {
    /// Creates a checker with no registered checks and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a checker with no registered checks.
    pub fn with_options(options: Options) -> Self {
        Self {
            registry: CheckRegistry::new(),
            options,
        }
    }

    /// Starts a builder.
    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::default()
    }

    // ── registration ────────────────────────────────────────────────────────

    /// Registers `check` under `name`, replacing any earlier registration.
    pub fn add_check<F>(&mut self, name: impl Into<String>, check: F)
    where
        F: Fn(&Context<'_>) -> Result<(), CheckError> + Send + Sync + 'static,
    {
        self.registry.insert(name, Check::new(check));
    }

    /// Registers an already shared check. `None` is ignored.
    pub fn add_shared_check(&mut self, name: impl Into<String>, check: Option<Check>) {
        if let Some(check) = check {
            self.registry.insert(name, check);
        }
    }

    /// Registers every `(name, check)` pair in order.
    pub fn add_checks<I, N>(&mut self, checks: I)
    where
        I: IntoIterator<Item = (N, Check)>,
        N: Into<String>,
    {
        for (name, check) in checks {
            self.registry.insert(name, check);
        }
    }

    /// Unregisters a check, returning it if it was registered.
    pub fn remove_check(&mut self, name: &str) -> Option<Check> {
        self.registry.remove(name)
    }

    /// Returns true if `name` is registered.
    pub fn has_check(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Registered check names, sorted.
    pub fn check_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    /// The registered checks.
    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    // ── options ─────────────────────────────────────────────────────────────

    /// Current options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replaces the options. Takes effect on the next `check` call.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    // ── validation ──────────────────────────────────────────────────────────

    /// Walks `input` and returns every failure, keyed by field path.
    ///
    /// An empty report means the input is valid. The same input checked
    /// against the same registry always yields an equal report.
    pub fn check<T: Inspect + ?Sized>(&self, input: &T) -> ErrorsMap {
        let mut errors = ErrorsMap::new();
        let mut path = FieldPath::new();

        tracing::debug!(registered = self.registry.len(), "check started");
        self.walk(&input, &mut path, &mut errors);
        tracing::debug!(
            paths = errors.len(),
            errors = errors.total_error_count(),
            "check finished"
        );

        errors
    }

    /// Like [`check`](Self::check), returning `Err` if anything failed.
    pub fn validate<T: Inspect + ?Sized>(&self, input: &T) -> Result<(), ErrorsMap> {
        self.check(input).into_result()
    }

    // ========================================================================
    // TRAVERSAL
    // ========================================================================

    fn walk(&self, value: &dyn Inspect, path: &mut FieldPath, errors: &mut ErrorsMap) {
        match value.shape() {
            Shape::Record(record) => self.walk_record(record, path, errors),
            Shape::Optional(Some(inner)) => self.walk(inner, path, errors),
            Shape::Sequence(items) => {
                for (index, item) in items.enumerate() {
                    let mark = path.push(index);
                    self.walk(item, path, errors);
                    path.pop(mark);
                }
            }
            Shape::Optional(None) | Shape::Scalar => {}
        }
    }

    fn walk_record(&self, record: &dyn Describe, path: &mut FieldPath, errors: &mut ErrorsMap) {
        let policy: Option<&SerialNames> = self.options.serial_names.as_ref();

        for field in record.describe() {
            let name = match naming::resolve(&field, policy) {
                DisplayName::Name(name) => name,
                DisplayName::Skip => {
                    tracing::trace!(field = field.name(), parent = %path, "skipped field");
                    continue;
                }
            };

            let mark = path.push(name);

            if field.is_optional() && field.value().is_zero() {
                tracing::trace!(path = %path, "optional field is zero, skipped");
                path.pop(mark);
                continue;
            }

            if let Some(rules) = field.rules() {
                self.evaluate(rules, field.value(), path, errors);
            }
            self.walk(field.value(), path, errors);

            path.pop(mark);
        }
    }

    fn evaluate(&self, rules: &str, value: &dyn Inspect, path: &FieldPath, errors: &mut ErrorsMap) {
        let snapshot = value.snapshot();

        for rule in parse_rules(rules) {
            let Some(check) = self.registry.get(rule.name) else {
                tracing::debug!(check = rule.name, path = %path, "rule references an unregistered check");
                errors.add_error(path.as_str(), CheckError::not_defined());
                continue;
            };

            let ctx = Context::new(
                snapshot,
                rule.name,
                rule.argument_or_empty(),
                path.last(),
                path.as_str(),
            );
            tracing::trace!(check = rule.name, path = %path, value = %snapshot, "running check");

            if let Err(error) = check.call(&ctx) {
                errors.add_error(path.as_str(), error);
            }
        }
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Checker`].
///
/// ```
/// use fieldcheck::{Checker, SerialNames};
///
/// let checker = Checker::builder()
///     .serial_names(SerialNames::ignoring_skipped())
///     .bundled_checks()
///     .build();
/// assert!(checker.has_check("password"));
/// ```
#[derive(Debug, Default)]
#[must_use = "builder methods must be chained or built"]
pub struct CheckerBuilder {
    checker: Checker,
}

impl CheckerBuilder {
    /// Sets the options.
    pub fn options(mut self, options: Options) -> Self {
        self.checker.options = options;
        self
    }

    /// Reports fields under their serialization names.
    pub fn serial_names(mut self, serial_names: SerialNames) -> Self {
        self.checker.options.serial_names = Some(serial_names);
        self
    }

    /// Registers a check.
    pub fn check<F>(mut self, name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Context<'_>) -> Result<(), CheckError> + Send + Sync + 'static,
    {
        self.checker.add_check(name, check);
        self
    }

    /// Registers an already shared check.
    pub fn shared_check(mut self, name: impl Into<String>, check: Check) -> Self {
        self.checker.add_shared_check(name, Some(check));
        self
    }

    /// Registers the bundled checks under their conventional names.
    pub fn bundled_checks(mut self) -> Self {
        self.checker.add_checks(crate::checks::bundled());
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> Checker {
        self.checker
    }
}

// ============================================================================
// TESTS
// ============================================================================
