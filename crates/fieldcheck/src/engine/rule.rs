//! Parsing of rule strings such as `"minLength 1, maxLength 200"`.

/// One check invocation: a check name and at most one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule<'a> {
    /// Registered check name.
    pub name: &'a str,
    /// Raw argument text; checks parse it themselves.
    pub argument: Option<&'a str>,
}

impl<'a> Rule<'a> {
    /// Parses a single segment. A blank segment yields the empty check
    /// name, which no registry resolves.
    ///
    /// Tokens after the argument are dropped with a warning.
    pub fn parse(segment: &'a str) -> Self {
        let mut tokens = segment.split_whitespace();
        let name = tokens.next().unwrap_or_default();
        let argument = tokens.next();

        let extra = tokens.count();
        if extra > 0 {
            tracing::warn!(
                check = name,
                segment,
                extra,
                "rule carries more than one argument, extra tokens ignored"
            );
        }

        Self { name, argument }
    }

    /// The argument, or `""` when the rule has none.
    pub fn argument_or_empty(&self) -> &'a str {
        self.argument.unwrap_or_default()
    }
}

/// Splits a rule string on `,` and parses each segment in order. Empty
/// segments are kept so a stray comma surfaces as an undefined check.
///
/// # Examples
///
/// ```
/// use fieldcheck::engine::rule::{Rule, parse_rules};
///
/// let rules: Vec<_> = parse_rules("minLength 1, password").collect();
/// assert_eq!(rules[0], Rule { name: "minLength", argument: Some("1") });
/// assert_eq!(rules[1], Rule { name: "password", argument: None });
/// ```
pub fn parse_rules(rules: &str) -> impl Iterator<Item = Rule<'_>> {
    rules.split(',').map(Rule::parse)
}
