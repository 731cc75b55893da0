//! Display-name resolution for record fields.

use super::options::SerialNames;
use crate::foundation::FieldDescriptor;

/// Serialization name marking a field as skipped.
pub const SKIP_MARKER: &str = "-";

/// Outcome of resolving a field's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayName<'a> {
    /// Report the field under this name.
    Name(&'a str),
    /// Leave the field out of the walk entirely.
    Skip,
}

/// Resolves the name a field is reported under.
///
/// Without a policy the intrinsic name is used. With one, the portion of the
/// serialization name before the first `,` wins unless it is missing or
/// empty. A `-` name skips the field when the policy ignores skipped fields
/// and otherwise falls back to the intrinsic name.
pub fn resolve<'a>(field: &FieldDescriptor<'a>, policy: Option<&SerialNames>) -> DisplayName<'a> {
    let Some(policy) = policy else {
        return DisplayName::Name(field.name());
    };

    let serial = field
        .serial_name()
        .map(|raw| raw.split_once(',').map_or(raw, |(name, _)| name));

    match serial {
        Some(SKIP_MARKER) if policy.ignore_skipped => DisplayName::Skip,
        Some(name) if !name.is_empty() && name != SKIP_MARKER => DisplayName::Name(name),
        _ => DisplayName::Name(field.name()),
    }
}
