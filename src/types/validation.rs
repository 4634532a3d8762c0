use std::fmt;

use super::RuleType;

/// Two or more rules of one exclusivity group both asserting inclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Conflict {
    rule_types: Vec<RuleType>,
}

impl Conflict {
    pub(crate) fn new(rule_types: Vec<RuleType>) -> Self {
        Self { rule_types }
    }

    /// Conflicting rule types, in rule-set order.
    #[must_use]
    pub fn rule_types(&self) -> &[RuleType] {
        &self.rule_types
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self
            .rule_types
            .iter()
            .map(|t| t.label().to_lowercase())
            .collect();
        write!(
            f,
            "You cannot include by both {}. Choose one way to include items, \
             and use exclusion operators (is not) for the other.",
            labels.join(" and ")
        )
    }
}

/// Outcome of [`validate`](crate::validate).
///
/// With the `serde` feature it serializes as `is_valid`, `errors` (the
/// user-facing messages) and `conflicts`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[must_use]
pub struct ValidationResult {
    conflicts: Vec<Conflict>,
}

impl ValidationResult {
    pub(crate) fn new(conflicts: Vec<Conflict>) -> Self {
        Self { conflicts }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// User-facing messages, one per conflicting group, in registry order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.conflicts.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationResult", 3)?;
        state.serialize_field("is_valid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors())?;
        state.serialize_field("conflicts", &self.conflicts)?;
        state.end()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "valid");
        }
        write!(f, "invalid ({} conflicts)", self.conflicts.len())
    }
}
