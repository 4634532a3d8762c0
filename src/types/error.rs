use thiserror::Error;

use super::{Operator, RuleType};

/// Errors raised when assembling a [`RuleSet`](super::RuleSet) from
/// caller-provided rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("rule type '{rule_type}' is used by more than one rule")]
    DuplicateRuleType { rule_type: RuleType },

    #[error("duplicate rule id '{id}'")]
    DuplicateRuleId { id: String },

    #[error("operator '{operator}' is not allowed for rule '{id}' of type '{rule_type}'")]
    IllegalOperator {
        id: String,
        rule_type: RuleType,
        operator: Operator,
    },

    #[error("rule id must not be empty")]
    EmptyRuleId,
}

/// A string did not name any known rule type or operator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownTagError {
    kind: &'static str,
    value: String,
}

impl UnknownTagError {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
