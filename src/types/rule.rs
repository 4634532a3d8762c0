use std::fmt;

use super::{Operator, RuleType, RuleValue};

/// One eligibility condition.
///
/// The `id` is assigned when the rule is created and stays fixed across type,
/// operator, and value edits.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub rule_type: RuleType,
    pub operator: Operator,
    pub value: RuleValue,
}

impl Rule {
    pub fn new(
        id: impl Into<String>,
        rule_type: RuleType,
        operator: Operator,
        value: impl Into<RuleValue>,
    ) -> Self {
        Self {
            id: id.into(),
            rule_type,
            operator,
            value: value.into(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} {}",
            self.id, self.rule_type, self.operator, self.value
        )
    }
}
