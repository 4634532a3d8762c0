//! Rule-type groups whose members may not simultaneously assert inclusion.

use crate::{Operator, Rule, RuleType};

/// A set of rule types of which at most one may carry an inclusion operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusivityGroup {
    members: &'static [RuleType],
}

impl ExclusivityGroup {
    #[must_use]
    pub const fn new(members: &'static [RuleType]) -> Self {
        Self { members }
    }

    #[must_use]
    pub fn members(&self) -> &'static [RuleType] {
        self.members
    }

    #[must_use]
    pub fn contains(&self, rule_type: RuleType) -> bool {
        self.members.contains(&rule_type)
    }

    /// Whether any rule in `rules` other than one of `rule_type` is a group
    /// member holding an inclusion operator.
    pub fn has_foreign_inclusion<'a>(
        &self,
        rule_type: RuleType,
        rules: impl IntoIterator<Item = &'a Rule>,
    ) -> bool {
        rules.into_iter().any(|r| {
            r.rule_type != rule_type && self.contains(r.rule_type) && r.operator.is_inclusion()
        })
    }
}

/// Groups must not overlap; checked in tests.
pub const EXCLUSIVE_GROUPS: &[ExclusivityGroup] = &[ExclusivityGroup::new(&[
    RuleType::SpecificCollections,
    RuleType::SpecificProducts,
])];

pub const INCLUSION_OPERATORS: &[Operator] = &[
    Operator::ContainsAny,
    Operator::Yes,
    Operator::EqualsAnything,
];

pub const EXCLUSION_OPERATORS: &[Operator] = &[Operator::IsNot, Operator::No];

/// The group containing `rule_type`, if any.
#[must_use]
pub fn group_containing(rule_type: RuleType) -> Option<&'static ExclusivityGroup> {
    EXCLUSIVE_GROUPS.iter().find(|g| g.contains(rule_type))
}
