use std::fmt;

use super::error::RuleSetError;
use super::option::SelectOption;
use super::rule::Rule;
use super::rule_type::RuleType;
use super::validation::ValidationResult;
use super::{Operator, RuleValue};

/// Builder for constructing a [`RuleSet`] from known rules.
///
/// # Example
///
/// ```
/// use eligo::{Operator, RuleSetBuilder, RuleType, RuleValue};
///
/// let rules = RuleSetBuilder::new()
///     .rule("rule_2", RuleType::CartValueRange, Operator::IsEqualOrGreater, 50.0)
///     .rule(
///         "rule_1",
///         RuleType::SpecificCollections,
///         Operator::ContainsAny,
///         RuleValue::items(["summer2024"]),
///     )
///     .build()
///     .unwrap();
/// assert_eq!(rules.rules()[0].id, "rule_1");
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: Vec<Rule>,
}

impl RuleSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rule(
        mut self,
        id: &str,
        rule_type: RuleType,
        operator: Operator,
        value: impl Into<RuleValue>,
    ) -> Self {
        self.rules.push(Rule::new(id, rule_type, operator, value));
        self
    }

    #[must_use]
    pub fn push(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Check the collected rules and sort them by priority.
    ///
    /// # Errors
    ///
    /// Returns [`RuleSetError`] on an empty or duplicate id, a rule type used
    /// twice, or an operator outside its type's legal set.
    pub fn build(self) -> Result<RuleSet, RuleSetError> {
        crate::compile::compile(self.rules)
    }
}

/// An ordered collection of rules, at most one per [`RuleType`], always sorted
/// by ascending type priority.
///
/// A rule set may hold conflicting inclusion rules; those are reported by
/// [`validate()`](Self::validate), not rejected.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Rule>", into = "Vec<Rule>")
)]
pub struct RuleSet {
    pub(crate) rules: Vec<Rule>,
}

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.rules.iter().position(|r| r.id == id)
    }

    #[must_use]
    pub fn contains_type(&self, rule_type: RuleType) -> bool {
        self.rules.iter().any(|r| r.rule_type == rule_type)
    }

    /// First rule type in catalog order that no rule uses yet.
    #[must_use]
    pub fn next_unused_type(&self) -> Option<RuleType> {
        RuleType::ALL
            .into_iter()
            .find(|&t| !self.contains_type(t))
    }

    #[must_use]
    pub fn can_add_rule(&self) -> bool {
        self.next_unused_type().is_some()
    }

    pub fn validate(&self) -> ValidationResult {
        crate::validate::validate(&self.rules)
    }

    /// Operator choices for the rule with `id`, resolved against every other
    /// rule in the set. Returns `None` if no such rule exists.
    #[must_use]
    pub fn operator_options_for(&self, id: &str) -> Option<Vec<SelectOption>> {
        let rule = self.get(id)?;
        let others: Vec<Rule> = self.rules.iter().filter(|r| r.id != id).cloned().collect();
        Some(crate::available_operators(rule, &others))
    }

    /// Every rule type as a selector option, disabled when a rule other than
    /// `editing` already uses it.
    #[must_use]
    pub fn rule_type_options(&self, editing: Option<&str>) -> Vec<SelectOption> {
        RuleType::ALL
            .into_iter()
            .map(|t| {
                let taken = self
                    .rules
                    .iter()
                    .any(|r| r.rule_type == t && Some(r.id.as_str()) != editing);
                SelectOption::new(t.as_str(), t.label()).with_disabled(taken)
            })
            .collect()
    }

    /// Parse seed notation into a rule set.
    ///
    /// # Errors
    ///
    /// Returns [`EligoError`](crate::EligoError) on a syntax error or when the
    /// parsed rules break a rule-set invariant.
    pub fn from_dsl(input: &str) -> Result<Self, crate::EligoError> {
        let parsed = crate::parse::parse(input)?;
        let rules = crate::compile::compile(parsed.rules)?;
        Ok(rules)
    }

    /// Read a seed file and parse it into a rule set.
    ///
    /// # Errors
    ///
    /// Returns [`EligoError`](crate::EligoError) on I/O, syntax, or invariant
    /// failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::EligoError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_dsl(&input)
    }
}

impl TryFrom<Vec<Rule>> for RuleSet {
    type Error = RuleSetError;

    fn try_from(rules: Vec<Rule>) -> Result<Self, Self::Error> {
        crate::compile::compile(rules)
    }
}

impl From<RuleSet> for Vec<Rule> {
    fn from(set: RuleSet) -> Self {
        set.rules
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types: Vec<&str> = self.rules.iter().map(|r| r.rule_type.as_str()).collect();
        write!(f, "RuleSet({} rules: [{}])", self.rules.len(), types.join(", "))
    }
}
