use std::sync::Arc;

use crate::lifecycle;
use crate::{Operator, RuleSet, RuleType, RuleValue, SelectOption, ValidationResult};

const DEFAULT_ID_PREFIX: &str = "rule";

/// Configures a [`RuleEditor`].
#[derive(Debug, Default)]
pub struct RuleEditorBuilder {
    id_prefix: Option<String>,
    rules: RuleSet,
}

impl RuleEditorBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix for generated rule ids (`"{prefix}_{n}"`). Defaults to `"rule"`.
    #[must_use]
    pub fn id_prefix(mut self, prefix: &str) -> Self {
        self.id_prefix = Some(prefix.to_owned());
        self
    }

    /// Rules the editor starts from.
    #[must_use]
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn build(self) -> RuleEditor {
        let prefix = self
            .id_prefix
            .unwrap_or_else(|| DEFAULT_ID_PREFIX.to_owned());
        let ids = IdGenerator::new(prefix, &self.rules);
        RuleEditor {
            rules: Arc::new(self.rules),
            ids,
        }
    }
}

/// Holds the current rule set and applies edits to it.
///
/// Every applied edit swaps in a freshly allocated [`RuleSet`]; a rejected
/// edit leaves the current `Arc` in place, so `Arc::ptr_eq` on the returned
/// snapshots tells observers whether anything changed.
#[derive(Debug)]
pub struct RuleEditor {
    rules: Arc<RuleSet>,
    ids: IdGenerator,
}

impl Default for RuleEditor {
    fn default() -> Self {
        RuleEditorBuilder::new().build()
    }
}

impl RuleEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> RuleEditorBuilder {
        RuleEditorBuilder::new()
    }

    #[must_use]
    pub fn with_rules(rules: RuleSet) -> Self {
        RuleEditorBuilder::new().rules(rules).build()
    }

    /// Start an editor from seed notation.
    ///
    /// # Errors
    ///
    /// Returns [`EligoError`](crate::EligoError) if the seed does not parse or
    /// breaks a rule-set invariant.
    pub fn from_dsl(input: &str) -> Result<Self, crate::EligoError> {
        Ok(Self::with_rules(RuleSet::from_dsl(input)?))
    }

    /// The current snapshot.
    #[must_use]
    pub fn rules(&self) -> Arc<RuleSet> {
        Arc::clone(&self.rules)
    }

    pub fn add_rule(&mut self) -> Arc<RuleSet> {
        let ids = &mut self.ids;
        let next = lifecycle::add_rule(&self.rules, || ids.next(&self.rules));
        self.apply(next)
    }

    pub fn change_type(&mut self, id: &str, new_type: RuleType) -> Arc<RuleSet> {
        let next = lifecycle::change_type(&self.rules, id, new_type);
        self.apply(next)
    }

    pub fn change_operator(&mut self, id: &str, operator: Operator) -> Arc<RuleSet> {
        let next = lifecycle::change_operator(&self.rules, id, operator);
        self.apply(next)
    }

    pub fn change_value(&mut self, id: &str, value: RuleValue) -> Arc<RuleSet> {
        let next = lifecycle::change_value(&self.rules, id, value);
        self.apply(next)
    }

    pub fn remove_value_item(&mut self, id: &str, item: &str) -> Arc<RuleSet> {
        let next = lifecycle::remove_value_item(&self.rules, id, item);
        self.apply(next)
    }

    pub fn delete_rule(&mut self, id: &str) -> Arc<RuleSet> {
        let next = lifecycle::delete_rule(&self.rules, id);
        self.apply(next)
    }

    pub fn delete_rule_at(&mut self, index: usize) -> Arc<RuleSet> {
        let next = lifecycle::delete_rule_at(&self.rules, index);
        self.apply(next)
    }

    #[must_use]
    pub fn can_add_rule(&self) -> bool {
        self.rules.can_add_rule()
    }

    /// Operator choices for the rule with `id`, or `None` if it does not exist.
    #[must_use]
    pub fn operator_options(&self, id: &str) -> Option<Vec<SelectOption>> {
        self.rules.operator_options_for(id)
    }

    #[must_use]
    pub fn rule_type_options(&self, editing: Option<&str>) -> Vec<SelectOption> {
        self.rules.rule_type_options(editing)
    }

    pub fn validate(&self) -> ValidationResult {
        self.rules.validate()
    }

    fn apply(&mut self, next: Option<RuleSet>) -> Arc<RuleSet> {
        if let Some(rules) = next {
            self.rules = Arc::new(rules);
        }
        Arc::clone(&self.rules)
    }
}

/// Hands out `"{prefix}_{n}"` ids with `n` strictly increasing.
///
/// The counter starts past the largest numeric suffix among the seed ids that
/// share the prefix, so deleted ids are never handed out again.
#[derive(Debug)]
struct IdGenerator {
    prefix: String,
    next: u64,
}

impl IdGenerator {
    fn new(prefix: String, seed: &RuleSet) -> Self {
        let stem = format!("{prefix}_");
        let highest = seed
            .iter()
            .filter_map(|r| r.id.strip_prefix(&stem)?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            prefix,
            next: highest.saturating_add(1),
        }
    }

    fn next(&mut self, current: &RuleSet) -> String {
        loop {
            let id = format!("{}_{}", self.prefix, self.next);
            self.next = self.next.saturating_add(1);
            if current.get(&id).is_none() {
                return id;
            }
        }
    }
}
