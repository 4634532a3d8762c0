//! Pure rule-set transitions.
//!
//! Each function takes the current [`RuleSet`] and returns the next one, or
//! `None` when the edit is a no-op under the editing policy (unknown id,
//! duplicate type, illegal operator, nothing left to add). The input is never
//! modified.

use crate::resolve::initial_operator;
use crate::sort::sort_in_place;
use crate::{catalog, Operator, Rule, RuleSet, RuleType, RuleValue};

/// Append a rule of the first unused type, with an operator picked by the
/// resolver and the catalog default value.
///
/// `next_id` is only called when a rule is actually created. An empty id, or
/// one already present in the set, makes the edit a no-op.
pub fn add_rule(rules: &RuleSet, next_id: impl FnOnce() -> String) -> Option<RuleSet> {
    let Some(rule_type) = rules.next_unused_type() else {
        tracing::debug!("every rule type is in use, nothing to add");
        return None;
    };
    let id = next_id();
    if id.is_empty() || rules.get(&id).is_some() {
        tracing::debug!(id = %id, "id empty or already taken, nothing added");
        return None;
    }
    let operator = initial_operator(rule_type, rules.iter())
        .unwrap_or_else(|| catalog::default_operator(rule_type));
    let rule = Rule::new(id, rule_type, operator, catalog::default_value(rule_type));
    tracing::debug!(id = %rule.id, %rule_type, %operator, "rule added");

    let mut next = rules.rules.clone();
    next.push(rule);
    Some(finish(next))
}

/// Retype the rule with `id` in place, keeping its id.
///
/// Operator and value are reset: to the catalog defaults when the new type
/// has no operator selector, otherwise to the resolver's pick against the
/// other rules and the catalog default value. If the resolver offers nothing
/// the current operator is kept when still legal for the new type.
pub fn change_type(rules: &RuleSet, id: &str, new_type: RuleType) -> Option<RuleSet> {
    if rules.contains_type(new_type) {
        tracing::debug!(id, %new_type, "rule type already in use, ignoring type change");
        return None;
    }
    let Some(index) = rules.position(id) else {
        tracing::debug!(id, "no such rule, ignoring type change");
        return None;
    };

    let current = rules.rules[index].operator;
    let operator = if catalog::shows_operator_selector(new_type) {
        initial_operator(new_type, rules.iter().filter(|r| r.id != id))
            .or_else(|| catalog::is_legal(new_type, current).then_some(current))
            .unwrap_or_else(|| catalog::default_operator(new_type))
    } else {
        catalog::default_operator(new_type)
    };

    let mut next = rules.rules.clone();
    let rule = &mut next[index];
    rule.rule_type = new_type;
    rule.operator = operator;
    rule.value = catalog::default_value(new_type);
    tracing::debug!(id, %new_type, %operator, "rule retyped");
    Some(finish(next))
}

/// Replace the operator of the rule with `id`, leaving its value untouched.
///
/// Operators outside the rule type's legal set are ignored. Operators the
/// resolver would currently hide are accepted; the resulting conflict shows
/// up in validation.
pub fn change_operator(rules: &RuleSet, id: &str, operator: Operator) -> Option<RuleSet> {
    let Some(index) = rules.position(id) else {
        tracing::debug!(id, "no such rule, ignoring operator change");
        return None;
    };
    let rule_type = rules.rules[index].rule_type;
    if !catalog::is_legal(rule_type, operator) {
        tracing::debug!(id, %rule_type, %operator, "operator not legal for type, ignoring");
        return None;
    }

    let mut next = rules.rules.clone();
    next[index].operator = operator;
    tracing::debug!(id, %operator, "operator changed");
    Some(finish(next))
}

/// Replace the value of the rule with `id`. The value's shape is not checked.
pub fn change_value(rules: &RuleSet, id: &str, value: RuleValue) -> Option<RuleSet> {
    let Some(index) = rules.position(id) else {
        tracing::debug!(id, "no such rule, ignoring value change");
        return None;
    };

    let mut next = rules.rules.clone();
    next[index].value = value;
    tracing::debug!(id, "value changed");
    Some(finish(next))
}

/// Drop `item` from the item list of the rule with `id`.
///
/// No-op unless the rule's value is an item list containing `item`.
pub fn remove_value_item(rules: &RuleSet, id: &str, item: &str) -> Option<RuleSet> {
    let current = rules.get(id)?.value.as_items()?;
    if !current.iter().any(|v| v == item) {
        return None;
    }
    let remaining = current.iter().filter(|v| *v != item).cloned().collect();
    change_value(rules, id, RuleValue::Items(remaining))
}

pub fn delete_rule(rules: &RuleSet, id: &str) -> Option<RuleSet> {
    let Some(index) = rules.position(id) else {
        tracing::debug!(id, "no such rule, nothing to delete");
        return None;
    };
    delete_rule_at(rules, index)
}

pub fn delete_rule_at(rules: &RuleSet, index: usize) -> Option<RuleSet> {
    if index >= rules.len() {
        tracing::debug!(index, len = rules.len(), "index out of range, nothing to delete");
        return None;
    }

    let mut next = rules.rules.clone();
    let removed = next.remove(index);
    tracing::debug!(id = %removed.id, rule_type = %removed.rule_type, "rule deleted");
    Some(finish(next))
}

fn finish(mut rules: Vec<Rule>) -> RuleSet {
    sort_in_place(&mut rules);
    RuleSet { rules }
}
