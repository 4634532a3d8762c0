use crate::exclusivity::group_containing;
use crate::{catalog, Operator, Rule, RuleType, SelectOption};

/// Operators a rule of `rule_type` may pick given the other rules in the set.
///
/// Returns the catalog's legal operators in catalog order, narrowed to the
/// exclusion operators when another member of the type's exclusivity group
/// already holds an inclusion operator. The result may be empty.
pub(crate) fn resolve_operators<'a>(
    rule_type: RuleType,
    other_rules: impl IntoIterator<Item = &'a Rule>,
) -> Vec<Operator> {
    let base = catalog::legal_operators(rule_type);
    let Some(group) = group_containing(rule_type) else {
        return base.to_vec();
    };
    if group.has_foreign_inclusion(rule_type, other_rules) {
        tracing::trace!(%rule_type, "inclusion claimed within group, offering exclusion only");
        return base.iter().copied().filter(|op| op.is_exclusion()).collect();
    }
    base.to_vec()
}

/// Operator a freshly created or retyped rule should start with.
///
/// Takes the first exclusion operator when the group already has a foreign
/// inclusion, otherwise the first available operator. `None` when the
/// resolver offers nothing; the caller picks the fallback.
pub(crate) fn initial_operator<'a>(
    rule_type: RuleType,
    other_rules: impl IntoIterator<Item = &'a Rule> + Clone,
) -> Option<Operator> {
    let forced = group_containing(rule_type)
        .filter(|g| g.has_foreign_inclusion(rule_type, other_rules.clone()))
        .and_then(|_| {
            catalog::legal_operators(rule_type)
                .iter()
                .copied()
                .find(|op| op.is_exclusion())
        });
    if forced.is_some() {
        return forced;
    }
    resolve_operators(rule_type, other_rules).first().copied()
}

/// Legal operator choices for `rule`, as selector options.
///
/// `other_rules` must not include `rule` itself.
#[must_use]
pub fn available_operators(rule: &Rule, other_rules: &[Rule]) -> Vec<SelectOption> {
    resolve_operators(rule.rule_type, other_rules)
        .into_iter()
        .map(operator_option)
        .collect()
}

/// Every operator with its label, in declaration order.
#[must_use]
pub fn operator_options() -> Vec<SelectOption> {
    Operator::ALL.into_iter().map(operator_option).collect()
}

fn operator_option(op: Operator) -> SelectOption {
    SelectOption::new(op.as_str(), op.label())
}
