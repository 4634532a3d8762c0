use std::collections::HashSet;

use crate::{catalog, Rule, RuleSet, RuleSetError};

/// Check caller-provided rules against the rule-set invariants and return
/// them priority-sorted.
pub(crate) fn compile(mut rules: Vec<Rule>) -> Result<RuleSet, RuleSetError> {
    check_ids(&rules)?;
    check_types(&rules)?;
    check_operators(&rules)?;
    crate::sort::sort_in_place(&mut rules);
    Ok(RuleSet { rules })
}

fn check_ids(rules: &[Rule]) -> Result<(), RuleSetError> {
    let mut seen = HashSet::new();
    for rule in rules {
        if rule.id.is_empty() {
            return Err(RuleSetError::EmptyRuleId);
        }
        if !seen.insert(rule.id.as_str()) {
            return Err(RuleSetError::DuplicateRuleId {
                id: rule.id.clone(),
            });
        }
    }
    Ok(())
}

fn check_types(rules: &[Rule]) -> Result<(), RuleSetError> {
    let mut seen = HashSet::new();
    for rule in rules {
        if !seen.insert(rule.rule_type) {
            return Err(RuleSetError::DuplicateRuleType {
                rule_type: rule.rule_type,
            });
        }
    }
    Ok(())
}

fn check_operators(rules: &[Rule]) -> Result<(), RuleSetError> {
    match rules
        .iter()
        .find(|r| !catalog::is_legal(r.rule_type, r.operator))
    {
        Some(rule) => Err(RuleSetError::IllegalOperator {
            id: rule.id.clone(),
            rule_type: rule.rule_type,
            operator: rule.operator,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use crate::{Operator, RuleSetBuilder, RuleSetError, RuleType, RuleValue};

    #[test]
    fn compile_sorts_by_priority() {
        let set = RuleSetBuilder::new()
            .rule("r2", RuleType::CartValueRange, Operator::IsLessThan, 20.0)
            .rule(
                "r1",
                RuleType::ProductTags,
                Operator::IsNot,
                RuleValue::items(["sale"]),
            )
            .build()
            .unwrap();
        let ids: Vec<&str> = set.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r1", "r2"]);
    }

    #[test]
    fn compile_duplicate_type() {
        let result = RuleSetBuilder::new()
            .rule("a", RuleType::ProductTags, Operator::ContainsAny, RuleValue::Items(vec![]))
            .rule("b", RuleType::ProductTags, Operator::IsNot, RuleValue::Items(vec![]))
            .build();
        assert_eq!(
            result.unwrap_err(),
            RuleSetError::DuplicateRuleType {
                rule_type: RuleType::ProductTags
            }
        );
    }

    #[test]
    fn compile_duplicate_id() {
        let result = RuleSetBuilder::new()
            .rule("a", RuleType::ProductTags, Operator::ContainsAny, RuleValue::Items(vec![]))
            .rule("a", RuleType::ProductSubscribed, Operator::No, RuleValue::Empty)
            .build();
        assert!(matches!(
            result,
            Err(RuleSetError::DuplicateRuleId { id }) if id == "a"
        ));
    }

    #[test]
    fn compile_empty_id() {
        let result = RuleSetBuilder::new()
            .rule("", RuleType::ProductSubscribed, Operator::No, RuleValue::Empty)
            .build();
        assert_eq!(result.unwrap_err(), RuleSetError::EmptyRuleId);
    }

    #[test]
    fn compile_illegal_operator() {
        let result = RuleSetBuilder::new()
            .rule("a", RuleType::CartValueRange, Operator::ContainsAny, 5.0)
            .build();
        assert!(matches!(
            result,
            Err(RuleSetError::IllegalOperator { operator: Operator::ContainsAny, .. })
        ));
    }

    #[test]
    fn compile_allows_conflicting_inclusions() {
        let set = RuleSetBuilder::new()
            .rule("a", RuleType::SpecificCollections, Operator::ContainsAny, RuleValue::Items(vec![]))
            .rule("b", RuleType::SpecificProducts, Operator::ContainsAny, RuleValue::Items(vec![]))
            .build()
            .unwrap();
        assert!(!set.validate().is_valid());
    }
}
