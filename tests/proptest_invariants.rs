
use std::collections::HashSet;

use eligo::exclusivity::group_containing;
use eligo::{
    available_operators, catalog, lifecycle, sort_by_priority, validate, Rule, RuleEditor, RuleSet,
    RuleType,
};
use proptest::prelude::*;
use strategies::{arb_edit, arb_rule_set, arb_rules, arb_safe_edit, Edit};

fn apply(editor: &mut RuleEditor, edit: &Edit) {
    let current = editor.rules();
    match edit {
        Edit::Add => {
            editor.add_rule();
        }
        Edit::ChangeType(t, ty) => {
            editor.change_type(&t.resolve(&current), *ty);
        }
        Edit::ChangeOperator(t, op) => {
            editor.change_operator(&t.resolve(&current), *op);
        }
        Edit::ChangeValue(t, v) => {
            editor.change_value(&t.resolve(&current), v.clone());
        }
        Edit::RemoveItem(t, item) => {
            editor.remove_value_item(&t.resolve(&current), item);
        }
        Edit::Delete(t) => {
            editor.delete_rule(&t.resolve(&current));
        }
        Edit::DeleteAt(i) => {
            editor.delete_rule_at(*i);
        }
    }
}

fn priorities(rules: &[Rule]) -> Vec<u32> {
    rules.iter().map(|r| catalog::priority(r.rule_type)).collect()
}

fn is_well_formed(rules: &RuleSet) -> Result<(), TestCaseError> {
    let types: HashSet<RuleType> = rules.iter().map(|r| r.rule_type).collect();
    prop_assert_eq!(types.len(), rules.len(), "duplicate rule type in {}", rules);
    let ids: HashSet<&str> = rules.iter().map(|r| r.id.as_str()).collect();
    prop_assert_eq!(ids.len(), rules.len(), "duplicate rule id in {}", rules);
    let p = priorities(rules.rules());
    prop_assert!(p.windows(2).all(|w| w[0] <= w[1]), "unsorted: {}", rules);
    for rule in rules {
        prop_assert!(
            catalog::is_legal(rule.rule_type, rule.operator),
            "illegal operator in {}",
            rule
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn sort_is_idempotent(rules in arb_rules()) {
        let once = sort_by_priority(&rules);
        let twice = sort_by_priority(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_is_ascending_permutation(rules in arb_rules()) {
        let sorted = sort_by_priority(&rules);
        prop_assert_eq!(sorted.len(), rules.len());
        let p = priorities(&sorted);
        prop_assert!(p.windows(2).all(|w| w[0] <= w[1]));
        for rule in &rules {
            prop_assert!(sorted.contains(rule));
        }
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn resolver_offers_legal_operators_in_catalog_order(rules in arb_rule_set()) {
        for rule in &rules {
            let others: Vec<Rule> = rules.iter().filter(|r| r.id != rule.id).cloned().collect();
            let offered: Vec<&str> = available_operators(rule, &others).iter().map(|o| o.id).collect();
            let legal: Vec<&str> = catalog::legal_operators(rule.rule_type)
                .iter()
                .map(|op| op.as_str())
                .filter(|id| offered.contains(id))
                .collect();
            prop_assert_eq!(&offered, &legal);
        }
    }

    #[test]
    fn resolver_excludes_when_group_is_claimed(rules in arb_rule_set()) {
        for rule in &rules {
            let others: Vec<Rule> = rules.iter().filter(|r| r.id != rule.id).cloned().collect();
            let offered = available_operators(rule, &others);
            let claimed = group_containing(rule.rule_type)
                .is_some_and(|g| g.has_foreign_inclusion(rule.rule_type, &others));
            if claimed {
                prop_assert!(offered
                    .iter()
                    .all(|o| o.id.parse::<eligo::Operator>().is_ok_and(|op| op.is_exclusion())));
            } else {
                prop_assert_eq!(offered.len(), catalog::legal_operators(rule.rule_type).len());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn validator_is_pure(rules in arb_rule_set()) {
        let a = validate(rules.rules());
        let b = validate(rules.rules());
        prop_assert_eq!(a.is_valid(), a.errors().is_empty());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn validator_flags_only_inclusion_clashes(rules in arb_rule_set()) {
        let result = validate(rules.rules());
        for conflict in result.conflicts() {
            prop_assert!(conflict.rule_types().len() > 1);
            for t in conflict.rule_types() {
                let rule = rules.iter().find(|r| r.rule_type == *t).unwrap();
                prop_assert!(rule.operator.is_inclusion());
                prop_assert!(group_containing(*t).is_some());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn edits_keep_rule_set_well_formed(
        seed in arb_rule_set(),
        edits in prop::collection::vec(arb_edit(), 0..25),
    ) {
        let mut editor = RuleEditor::with_rules(seed);
        for edit in &edits {
            apply(&mut editor, edit);
            is_well_formed(&editor.rules())?;
        }
    }

    #[test]
    fn safe_edits_never_create_conflicts(edits in prop::collection::vec(arb_safe_edit(), 0..25)) {
        let mut editor = RuleEditor::new();
        for edit in &edits {
            apply(&mut editor, edit);
            prop_assert!(editor.validate().is_valid(), "after {:?}: {}", edit, editor.rules());
        }
    }

    #[test]
    fn ids_are_never_reused(edits in prop::collection::vec(arb_edit(), 0..40)) {
        let mut editor = RuleEditor::new();
        let mut retired: HashSet<String> = HashSet::new();
        for edit in &edits {
            let before: HashSet<String> = editor.rules().iter().map(|r| r.id.clone()).collect();
            apply(&mut editor, edit);
            let after: HashSet<String> = editor.rules().iter().map(|r| r.id.clone()).collect();
            for id in &after {
                prop_assert!(!retired.contains(id), "id {} came back after deletion", id);
            }
            retired.extend(before.difference(&after).cloned());
        }
    }

    #[test]
    fn transitions_do_not_touch_input(seed in arb_rule_set(), ty in strategies::arb_rule_type()) {
        let before = seed.clone();
        let _ = lifecycle::add_rule(&seed, || "fresh".to_owned());
        if let Some(first) = seed.rules().first() {
            let _ = lifecycle::change_type(&seed, &first.id, ty);
            let _ = lifecycle::delete_rule(&seed, &first.id);
        }
        prop_assert_eq!(seed, before);
    }
}
