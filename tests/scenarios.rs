use std::sync::Arc;

use eligo::{Operator, RuleEditor, RuleSet, RuleSetBuilder, RuleType, RuleValue};

fn initial_rules() -> RuleSet {
    RuleSetBuilder::new()
        .rule(
            "rule_1",
            RuleType::SpecificCollections,
            Operator::ContainsAny,
            RuleValue::items(["summer2024"]),
        )
        .rule("rule_2", RuleType::CartValueRange, Operator::IsEqualOrGreater, 50.0)
        .build()
        .unwrap()
}

fn types(rules: &RuleSet) -> Vec<RuleType> {
    rules.iter().map(|r| r.rule_type).collect()
}

#[test]
fn add_rule_picks_product_tags() {
    let mut editor = RuleEditor::with_rules(initial_rules());
    let rules = editor.add_rule();

    assert_eq!(
        types(&rules),
        [
            RuleType::SpecificCollections,
            RuleType::ProductTags,
            RuleType::CartValueRange
        ]
    );
    let added = &rules.rules()[1];
    assert_eq!(added.operator, Operator::ContainsAny);
    assert_eq!(added.value, RuleValue::Items(vec![]));
}

#[test]
fn change_type_to_specific_products() {
    let mut editor = RuleEditor::with_rules(initial_rules());
    let rules = editor.change_type("rule_1", RuleType::SpecificProducts);

    let rule = rules.get("rule_1").unwrap();
    assert_eq!(rule.rule_type, RuleType::SpecificProducts);
    assert_eq!(rule.operator, Operator::ContainsAny);
    assert_eq!(rule.value, RuleValue::Items(vec![]));
    assert_eq!(
        types(&rules),
        [RuleType::SpecificProducts, RuleType::CartValueRange]
    );
}

#[test]
fn added_products_rule_is_forced_to_exclusion() {
    let mut editor = RuleEditor::with_rules(initial_rules());
    editor.add_rule();
    let rules = editor.add_rule();

    let products = rules
        .iter()
        .find(|r| r.rule_type == RuleType::SpecificProducts)
        .unwrap();
    assert_eq!(products.operator, Operator::IsNot);
    assert!(editor.validate().is_valid());
}

#[test]
fn add_rule_on_full_set_is_noop() {
    let mut editor = RuleEditor::new();
    for _ in 0..RuleType::ALL.len() {
        editor.add_rule();
    }
    let before = editor.rules();
    assert_eq!(before.len(), 6);
    assert!(!editor.can_add_rule());

    let after = editor.add_rule();
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(*before, *after);
}

#[test]
fn change_type_to_present_type_is_noop() {
    let mut editor = RuleEditor::with_rules(initial_rules());
    let before = editor.rules();
    let after = editor.change_type("rule_1", RuleType::CartValueRange);
    assert!(Arc::ptr_eq(&before, &after));
}

#[test]
fn conflict_detected_and_cleared() {
    let rules = RuleSetBuilder::new()
        .rule(
            "a",
            RuleType::SpecificCollections,
            Operator::ContainsAny,
            RuleValue::items(["summer2024"]),
        )
        .rule(
            "b",
            RuleType::SpecificProducts,
            Operator::ContainsAny,
            RuleValue::items(["tshirt1"]),
        )
        .build()
        .unwrap();

    let mut editor = RuleEditor::with_rules(rules);
    let result = editor.validate();
    assert!(!result.is_valid());
    assert_eq!(result.errors().len(), 1);
    assert_eq!(
        result.errors()[0],
        "You cannot include by both specific collections and specific products. \
         Choose one way to include items, and use exclusion operators (is not) for the other."
    );

    editor.change_operator("b", Operator::IsNot);
    assert!(editor.validate().is_valid());

    editor.change_operator("b", Operator::ContainsAny);
    editor.change_operator("a", Operator::IsNot);
    assert!(editor.validate().is_valid());
}

#[test]
fn operator_choices_follow_the_group() {
    let mut editor = RuleEditor::with_rules(initial_rules());
    editor.add_rule();
    editor.add_rule();

    let ids = |opts: Vec<eligo::SelectOption>| opts.into_iter().map(|o| o.id).collect::<Vec<_>>();
    let products_id = editor
        .rules()
        .iter()
        .find(|r| r.rule_type == RuleType::SpecificProducts)
        .map(|r| r.id.clone())
        .unwrap();

    // Products is excluding, so collections may still include.
    assert_eq!(
        ids(editor.operator_options("rule_1").unwrap()),
        ["contains_any", "is_not"]
    );
    assert_eq!(ids(editor.operator_options(&products_id).unwrap()), ["is_not"]);

    editor.change_operator("rule_1", Operator::IsNot);
    assert_eq!(
        ids(editor.operator_options(&products_id).unwrap()),
        ["contains_any", "is_not"]
    );
}

#[test]
fn switching_cart_value_to_between_leaves_value_to_caller() {
    let mut editor = RuleEditor::with_rules(initial_rules());
    let rules = editor.change_operator("rule_2", Operator::IsBetween);
    assert_eq!(rules.get("rule_2").unwrap().value, RuleValue::Amount(50.0));

    let rules = editor.change_value("rule_2", RuleValue::Range(50.0, 150.0));
    assert_eq!(
        rules.get("rule_2").unwrap().value.as_range(),
        Some((50.0, 150.0))
    );
}

#[test]
fn delete_then_add_reuses_type_not_id() {
    let mut editor = RuleEditor::with_rules(initial_rules());
    editor.delete_rule_at(0);
    let rules = editor.add_rule();

    assert_eq!(
        types(&rules),
        [RuleType::SpecificCollections, RuleType::CartValueRange]
    );
    assert_eq!(rules.rules()[0].id, "rule_3");
}

#[test]
fn badge_removal() {
    let mut editor = RuleEditor::with_rules(initial_rules());
    editor.change_value("rule_1", RuleValue::items(["summer2024", "bestsellers"]));
    let rules = editor.remove_value_item("rule_1", "summer2024");
    assert_eq!(
        rules.get("rule_1").unwrap().value,
        RuleValue::items(["bestsellers"])
    );
}

#[test]
fn discount_codes_keep_fixed_operator() {
    let mut editor = RuleEditor::with_rules(initial_rules());
    let rules = editor.change_type("rule_2", RuleType::SpecificDiscountCodes);
    let rule = rules.get("rule_2").unwrap();
    assert_eq!(rule.operator, Operator::ContainsAny);
    assert_eq!(
        editor.operator_options("rule_2").unwrap().len(),
        1
    );
    let before = editor.rules();
    let after = editor.change_operator("rule_2", Operator::IsNot);
    assert!(Arc::ptr_eq(&before, &after));
}

#[test]
fn value_catalogs() {
    assert_eq!(eligo::options_for_type(RuleType::SpecificCollections)[0].id, "summer2024");
    assert!(eligo::options_for_type(RuleType::CartValueRange).is_empty());
}
