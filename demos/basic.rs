use eligo::{Operator, RuleEditor, RuleSetBuilder, RuleType, RuleValue};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let rules = RuleSetBuilder::new()
        .rule(
            "rule_1",
            RuleType::SpecificCollections,
            Operator::ContainsAny,
            RuleValue::items(["summer2024"]),
        )
        .rule("rule_2", RuleType::CartValueRange, Operator::IsEqualOrGreater, 50.0)
        .build()
        .expect("seed rules are well-formed");

    let mut editor = RuleEditor::with_rules(rules);

    // Adds product_tags, then specific_products forced to "is not".
    editor.add_rule();
    let rules = editor.add_rule();

    for rule in rules.iter() {
        let choices: Vec<&str> = editor
            .operator_options(&rule.id)
            .unwrap_or_default()
            .iter()
            .map(|o| o.name)
            .collect();
        println!("{rule}  (operators: {})", choices.join(" | "));
    }

    println!("{}", editor.validate());
}
