use eligo::RuleEditor;

const SEED: &str = r#"
# Summer promo eligibility
rule rule_1: specific_collections contains_any [summer2024, "new-arrivals"]
rule rule_2: cart_value_range is_between (25, 200)
rule rule_3: product_subscribed no
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut editor = RuleEditor::from_dsl(SEED).expect("failed to load seed");
    println!("loaded: {}", editor.rules());

    let rules = editor.add_rule();
    println!("after add: {}", rules);
    for option in editor.rule_type_options(None) {
        let mark = if option.disabled { "x" } else { " " };
        println!("  [{mark}] {}", option.name);
    }
}
