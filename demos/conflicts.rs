use eligo::{Operator, RuleEditor, RuleSet};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let rules = RuleSet::from_dsl(
        "rule a: specific_collections contains_any [summer2024]\n\
         rule b: specific_products contains_any [tshirt1]",
    )
    .expect("failed to load seed");
    let mut editor = RuleEditor::with_rules(rules);

    let result = editor.validate();
    println!("{result}");
    for error in result.errors() {
        println!("  - {error}");
    }

    editor.change_operator("b", Operator::IsNot);
    println!("after switching b to 'is not': {}", editor.validate());
}
