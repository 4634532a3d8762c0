use crate::Rule;

/// The result of parsing seed notation, before rule-set checks.
#[derive(Debug)]
pub struct ParsedRuleSet {
    pub rules: Vec<Rule>,
}
