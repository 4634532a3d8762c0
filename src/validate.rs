use crate::exclusivity::EXCLUSIVE_GROUPS;
use crate::types::Conflict;
use crate::{Rule, RuleType, ValidationResult};

/// Check a rule set for conflicting inclusion rules.
///
/// Groups are checked in registry order; each group with more than one
/// inclusion rule contributes one conflict. Never fails.
pub fn validate(rules: &[Rule]) -> ValidationResult {
    let conflicts: Vec<Conflict> = EXCLUSIVE_GROUPS
        .iter()
        .filter_map(|group| {
            let including: Vec<RuleType> = rules
                .iter()
                .filter(|r| group.contains(r.rule_type) && r.operator.is_inclusion())
                .map(|r| r.rule_type)
                .collect();
            (including.len() > 1).then(|| Conflict::new(including))
        })
        .collect();

    if !conflicts.is_empty() {
        tracing::debug!(conflicts = conflicts.len(), "rule set has inclusion conflicts");
    }
    ValidationResult::new(conflicts)
}
