use crate::{catalog, Rule};

/// Order rules by their type's catalog priority, lowest first.
///
/// The sort is stable, so sorting an already sorted slice keeps it as is.
#[must_use]
pub fn sort_by_priority(rules: &[Rule]) -> Vec<Rule> {
    let mut sorted = rules.to_vec();
    sort_in_place(&mut sorted);
    sorted
}

pub(crate) fn sort_in_place(rules: &mut [Rule]) {
    rules.sort_by_key(|r| catalog::priority(r.rule_type));
}
