//! Consistency engine for promotional eligibility rule sets.
//!
//! A [`RuleSet`] holds at most one [`Rule`] per [`RuleType`], kept sorted by
//! catalog priority. The [`catalog`] and [`exclusivity`] tables drive which
//! operators a rule may take, [`available_operators`] narrows them when an
//! exclusivity group already has an inclusion rule, and [`validate`] reports
//! groups where more than one rule asserts inclusion. [`RuleEditor`] applies
//! edits and hands back immutable snapshots.

pub mod catalog;
mod compile;
mod editor;
mod error;
pub mod exclusivity;
pub mod lifecycle;
pub mod parse;
mod resolve;
mod sort;
mod types;
mod validate;

pub use editor::{RuleEditor, RuleEditorBuilder};
pub use error::EligoError;
pub use resolve::{available_operators, operator_options};
pub use sort::sort_by_priority;
pub use types::{
    Conflict, Operator, OperatorClass, Rule, RuleSet, RuleSetBuilder, RuleSetError, RuleType,
    RuleValue, SelectOption, UnknownTagError, ValidationResult,
};
pub use validate::validate;

/// Value choices for `rule_type`; empty for types without a bounded catalog.
#[must_use]
pub fn options_for_type(rule_type: RuleType) -> &'static [SelectOption] {
    catalog::options_for_type(rule_type)
}
