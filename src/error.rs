use thiserror::Error;

use crate::parse::ParseError;
use crate::RuleSetError;

/// Unified error type covering seed parsing, rule-set checks, and I/O.
///
/// Returned by convenience methods like [`RuleSet::from_dsl()`](crate::RuleSet::from_dsl)
/// and [`RuleSet::from_file()`](crate::RuleSet::from_file).
#[derive(Debug, Error)]
pub enum EligoError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    RuleSet(#[from] RuleSetError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
