mod error;
mod operator;
mod option;
mod rule;
mod rule_type;
mod ruleset;
mod validation;
mod value;

pub use error::{RuleSetError, UnknownTagError};
pub use operator::{Operator, OperatorClass};
pub use option::SelectOption;
pub use rule::Rule;
pub use rule_type::RuleType;
pub use ruleset::{RuleSet, RuleSetBuilder};
pub use validation::{Conflict, ValidationResult};
pub use value::RuleValue;
