//! Seed notation for rule sets.
//!
//! ```text
//! # comments run to end of line
//! rule rule_1: specific_collections contains_any [summer2024, "new-arrivals"]
//! rule rule_2: cart_value_range is_between (10, 99.5)
//! rule rule_3: product_subscribed yes
//! ```

mod error;
mod grammar;
mod parser;

pub use error::ParseError;
pub use parser::ParsedRuleSet;

/// Parse seed notation into a [`ParsedRuleSet`].
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not valid seed notation.
pub fn parse(input: &str) -> Result<ParsedRuleSet, ParseError> {
    use winnow::Parser;
    grammar::parse_ruleset
        .parse(input)
        .map_err(|e| ParseError::new(e.inner().to_string(), e.offset()))
}
