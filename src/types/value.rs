use std::fmt;

/// The value a rule compares against.
///
/// Which variant is active depends on the rule's type and operator. The
/// engine never checks that pairing; callers supply a matching shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RuleValue {
    /// Selected identifiers for multi-select rule types, in selection order.
    Items(Vec<String>),
    /// Inclusive `(low, high)` bounds for `is_between`.
    Range(f64, f64),
    /// A single threshold.
    Amount(f64),
    /// No value, for boolean-style rules.
    Empty,
}

impl RuleValue {
    /// Build an item list from anything yielding string-likes.
    pub fn items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RuleValue::Items(items.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn as_items(&self) -> Option<&[String]> {
        match self {
            RuleValue::Items(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_amount(&self) -> Option<f64> {
        match self {
            RuleValue::Amount(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_range(&self) -> Option<(f64, f64)> {
        match self {
            RuleValue::Range(low, high) => Some((*low, *high)),
            _ => None,
        }
    }

    /// `true` for [`RuleValue::Empty`] and for an empty item list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            RuleValue::Items(items) => items.is_empty(),
            RuleValue::Empty => true,
            RuleValue::Range(..) | RuleValue::Amount(_) => false,
        }
    }
}

impl From<f64> for RuleValue {
    fn from(v: f64) -> Self {
        RuleValue::Amount(v)
    }
}

impl From<(f64, f64)> for RuleValue {
    fn from((low, high): (f64, f64)) -> Self {
        RuleValue::Range(low, high)
    }
}

impl From<Vec<String>> for RuleValue {
    fn from(v: Vec<String>) -> Self {
        RuleValue::Items(v)
    }
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleValue::Items(items) => write!(f, "[{}]", items.join(", ")),
            RuleValue::Range(low, high) => write!(f, "({low}, {high})"),
            RuleValue::Amount(v) => write!(f, "{v}"),
            RuleValue::Empty => write!(f, "null"),
        }
    }
}
