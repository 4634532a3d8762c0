use std::fmt;
use std::str::FromStr;

use super::error::UnknownTagError;

/// Comparison a rule applies to its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operator {
    ContainsAny,
    IsNot,
    EqualsAnything,
    Yes,
    No,
    IsEqualOrGreater,
    IsBetween,
    IsLessThan,
}

/// Semantic class of an [`Operator`].
///
/// Inclusion operators narrow eligibility by requiring a match, exclusion
/// operators by requiring its absence. Range operators take part in neither
/// and are exempt from exclusivity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    Inclusion,
    Exclusion,
    Range,
}

impl Operator {
    /// All operators in declaration order.
    pub const ALL: [Operator; 8] = [
        Operator::ContainsAny,
        Operator::IsNot,
        Operator::EqualsAnything,
        Operator::Yes,
        Operator::No,
        Operator::IsEqualOrGreater,
        Operator::IsBetween,
        Operator::IsLessThan,
    ];

    /// Stable snake_case identifier, e.g. `"is_not"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::ContainsAny => "contains_any",
            Operator::IsNot => "is_not",
            Operator::EqualsAnything => "equals_anything",
            Operator::Yes => "yes",
            Operator::No => "no",
            Operator::IsEqualOrGreater => "is_equal_or_greater",
            Operator::IsBetween => "is_between",
            Operator::IsLessThan => "is_less_than",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Operator::ContainsAny => "contains any",
            Operator::IsNot => "is not",
            Operator::EqualsAnything => "equals anything",
            Operator::Yes => "yes",
            Operator::No => "no",
            Operator::IsEqualOrGreater => "is equal or greater than",
            Operator::IsBetween => "is between",
            Operator::IsLessThan => "is less than",
        }
    }

    #[must_use]
    pub const fn class(self) -> OperatorClass {
        match self {
            Operator::ContainsAny | Operator::Yes | Operator::EqualsAnything => {
                OperatorClass::Inclusion
            }
            Operator::IsNot | Operator::No => OperatorClass::Exclusion,
            Operator::IsEqualOrGreater | Operator::IsBetween | Operator::IsLessThan => {
                OperatorClass::Range
            }
        }
    }

    #[must_use]
    pub const fn is_inclusion(self) -> bool {
        matches!(self.class(), OperatorClass::Inclusion)
    }

    #[must_use]
    pub const fn is_exclusion(self) -> bool {
        matches!(self.class(), OperatorClass::Exclusion)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownTagError::new("operator", s))
    }
}
