use std::fmt;
use std::str::FromStr;

use super::error::UnknownTagError;

/// The kind of eligibility condition a rule expresses.
///
/// The set is closed: every variant has exactly one entry in the
/// [catalog](crate::catalog), and variants are declared in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RuleType {
    SpecificCollections,
    ProductTags,
    SpecificProducts,
    ProductSubscribed,
    SpecificDiscountCodes,
    CartValueRange,
}

impl RuleType {
    /// All rule types in catalog declaration order.
    pub const ALL: [RuleType; 6] = [
        RuleType::SpecificCollections,
        RuleType::ProductTags,
        RuleType::SpecificProducts,
        RuleType::ProductSubscribed,
        RuleType::SpecificDiscountCodes,
        RuleType::CartValueRange,
    ];

    /// Stable snake_case identifier, e.g. `"specific_collections"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleType::SpecificCollections => "specific_collections",
            RuleType::ProductTags => "product_tags",
            RuleType::SpecificProducts => "specific_products",
            RuleType::ProductSubscribed => "product_subscribed",
            RuleType::SpecificDiscountCodes => "specific_discount_codes",
            RuleType::CartValueRange => "cart_value_range",
        }
    }

    /// Human-readable label shown in the type selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            RuleType::SpecificCollections => "Specific collections",
            RuleType::ProductTags => "Product tags",
            RuleType::SpecificProducts => "Specific products",
            RuleType::ProductSubscribed => "Product subscribed",
            RuleType::SpecificDiscountCodes => "Specific discount codes",
            RuleType::CartValueRange => "Cart value range",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleType {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTagError::new("rule type", s))
    }
}
