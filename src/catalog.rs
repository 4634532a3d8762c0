//! Static per-type configuration: priority, operators, defaults, and the
//! option sets that feed the value selector.

use crate::{Operator, RuleType, RuleValue, SelectOption};

/// Catalog row for one [`RuleType`].
#[derive(Debug)]
pub struct CatalogEntry {
    pub rule_type: RuleType,
    /// Sort rank; lower sorts first. Only relative order matters.
    pub priority: u32,
    pub shows_operator: bool,
    pub default_operator: Operator,
    pub default_value: RuleValue,
    pub allows_multiple_values: bool,
    /// Legal operators in display order. The first entry is what a new rule
    /// picks when nothing constrains it.
    pub operators: &'static [Operator],
    pub options: &'static [SelectOption],
}

pub const COLLECTIONS: &[SelectOption] = &[
    SelectOption::new("summer2024", "Summer 2024"),
    SelectOption::new("winter2024", "Winter 2024"),
    SelectOption::new("bestsellers", "Bestsellers"),
    SelectOption::new("new-arrivals", "New Arrivals"),
    SelectOption::new("clearance", "Clearance Items"),
    SelectOption::new("automated-collection", "Automated Collection"),
];

pub const PRODUCTS: &[SelectOption] = &[
    SelectOption::new("tshirt1", "Cotton T-Shirt"),
    SelectOption::new("jeans1", "Slim Fit Jeans"),
    SelectOption::new("hoodie1", "Zip-up Hoodie"),
    SelectOption::new("sneakers1", "Classic Sneakers"),
];

pub const TAGS: &[SelectOption] = &[
    SelectOption::new("new", "New Arrival"),
    SelectOption::new("sale", "On Sale"),
    SelectOption::new("trending", "Trending"),
    SelectOption::new("limited", "Limited Edition"),
];

pub const DISCOUNT_CODES: &[SelectOption] = &[
    SelectOption::new("summer10", "SUMMER10"),
    SelectOption::new("welcome20", "WELCOME20"),
    SelectOption::new("flash50", "FLASH50"),
];

const MEMBERSHIP_OPERATORS: &[Operator] = &[Operator::ContainsAny, Operator::IsNot];

// Indexed by `RuleType::index()`; rows must stay in declaration order.
static CATALOG: [CatalogEntry; 6] = [
    CatalogEntry {
        rule_type: RuleType::SpecificCollections,
        priority: 1,
        shows_operator: true,
        default_operator: Operator::ContainsAny,
        default_value: RuleValue::Items(Vec::new()),
        allows_multiple_values: true,
        operators: MEMBERSHIP_OPERATORS,
        options: COLLECTIONS,
    },
    CatalogEntry {
        rule_type: RuleType::ProductTags,
        priority: 2,
        shows_operator: true,
        default_operator: Operator::ContainsAny,
        default_value: RuleValue::Items(Vec::new()),
        allows_multiple_values: true,
        operators: MEMBERSHIP_OPERATORS,
        options: TAGS,
    },
    CatalogEntry {
        rule_type: RuleType::SpecificProducts,
        priority: 3,
        shows_operator: true,
        default_operator: Operator::ContainsAny,
        default_value: RuleValue::Items(Vec::new()),
        allows_multiple_values: true,
        operators: MEMBERSHIP_OPERATORS,
        options: PRODUCTS,
    },
    CatalogEntry {
        rule_type: RuleType::ProductSubscribed,
        priority: 4,
        shows_operator: true,
        default_operator: Operator::Yes,
        default_value: RuleValue::Empty,
        allows_multiple_values: false,
        operators: &[Operator::Yes, Operator::No],
        options: &[],
    },
    CatalogEntry {
        rule_type: RuleType::SpecificDiscountCodes,
        priority: 5,
        shows_operator: false,
        default_operator: Operator::ContainsAny,
        default_value: RuleValue::Items(Vec::new()),
        allows_multiple_values: true,
        operators: &[Operator::ContainsAny],
        options: DISCOUNT_CODES,
    },
    CatalogEntry {
        rule_type: RuleType::CartValueRange,
        priority: 6,
        shows_operator: true,
        default_operator: Operator::IsEqualOrGreater,
        default_value: RuleValue::Amount(0.0),
        allows_multiple_values: false,
        operators: &[
            Operator::IsEqualOrGreater,
            Operator::IsBetween,
            Operator::IsLessThan,
        ],
        options: &[],
    },
];

#[must_use]
pub fn entry(rule_type: RuleType) -> &'static CatalogEntry {
    &CATALOG[rule_type.index()]
}

#[must_use]
pub fn priority(rule_type: RuleType) -> u32 {
    entry(rule_type).priority
}

#[must_use]
pub fn legal_operators(rule_type: RuleType) -> &'static [Operator] {
    entry(rule_type).operators
}

#[must_use]
pub fn is_legal(rule_type: RuleType, operator: Operator) -> bool {
    legal_operators(rule_type).contains(&operator)
}

#[must_use]
pub fn default_operator(rule_type: RuleType) -> Operator {
    entry(rule_type).default_operator
}

#[must_use]
pub fn default_value(rule_type: RuleType) -> RuleValue {
    entry(rule_type).default_value.clone()
}

/// `false` when the type's operator is fixed (discount codes).
#[must_use]
pub fn shows_operator_selector(rule_type: RuleType) -> bool {
    entry(rule_type).shows_operator
}

#[must_use]
pub fn allows_multiple_values(rule_type: RuleType) -> bool {
    entry(rule_type).allows_multiple_values
}

/// Whether a rule of this type and operator takes a value at all.
#[must_use]
pub fn accepts_value(rule_type: RuleType, operator: Operator) -> bool {
    rule_type != RuleType::ProductSubscribed && operator != Operator::EqualsAnything
}

/// Value choices for the type; empty for types without a bounded catalog.
#[must_use]
pub fn options_for_type(rule_type: RuleType) -> &'static [SelectOption] {
    entry(rule_type).options
}
