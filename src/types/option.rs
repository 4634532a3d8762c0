/// An entry in one of the editor's selectors: rule types, operators, or the
/// bounded value catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectOption {
    pub id: &'static str,
    pub name: &'static str,
    pub disabled: bool,
}

impl SelectOption {
    #[must_use]
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            disabled: false,
        }
    }

    #[must_use]
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
