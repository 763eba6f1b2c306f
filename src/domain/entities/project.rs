use crate::domain::values::category::Category;
use serde::Serialize;

/// A catalog entry. Catalog data is compiled in, so fields borrow `'static` strs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub symbol: &'static str,
    pub name: &'static str,
    pub category: Category,
}

impl Project {
    pub const fn new(symbol: &'static str, name: &'static str, category: Category) -> Self {
        Self {
            symbol,
            name,
            category,
        }
    }

    /// Case-insensitive substring match on name or symbol.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.symbol.to_lowercase().contains(&needle)
    }
}
