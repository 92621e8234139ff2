//! Spending categories and the ordered catalog that drives summary output.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{RecordError, RecordResult};

/// One entry of the category catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub key: String,
    pub name: String,
    /// Display color, usually `#RRGGBB`
    pub color: String,
}

impl CategoryDefinition {
    pub fn new(key: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Static, ordered list of valid categories.
///
/// The order here is the order of category summary output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCatalog {
    categories: Vec<CategoryDefinition>,
}

impl CategoryCatalog {
    /// Build a catalog, rejecting duplicate keys
    pub fn new(categories: Vec<CategoryDefinition>) -> RecordResult<Self> {
        let mut seen = HashSet::new();
        for c in &categories {
            if !seen.insert(c.key.as_str()) {
                return Err(RecordError::DuplicateCategory(c.key.clone()));
            }
        }
        Ok(Self { categories })
    }

    /// Built-in catalog used when the configuration does not supply one
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                CategoryDefinition::new("purchases", "Purchases", "#5636D3"),
                CategoryDefinition::new("food", "Food", "#FF872C"),
                CategoryDefinition::new("salary", "Salary", "#12A454"),
                CategoryDefinition::new("car", "Car", "#E83F5B"),
                CategoryDefinition::new("leisure", "Leisure", "#26195C"),
                CategoryDefinition::new("studies", "Studies", "#9C001A"),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryDefinition> {
        self.categories.iter()
    }

    pub fn get(&self, key: &str) -> Option<&CategoryDefinition> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
