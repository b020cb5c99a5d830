//! UnitCatalog - Read-only table of unit definitions keyed by name

mod unit;

pub use unit::UnitDefinition;

use crate::config::ConfigError;
use std::collections::HashMap;

/// Immutable lookup table of unit types.
///
/// Evaluations only ever borrow the catalog, so one instance can be shared
/// across any number of concurrent evaluations.
#[derive(Debug, Clone, Default)]
pub struct UnitCatalog {
    units: HashMap<String, UnitDefinition>,
}

impl UnitCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        UnitCatalog::default()
    }

    /// The built-in 19-unit reference table
    pub fn reference() -> Result<Self, ConfigError> {
        crate::config::default_catalog()
    }

    /// Add or replace a unit definition, returning the previous entry
    pub fn insert(&mut self, unit: UnitDefinition) -> Option<UnitDefinition> {
        self.units.insert(unit.name.clone(), unit)
    }

    /// Builder-style insert
    pub fn with_unit(mut self, unit: UnitDefinition) -> Self {
        self.insert(unit);
        self
    }

    /// Look up a unit by name
    pub fn get(&self, name: &str) -> Option<&UnitDefinition> {
        self.units.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterate over all definitions (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = &UnitDefinition> {
        self.units.values()
    }

    /// Unit names sorted alphabetically
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.units.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl FromIterator<UnitDefinition> for UnitCatalog {
    fn from_iter<I: IntoIterator<Item = UnitDefinition>>(iter: I) -> Self {
        let mut catalog = UnitCatalog::new();
        for unit in iter {
            catalog.insert(unit);
        }
        catalog
    }
}
