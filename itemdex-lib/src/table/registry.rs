//! Attribute column discovery

use std::collections::HashMap;

use crate::model::{ItemRecord, is_excluded};

use super::Column;

/// Assigns stable column ordinals to attribute names.
///
/// The first registration of a name hands out the next free ordinal,
/// counting from 1; every later registration returns the same ordinal.
/// Ordinals therefore follow first-seen order across the scan, which
/// keeps the column layout stable for a given record set.
///
/// # Example
///
/// ```
/// use itemdex_lib::table::AttributeRegistry;
///
/// let mut registry = AttributeRegistry::new();
/// assert_eq!(registry.register("atk"), Some(1));
/// assert_eq!(registry.register("def"), Some(2));
/// assert_eq!(registry.register("atk"), Some(1));
/// assert_eq!(registry.register("menu"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttributeRegistry {
    ordinals: HashMap<String, usize>,
    names: Vec<String>,
}

impl AttributeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` and returns its ordinal.
    ///
    /// Excluded control fields get no ordinal; the check applies on
    /// every attempt, whatever part of a record the name came from.
    pub fn register(&mut self, name: &str) -> Option<usize> {
        if is_excluded(name) {
            return None;
        }
        if let Some(&ordinal) = self.ordinals.get(name) {
            return Some(ordinal);
        }
        let ordinal = self.names.len() + 1;
        self.names.push(name.to_string());
        self.ordinals.insert(name.to_string(), ordinal);
        Some(ordinal)
    }

    /// Ordinal previously assigned to `name`, if any.
    pub fn ordinal(&self, name: &str) -> Option<usize> {
        self.ordinals.get(name).copied()
    }

    /// Registers every attribute name a record carries.
    ///
    /// Direct attributes are taken first, then resistances, then
    /// susceptibilities, matching the order their values land in rows.
    pub fn scan(&mut self, item: &ItemRecord) {
        for attribute in item.direct_attributes() {
            self.register(&attribute.name);
        }
        for entry in item.resistances() {
            self.register(&entry.attribute);
        }
        for entry in item.susceptibilities() {
            self.register(&entry.attribute);
        }
    }

    /// Discovered columns in ordinal order.
    pub fn columns(&self) -> Vec<Column> {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| Column {
                name: name.clone(),
                ordinal: index + 1,
            })
            .collect()
    }

    /// Number of discovered columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EXCLUDED_ATTRIBUTES;

    #[test]
    fn test_register_assigns_ordinals_in_first_seen_order() {
        let mut registry = AttributeRegistry::new();
        assert_eq!(registry.register("atk"), Some(1));
        assert_eq!(registry.register("def"), Some(2));
        assert_eq!(registry.register("rate"), Some(3));
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = AttributeRegistry::new();
        registry.register("atk");
        registry.register("def");
        assert_eq!(registry.register("atk"), Some(1));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_register_refuses_every_excluded_name() {
        let mut registry = AttributeRegistry::new();
        for name in EXCLUDED_ATTRIBUTES {
            assert_eq!(registry.register(name), None);
            assert_eq!(registry.register(name), None);
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_exclusion_does_not_burn_ordinals() {
        let mut registry = AttributeRegistry::new();
        registry.register("atk");
        registry.register("quantity");
        assert_eq!(registry.register("def"), Some(2));
    }

    #[test]
    fn test_ordinal_lookup_without_registration() {
        let mut registry = AttributeRegistry::new();
        registry.register("atk");
        assert_eq!(registry.ordinal("atk"), Some(1));
        assert_eq!(registry.ordinal("def"), None);
    }

    #[test]
    fn test_scan_takes_directs_then_resistances_then_susceptibilities() {
        let item = ItemRecord::new("fire sword")
            .with_susceptibility("ice", "50")
            .with_resistance("fire", "10")
            .with_attribute("atk", "9");
        let mut registry = AttributeRegistry::new();
        registry.scan(&item);
        assert_eq!(registry.ordinal("atk"), Some(1));
        assert_eq!(registry.ordinal("fire"), Some(2));
        assert_eq!(registry.ordinal("ice"), Some(3));
    }

    #[test]
    fn test_columns_snapshot() {
        let mut registry = AttributeRegistry::new();
        registry.register("atk");
        registry.register("def");
        let columns = registry.columns();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].name, "atk");
        assert_eq!(columns[0].ordinal, 1);
        assert_eq!(columns[1].name, "def");
        assert_eq!(columns[1].ordinal, 2);
    }
}
