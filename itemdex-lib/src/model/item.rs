//! Item records decoded from a category feed

use serde::Serialize;

/// Attribute names that never become table columns.
///
/// These are control fields for the game client rather than item data.
pub const EXCLUDED_ATTRIBUTES: [&str; 5] =
    ["max_quantity", "menu", "quantity", "unattainable", "use_sound"];

/// Whether an attribute name is blocked from column registration.
pub fn is_excluded(name: &str) -> bool {
    EXCLUDED_ATTRIBUTES.contains(&name)
}

/// Classification of an item, naming its sprite.
///
/// `class` is the sprite directory and `subclass` the sprite file stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemType {
    pub class: String,
    pub subclass: String,
}

/// A named entry from an item's `attributes` block.
///
/// Entries without a `value` attribute still take part in column
/// discovery, they just never produce a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectAttribute {
    pub name: String,
    pub value: Option<String>,
}

/// A damage-type modifier from a `resistance` or `susceptibility`
/// element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectEntry {
    pub attribute: String,
    pub value: String,
}

/// One decoded item record.
///
/// Attributes keep their document order; the table layer decides which
/// of them become columns. Control fields from [`EXCLUDED_ATTRIBUTES`]
/// are dropped on insertion, except that an `unattainable` marker set
/// to the exact string `true` flips the exclusion flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRecord {
    name: String,
    item_type: Option<ItemType>,
    directs: Vec<DirectAttribute>,
    resistances: Vec<EffectEntry>,
    susceptibilities: Vec<EffectEntry>,
    unattainable: bool,
}

impl ItemRecord {
    /// Creates an empty record with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The item's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's sprite classification, when the record carried one.
    pub fn item_type(&self) -> Option<&ItemType> {
        self.item_type.as_ref()
    }

    /// Direct attributes in document order.
    pub fn direct_attributes(&self) -> &[DirectAttribute] {
        &self.directs
    }

    /// Resistance entries in document order.
    pub fn resistances(&self) -> &[EffectEntry] {
        &self.resistances
    }

    /// Susceptibility entries in document order.
    pub fn susceptibilities(&self) -> &[EffectEntry] {
        &self.susceptibilities
    }

    /// Whether the item is flagged as unattainable in-game.
    pub fn is_unattainable(&self) -> bool {
        self.unattainable
    }

    /// Value of the first direct attribute named `name`.
    pub fn direct(&self, name: &str) -> Option<&str> {
        self.directs
            .iter()
            .find(|attribute| attribute.name == name)
            .and_then(|attribute| attribute.value.as_deref())
    }

    pub fn set_item_type(&mut self, item_type: ItemType) {
        self.item_type = Some(item_type);
    }

    /// Records a direct attribute, dropping control fields.
    ///
    /// An `unattainable` marker updates the exclusion flag instead of
    /// being stored; the last marker in the record wins.
    pub fn push_direct(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        if name == "unattainable" {
            self.unattainable = value.as_deref() == Some("true");
        }
        if is_excluded(&name) {
            return;
        }
        self.directs.push(DirectAttribute { name, value });
    }

    pub fn push_resistance(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        self.resistances.push(EffectEntry {
            attribute: attribute.into(),
            value: value.into(),
        });
    }

    pub fn push_susceptibility(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        self.susceptibilities.push(EffectEntry {
            attribute: attribute.into(),
            value: value.into(),
        });
    }

    pub fn set_unattainable(&mut self, unattainable: bool) {
        self.unattainable = unattainable;
    }

    // ========================================================================
    // Builder-style helpers
    // ========================================================================

    /// Sets the sprite classification.
    pub fn with_type(mut self, class: impl Into<String>, subclass: impl Into<String>) -> Self {
        self.set_item_type(ItemType {
            class: class.into(),
            subclass: subclass.into(),
        });
        self
    }

    /// Adds a direct attribute with a value.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_direct(name, Some(value.into()));
        self
    }

    /// Adds a value-less direct attribute.
    pub fn with_marker(mut self, name: impl Into<String>) -> Self {
        self.push_direct(name, None);
        self
    }

    /// Adds a resistance entry.
    pub fn with_resistance(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_resistance(attribute, value);
        self
    }

    /// Adds a susceptibility entry.
    pub fn with_susceptibility(
        mut self,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.push_susceptibility(attribute, value);
        self
    }

    /// Flags the record as unattainable.
    pub fn unattainable(mut self) -> Self {
        self.set_unattainable(true);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_direct_keeps_document_order() {
        let record = ItemRecord::new("club")
            .with_attribute("atk", "3")
            .with_marker("undroppable")
            .with_attribute("rate", "4");
        let names: Vec<&str> = record
            .direct_attributes()
            .iter()
            .map(|attribute| attribute.name.as_str())
            .collect();
        assert_eq!(names, ["atk", "undroppable", "rate"]);
    }

    #[test]
    fn test_push_direct_drops_control_fields() {
        let record = ItemRecord::new("money")
            .with_attribute("quantity", "1")
            .with_attribute("menu", "Use|use")
            .with_attribute("max_quantity", "2000000000")
            .with_attribute("use_sound", "coins-01")
            .with_attribute("atk", "1");
        assert_eq!(record.direct_attributes().len(), 1);
        assert_eq!(record.direct("atk"), Some("1"));
        assert_eq!(record.direct("quantity"), None);
    }

    #[test]
    fn test_unattainable_marker_sets_flag_without_storing() {
        let record = ItemRecord::new("rainbow beans").with_attribute("unattainable", "true");
        assert!(record.is_unattainable());
        assert!(record.direct_attributes().is_empty());
    }

    #[test]
    fn test_unattainable_requires_exact_true() {
        let record = ItemRecord::new("beans").with_attribute("unattainable", "TRUE");
        assert!(!record.is_unattainable());
        let record = ItemRecord::new("beans").with_marker("unattainable");
        assert!(!record.is_unattainable());
    }

    #[test]
    fn test_unattainable_last_marker_wins() {
        let record = ItemRecord::new("beans")
            .with_attribute("unattainable", "true")
            .with_attribute("unattainable", "false");
        assert!(!record.is_unattainable());
    }

    #[test]
    fn test_direct_returns_first_match() {
        let record = ItemRecord::new("sword")
            .with_attribute("atk", "5")
            .with_attribute("atk", "7");
        assert_eq!(record.direct("atk"), Some("5"));
    }
}
