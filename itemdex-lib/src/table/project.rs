//! Projection of item records into table rows

use log::debug;

use crate::model::ItemRecord;

use super::{AttributeRegistry, ItemRow, Row};

/// Projects one record into a row, registering any attribute name the
/// registry has not seen yet.
///
/// Unattainable records yield no row. They are skipped before any
/// registration, so in a combined scan-and-project pass their
/// attributes add no columns; a prior [`AttributeRegistry::scan`] pass
/// may still have registered them.
///
/// Direct attributes without a value produce no cell, and values under
/// excluded names are dropped along with their would-be columns.
pub fn project(item: &ItemRecord, registry: &mut AttributeRegistry) -> Option<ItemRow> {
    if item.is_unattainable() {
        debug!("unattainable item: {}", item.name());
        return None;
    }

    let mut cells = Row::new();
    for attribute in item.direct_attributes() {
        let Some(value) = attribute.value.as_deref() else {
            continue;
        };
        if let Some(ordinal) = registry.register(&attribute.name) {
            cells.set(ordinal, value);
        }
    }
    for entry in item.resistances() {
        if let Some(ordinal) = registry.register(&entry.attribute) {
            cells.set(ordinal, entry.value.clone());
        }
    }
    for entry in item.susceptibilities() {
        if let Some(ordinal) = registry.register(&entry.attribute) {
            cells.set(ordinal, entry.value.clone());
        }
    }

    Some(ItemRow {
        name: item.name().to_string(),
        item_type: item.item_type().cloned(),
        cells,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemType;

    #[test]
    fn test_project_maps_values_to_registered_ordinals() {
        let mut registry = AttributeRegistry::new();
        registry.register("atk");
        registry.register("rate");

        let item = ItemRecord::new("dagger")
            .with_type("sword", "dagger")
            .with_attribute("rate", "4")
            .with_attribute("atk", "7");
        let row = project(&item, &mut registry).unwrap();

        assert_eq!(row.name, "dagger");
        assert_eq!(row.cell(1), "7");
        assert_eq!(row.cell(2), "4");
        assert_eq!(
            row.item_type,
            Some(ItemType {
                class: "sword".into(),
                subclass: "dagger".into()
            })
        );
    }

    #[test]
    fn test_project_registers_unseen_attributes() {
        let mut registry = AttributeRegistry::new();
        let item = ItemRecord::new("torch").with_attribute("lifesteal", "0.1");
        let row = project(&item, &mut registry).unwrap();
        assert_eq!(registry.ordinal("lifesteal"), Some(1));
        assert_eq!(row.cell(1), "0.1");
    }

    #[test]
    fn test_project_skips_unattainable_before_registration() {
        let mut registry = AttributeRegistry::new();
        let item = ItemRecord::new("ghost blade")
            .with_attribute("haunt", "9")
            .unattainable();
        assert!(project(&item, &mut registry).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_project_resistances_land_in_cells() {
        let mut registry = AttributeRegistry::new();
        let item = ItemRecord::new("magma blade")
            .with_attribute("atk", "20")
            .with_resistance("fire", "15")
            .with_susceptibility("ice", "40");
        let row = project(&item, &mut registry).unwrap();
        assert_eq!(row.cell(2), "15");
        assert_eq!(row.cell(3), "40");
    }

    #[test]
    fn test_project_valueless_attributes_make_no_cell() {
        let mut registry = AttributeRegistry::new();
        let item = ItemRecord::new("relic").with_marker("undroppable");
        let row = project(&item, &mut registry).unwrap();
        assert!(row.cells.is_empty());
        // Discovery of value-less names is the scan pass's job.
        assert_eq!(registry.ordinal("undroppable"), None);
    }

    #[test]
    fn test_project_empty_record_still_renders() {
        let mut registry = AttributeRegistry::new();
        let row = project(&ItemRecord::new("pebble"), &mut registry).unwrap();
        assert_eq!(row.name, "pebble");
        assert!(row.item_type.is_none());
        assert!(row.cells.is_empty());
    }
}
