//! Dynamic table model
//!
//! Categories do not share a fixed schema, so the column set is
//! discovered by scanning the records of the selected category. Each
//! record is then projected into the discovered column space, and the
//! resulting rows can be re-ordered with type-aware sorting.

mod project;
mod registry;
mod row;
mod sort;

pub use project::project;
pub use registry::AttributeRegistry;
pub use row::Row;
pub use sort::{SortColumn, SortOrder, SortState, compare_cells, sort_rows};

use serde::Serialize;

use crate::model::{ItemRecord, ItemType};

/// A discovered table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Attribute name, shown as the header.
    pub name: String,
    /// Stable ordinal assigned by the registry, counting from 1.
    pub ordinal: usize,
}

/// A projected item row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    /// The item's display name.
    pub name: String,
    /// Sprite classification, when the record carried one.
    pub item_type: Option<ItemType>,
    /// Attribute cells keyed by column ordinal.
    pub cells: Row,
}

impl ItemRow {
    /// Cell text under `ordinal`, empty when the item lacks the
    /// attribute.
    pub fn cell(&self, ordinal: usize) -> &str {
        self.cells.cell(ordinal)
    }

    /// The text a sort on `column` compares for this row.
    pub fn sort_text(&self, column: SortColumn) -> &str {
        match column {
            SortColumn::Name => &self.name,
            SortColumn::Attribute(ordinal) => self.cells.cell(ordinal),
        }
    }
}

/// A fully projected category table.
///
/// # Example
///
/// ```
/// use itemdex_lib::model::ItemRecord;
/// use itemdex_lib::table::{ItemTable, SortColumn, SortOrder};
///
/// let items = vec![
///     ItemRecord::new("wooden shield").with_attribute("def", "3"),
///     ItemRecord::new("studded shield").with_attribute("def", "12"),
/// ];
/// let mut table = ItemTable::build("shields", &items);
/// table.sort(SortColumn::Attribute(1), SortOrder::Descending);
/// assert_eq!(table.rows()[0].name, "studded shield");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ItemTable {
    category: String,
    columns: Vec<Column>,
    rows: Vec<ItemRow>,
}

impl ItemTable {
    /// Projects `items` into a table.
    ///
    /// Column discovery scans every record, including unattainable
    /// ones, so the column set does not depend on which records end up
    /// rendered. Unattainable records are then dropped from the row
    /// set.
    pub fn build(category: impl Into<String>, items: &[ItemRecord]) -> Self {
        let mut registry = AttributeRegistry::new();
        for item in items {
            registry.scan(item);
        }
        let rows = items
            .iter()
            .filter_map(|item| project(item, &mut registry))
            .collect();
        Self {
            category: category.into(),
            columns: registry.columns(),
            rows,
        }
    }

    /// The category this table was built from.
    ///
    /// Drivers that fetch concurrently can compare this against the
    /// current selection and drop tables that arrive late.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Discovered columns in ordinal order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Projected rows in their current order.
    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    /// Finds a column by exact attribute name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Re-orders rows in place. The sort is stable, so rows that
    /// compare equal keep their current relative order.
    pub fn sort(&mut self, column: SortColumn, order: SortOrder) {
        sort_rows(&mut self.rows, column, order);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn shields() -> Vec<ItemRecord> {
        vec![
            ItemRecord::new("wooden shield")
                .with_type("shield", "wooden_shield")
                .with_attribute("def", "3")
                .with_resistance("fire", "10"),
            ItemRecord::new("lion shield")
                .with_type("shield", "lion_shield")
                .with_attribute("def", "8")
                .with_attribute("min_level", "20")
                .with_resistance("fire", "20"),
        ]
    }

    #[test]
    fn test_build_discovers_columns_in_first_seen_order() {
        let table = ItemTable::build("shields", &shields());
        let names: Vec<&str> = table
            .columns()
            .iter()
            .map(|column| column.name.as_str())
            .collect();
        assert_eq!(names, ["def", "fire", "min_level"]);
        assert_eq!(table.columns()[0].ordinal, 1);
        assert_eq!(table.columns()[2].ordinal, 3);
    }

    #[test]
    fn test_build_projects_cells_under_matching_ordinals() {
        let table = ItemTable::build("shields", &shields());
        let fire = table.column("fire").unwrap().ordinal;
        assert_eq!(table.rows()[0].cell(fire), "10");
        assert_eq!(table.rows()[1].cell(fire), "20");
        let min_level = table.column("min_level").unwrap().ordinal;
        assert_eq!(table.rows()[0].cell(min_level), "");
        assert_eq!(table.rows()[1].cell(min_level), "20");
    }

    #[test]
    fn test_build_drops_unattainable_rows() {
        let mut items = shields();
        items.push(
            ItemRecord::new("prototype shield")
                .with_attribute("def", "99")
                .with_attribute("unattainable", "true"),
        );
        let table = ItemTable::build("shields", &items);
        assert_eq!(table.len(), 2);
        assert!(table.rows().iter().all(|row| row.name != "prototype shield"));
    }

    #[test]
    fn test_unattainable_only_attribute_still_makes_a_column() {
        let items = vec![
            ItemRecord::new("common shield").with_attribute("def", "3"),
            ItemRecord::new("lost shield")
                .with_attribute("legend", "yes")
                .with_attribute("unattainable", "true"),
        ];
        let table = ItemTable::build("shields", &items);
        let legend = table.column("legend").unwrap();
        assert_eq!(legend.ordinal, 2);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].cell(legend.ordinal), "");
    }

    #[test]
    fn test_sort_by_attribute_column() {
        let mut table = ItemTable::build("shields", &shields());
        let def = table.column("def").unwrap().ordinal;
        table.sort(SortColumn::Attribute(def), SortOrder::Descending);
        assert_eq!(table.rows()[0].name, "lion shield");
        table.sort(SortColumn::Attribute(def), SortOrder::Ascending);
        assert_eq!(table.rows()[0].name, "wooden shield");
    }

    #[test]
    fn test_sort_by_name_column() {
        let mut table = ItemTable::build("shields", &shields());
        table.sort(SortColumn::Name, SortOrder::Ascending);
        assert_eq!(table.rows()[0].name, "lion shield");
    }

    #[test]
    fn test_category_tag_is_kept() {
        let table = ItemTable::build("shields", &[]);
        assert_eq!(table.category(), "shields");
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }
}
