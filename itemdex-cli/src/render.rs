//! Text and JSON output for catalogue tables

use itemdex_lib::model::{Category, GameVersion};
use itemdex_lib::table::{ItemTable, SortColumn};
use unicode_width::UnicodeWidthStr;

/// Renders the category listing: feed name, singular form, and the
/// representative sprite name, in aligned columns.
pub fn category_listing() -> String {
    let name_width = Category::all()
        .iter()
        .map(|category| category.name().width())
        .max()
        .unwrap_or(0);
    let singular_width = Category::all()
        .iter()
        .map(|category| category.singular().width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for category in Category::all() {
        let mut line = format!(
            "{}  {}",
            pad(category.name(), name_width),
            pad(&category.singular(), singular_width)
        );
        if let Some(icon) = category.icon() {
            line.push_str("  ");
            line.push_str(icon);
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Renders a table as aligned text with a `name` column in front of the
/// discovered attribute columns.
pub fn text_table(table: &ItemTable, version: Option<&GameVersion>) -> String {
    render_table(table, version, None)
}

/// Like [`text_table`], with a trailing `sprite` column carrying one
/// URL per row. `sprite_urls` is indexed by row; empty entries render
/// as empty cells.
pub fn text_table_with_sprites(
    table: &ItemTable,
    version: Option<&GameVersion>,
    sprite_urls: &[String],
) -> String {
    render_table(table, version, Some(sprite_urls))
}

fn render_table(
    table: &ItemTable,
    version: Option<&GameVersion>,
    sprite_urls: Option<&[String]>,
) -> String {
    let mut out = String::new();
    match version {
        Some(version) => out.push_str(&format!(
            "Stendhal {} - {} ({} items)\n\n",
            version,
            table.category(),
            table.len()
        )),
        None => out.push_str(&format!("{} ({} items)\n\n", table.category(), table.len())),
    }

    let mut name_width = "name".width();
    for row in table.rows() {
        name_width = name_width.max(row.name.as_str().width());
    }
    let mut widths: Vec<usize> = table
        .columns()
        .iter()
        .map(|column| column.name.as_str().width())
        .collect();
    for row in table.rows() {
        for (i, column) in table.columns().iter().enumerate() {
            widths[i] = widths[i].max(row.cell(column.ordinal).width());
        }
    }
    let sprite_width = sprite_urls.map(|urls| {
        urls.iter()
            .fold("sprite".width(), |acc, url| acc.max(url.as_str().width()))
    });

    let mut header = vec![pad("name", name_width)];
    for (i, column) in table.columns().iter().enumerate() {
        header.push(pad(&column.name, widths[i]));
    }
    if let Some(width) = sprite_width {
        header.push(pad("sprite", width));
    }
    push_line(&mut out, &header.join(" | "));

    let mut rule = "-".repeat(name_width);
    for width in &widths {
        rule.push_str("-+-");
        rule.push_str(&"-".repeat(*width));
    }
    if let Some(width) = sprite_width {
        rule.push_str("-+-");
        rule.push_str(&"-".repeat(width));
    }
    push_line(&mut out, &rule);

    for (index, row) in table.rows().iter().enumerate() {
        let mut cells = vec![pad(&row.name, name_width)];
        for (i, column) in table.columns().iter().enumerate() {
            cells.push(pad(row.cell(column.ordinal), widths[i]));
        }
        if let (Some(width), Some(urls)) = (sprite_width, sprite_urls) {
            let url = urls.get(index).map(String::as_str).unwrap_or("");
            cells.push(pad(url, width));
        }
        push_line(&mut out, &cells.join(" | "));
    }
    out
}

/// Renders a table as a JSON document carrying the version, category,
/// column schema, and rows.
pub fn json_table(table: &ItemTable, version: Option<&GameVersion>) -> serde_json::Value {
    serde_json::json!({
        "version": version.map(ToString::to_string),
        "category": table.category(),
        "columns": table.columns(),
        "rows": table.rows(),
    })
}

/// Resolves a column name given on the command line. `name` selects the
/// item name column; anything else selects an attribute column, exact
/// match first, then ASCII case-insensitive.
pub fn resolve_column(table: &ItemTable, name: &str) -> Option<SortColumn> {
    if name.eq_ignore_ascii_case("name") {
        return Some(SortColumn::Name);
    }
    if let Some(column) = table.column(name) {
        return Some(SortColumn::Attribute(column.ordinal));
    }
    table
        .columns()
        .iter()
        .find(|column| column.name.eq_ignore_ascii_case(name))
        .map(|column| SortColumn::Attribute(column.ordinal))
}

/// Comma-separated sortable column names, for error messages.
pub fn column_names(table: &ItemTable) -> String {
    let mut names = vec!["name".to_string()];
    names.extend(table.columns().iter().map(|column| column.name.clone()));
    names.join(", ")
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use itemdex_lib::model::ItemRecord;

    fn sword_table() -> ItemTable {
        let items = vec![
            ItemRecord::new("dagger")
                .with_type("sword", "dagger")
                .with_attribute("atk", "7"),
            ItemRecord::new("short sword").with_attribute("atk", "11"),
        ];
        ItemTable::build("swords", &items)
    }

    #[test]
    fn test_text_table_aligns_columns() {
        let text = text_table(&sword_table(), None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "swords (2 items)");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "name        | atk");
        assert_eq!(lines[3], "------------+----");
        assert_eq!(lines[4], "dagger      | 7");
        assert_eq!(lines[5], "short sword | 11");
    }

    #[test]
    fn test_text_table_carries_the_version_banner() {
        let version = GameVersion::new(["1", "45"]).unwrap();
        let text = text_table(&sword_table(), Some(&version));
        assert!(text.starts_with("Stendhal 1.45 - swords (2 items)\n"));
    }

    #[test]
    fn test_json_table_shape() {
        let version = GameVersion::new(["1", "45"]).unwrap();
        let value = json_table(&sword_table(), Some(&version));
        assert_eq!(value["version"], "1.45");
        assert_eq!(value["category"], "swords");
        assert_eq!(value["columns"][0]["name"], "atk");
        assert_eq!(value["columns"][0]["ordinal"], 1);
        assert_eq!(value["rows"][0]["name"], "dagger");
        assert_eq!(value["rows"][0]["cells"]["1"], "7");
        assert_eq!(value["rows"][1]["item_type"], serde_json::Value::Null);
    }

    #[test]
    fn test_resolve_column_prefers_exact_then_caseless() {
        let table = sword_table();
        assert_eq!(resolve_column(&table, "name"), Some(SortColumn::Name));
        assert_eq!(resolve_column(&table, "NAME"), Some(SortColumn::Name));
        assert_eq!(resolve_column(&table, "atk"), Some(SortColumn::Attribute(1)));
        assert_eq!(resolve_column(&table, "ATK"), Some(SortColumn::Attribute(1)));
        assert_eq!(resolve_column(&table, "def"), None);
    }

    #[test]
    fn test_column_names_lists_name_first() {
        assert_eq!(column_names(&sword_table()), "name, atk");
    }

    #[test]
    fn test_text_table_sprite_column_is_last() {
        let urls = vec!["https://example.org/d.png".to_string(), String::new()];
        let text = text_table_with_sprites(&sword_table(), None, &urls);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "name        | atk | sprite");
        assert_eq!(lines[4], "dagger      | 7   | https://example.org/d.png");
        assert_eq!(lines[5], "short sword | 11  |");
    }

    #[test]
    fn test_category_listing_pads_names() {
        let listing = category_listing();
        assert!(listing.contains("armors          armor           plate_armor\n"));
        assert!(listing.contains("arrows          ammunition      wooden_arrow\n"));
        assert!(listing.contains("capturetheflag  capturetheflag\n"));
    }
}
