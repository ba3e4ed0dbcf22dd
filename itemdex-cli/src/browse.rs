//! Interactive catalogue browsing
//!
//! A line-oriented loop over stdin: type a category name to open its
//! table, `sort <column>` to re-order it, `sprites on` to add a sprite
//! URL column, `info <item>` or `open <item>` for a single row. Feed
//! failures keep the previous table on screen.

use std::error::Error;
use std::io::Write;

use itemdex_lib::CatalogClient;
use itemdex_lib::feed::urls;
use itemdex_lib::model::{Category, GameVersion};
use itemdex_lib::table::{ItemTable, SortState};
use log::error;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

/// One line of browse input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Open a category by name.
    Switch(String),
    /// Sort the open table by a column.
    Sort(String),
    /// Show or hide the sprite URL column.
    Sprites(bool),
    /// Print one item's classification and links.
    Info(String),
    /// Open an item's home page in the browser.
    Open(String),
    /// Print the category listing.
    Categories,
    Help,
    Quit,
    /// Blank line.
    Empty,
    /// A keyword missing its argument.
    Usage(&'static str),
}

/// Parses one input line. Anything that is not a known keyword is
/// taken as a category name, so plain `swords` opens that table.
pub fn parse_command(line: &str) -> BrowseCommand {
    let line = line.trim();
    if line.is_empty() {
        return BrowseCommand::Empty;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    match (word.to_ascii_lowercase().as_str(), rest) {
        ("quit" | "exit" | "q", "") => BrowseCommand::Quit,
        ("help" | "?", "") => BrowseCommand::Help,
        ("categories", "") => BrowseCommand::Categories,
        ("category", "") => BrowseCommand::Usage("category <name>"),
        ("category", name) => BrowseCommand::Switch(name.to_string()),
        ("sort", "") => BrowseCommand::Usage("sort <column>"),
        ("sort", column) => BrowseCommand::Sort(column.to_string()),
        ("sprites", rest) => match rest {
            "on" => BrowseCommand::Sprites(true),
            "off" => BrowseCommand::Sprites(false),
            _ => BrowseCommand::Usage("sprites on|off"),
        },
        ("info", "") => BrowseCommand::Usage("info <item>"),
        ("info", name) => BrowseCommand::Info(name.to_string()),
        ("open", "") => BrowseCommand::Usage("open <item>"),
        ("open", name) => BrowseCommand::Open(name.to_string()),
        _ => BrowseCommand::Switch(line.to_string()),
    }
}

/// The open table plus its rendering settings.
struct BrowseState {
    table: Option<ItemTable>,
    sort_state: SortState,
    sprites: bool,
}

/// Runs the interactive loop until `quit` or end of input.
pub async fn run(
    client: CatalogClient,
    initial: Option<String>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let version = client.fetch_version().await?;
    println!("Stendhal {version}. Type a category name, `help` for commands, `quit` to leave.");

    let mut state = BrowseState {
        table: None,
        sort_state: SortState::new(),
        sprites: false,
    };

    if let Some(name) = initial {
        switch_category(&client, &version, &mut state, &name).await;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse_command(&line) {
            BrowseCommand::Quit => break,
            BrowseCommand::Empty => {}
            BrowseCommand::Help => print_help(),
            BrowseCommand::Categories => print!("{}", render::category_listing()),
            BrowseCommand::Usage(usage) => println!("usage: {usage}"),
            BrowseCommand::Switch(name) => {
                switch_category(&client, &version, &mut state, &name).await;
            }
            BrowseCommand::Sort(column) => {
                sort_table(&client, &version, &mut state, &column);
            }
            BrowseCommand::Sprites(value) => {
                state.sprites = value;
                if let Some(table) = state.table.as_ref() {
                    print_table(&client, &version, table, state.sprites);
                }
            }
            BrowseCommand::Info(name) => show_info(&client, state.table.as_ref(), &name).await,
            BrowseCommand::Open(name) => open_home(&client, state.table.as_ref(), &name),
        }
    }
    Ok(())
}

/// Fetches `name` and swaps it in. A failed fetch reports the error and
/// keeps the current table.
async fn switch_category(
    client: &CatalogClient,
    version: &GameVersion,
    state: &mut BrowseState,
    name: &str,
) {
    let Some(category) = Category::find(name) else {
        println!("unknown category `{name}`; type `categories` to list them");
        return;
    };
    match client.build_table(category.name()).await {
        Ok(built) => {
            state.sort_state.reset();
            print_table(client, version, &built, state.sprites);
            state.table = Some(built);
        }
        Err(err) => error!("{name}: {err}"),
    }
}

fn sort_table(
    client: &CatalogClient,
    version: &GameVersion,
    state: &mut BrowseState,
    column_name: &str,
) {
    let Some(table) = state.table.as_mut() else {
        println!("no category open yet");
        return;
    };
    let Some(column) = render::resolve_column(table, column_name) else {
        println!(
            "no column `{column_name}`; columns: {}",
            render::column_names(table)
        );
        return;
    };
    let order = state.sort_state.press(column);
    table.sort(column, order);
    print_table(client, version, table, state.sprites);
}

fn print_table(client: &CatalogClient, version: &GameVersion, table: &ItemTable, sprites: bool) {
    if sprites {
        let urls = sprite_urls(client, version, table);
        print!("{}", render::text_table_with_sprites(table, Some(version), &urls));
    } else {
        print!("{}", render::text_table(table, Some(version)));
    }
}

/// One sprite URL per row, empty for rows without a classification.
fn sprite_urls(client: &CatalogClient, version: &GameVersion, table: &ItemTable) -> Vec<String> {
    let tag = version.release_tag();
    table
        .rows()
        .iter()
        .map(|row| match &row.item_type {
            Some(item_type) => {
                urls::sprite_url(client.base_url(), &tag, &item_type.class, &item_type.subclass)
            }
            None => String::new(),
        })
        .collect()
}

async fn show_info(client: &CatalogClient, table: Option<&ItemTable>, name: &str) {
    let Some(row) = find_row(table, name) else {
        return;
    };
    println!("{}", row.name);
    let Some(item_type) = &row.item_type else {
        println!("  class:  none recorded");
        return;
    };
    println!("  class:  {}/{}", item_type.class, item_type.subclass);
    println!("  home:   {}", client.home_url(&item_type.class, &row.name));
    match client.fetch_sprite(&item_type.class, &item_type.subclass).await {
        Ok(sprite) => {
            let cached = if sprite.is_cached() { " (session cache)" } else { "" };
            println!("  sprite: {} bytes{cached}", sprite.data().len());
        }
        Err(err) => error!("sprite fetch failed: {err}"),
    }
}

fn open_home(client: &CatalogClient, table: Option<&ItemTable>, name: &str) {
    let Some(row) = find_row(table, name) else {
        return;
    };
    let Some(item_type) = &row.item_type else {
        println!("{} has no recorded class, so no home page", row.name);
        return;
    };
    let url = client.home_url(&item_type.class, &row.name);
    println!("opening {url}");
    if let Err(err) = open::that(&url) {
        error!("browser launch failed: {err}");
    }
}

fn find_row<'a>(
    table: Option<&'a ItemTable>,
    name: &str,
) -> Option<&'a itemdex_lib::table::ItemRow> {
    let Some(table) = table else {
        println!("no category open yet");
        return None;
    };
    let row = table
        .rows()
        .iter()
        .find(|row| row.name.eq_ignore_ascii_case(name));
    if row.is_none() {
        println!("no item `{}` in {}", name, table.category());
    }
    row
}

fn print_help() {
    println!("commands:");
    println!("  <category>       open a category table (see `categories`)");
    println!("  category <name>  the same, spelled out");
    println!("  sort <column>    sort by a column; repeat to flip direction");
    println!("  sprites on|off   show or hide the sprite URL column");
    println!("  info <item>      show an item's class, home page, and sprite");
    println!("  open <item>      open the item's home page in the browser");
    println!("  categories       list the known categories");
    println!("  quit             leave");
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_word_switches_category() {
        assert_eq!(
            parse_command("swords"),
            BrowseCommand::Switch("swords".into())
        );
        assert_eq!(
            parse_command("  shields  "),
            BrowseCommand::Switch("shields".into())
        );
    }

    #[test]
    fn test_parse_category_keyword() {
        assert_eq!(
            parse_command("category swords"),
            BrowseCommand::Switch("swords".into())
        );
        assert_eq!(
            parse_command("category"),
            BrowseCommand::Usage("category <name>")
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("quit"), BrowseCommand::Quit);
        assert_eq!(parse_command("exit"), BrowseCommand::Quit);
        assert_eq!(parse_command("q"), BrowseCommand::Quit);
        assert_eq!(parse_command("help"), BrowseCommand::Help);
        assert_eq!(parse_command("?"), BrowseCommand::Help);
        assert_eq!(parse_command("categories"), BrowseCommand::Categories);
    }

    #[test]
    fn test_parse_keywords_ignore_case() {
        assert_eq!(parse_command("QUIT"), BrowseCommand::Quit);
        assert_eq!(
            parse_command("Sort atk"),
            BrowseCommand::Sort("atk".into())
        );
    }

    #[test]
    fn test_parse_sprites_toggle() {
        assert_eq!(parse_command("sprites on"), BrowseCommand::Sprites(true));
        assert_eq!(parse_command("SPRITES off"), BrowseCommand::Sprites(false));
        assert_eq!(
            parse_command("sprites"),
            BrowseCommand::Usage("sprites on|off")
        );
        assert_eq!(
            parse_command("sprites maybe"),
            BrowseCommand::Usage("sprites on|off")
        );
    }

    #[test]
    fn test_parse_arguments_keep_spaces() {
        assert_eq!(
            parse_command("info black dragon cloak"),
            BrowseCommand::Info("black dragon cloak".into())
        );
        assert_eq!(
            parse_command("open ice sword"),
            BrowseCommand::Open("ice sword".into())
        );
    }

    #[test]
    fn test_parse_missing_arguments_ask_for_usage() {
        assert_eq!(parse_command("sort"), BrowseCommand::Usage("sort <column>"));
        assert_eq!(parse_command("info "), BrowseCommand::Usage("info <item>"));
        assert_eq!(parse_command("open"), BrowseCommand::Usage("open <item>"));
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse_command(""), BrowseCommand::Empty);
        assert_eq!(parse_command("   "), BrowseCommand::Empty);
    }

    #[test]
    fn test_keyword_with_trailing_words_is_not_a_switch() {
        // `sort` takes the rest of the line as the column name.
        assert_eq!(
            parse_command("sort min level"),
            BrowseCommand::Sort("min level".into())
        );
    }
}
