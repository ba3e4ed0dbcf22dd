//! itemdex command-line interface

mod args;
mod browse;
mod render;

use std::process::exit;
use std::time::Duration;

use clap::Parser;
use log::error;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use itemdex_lib::CatalogClient;
use itemdex_lib::model::Category;
use itemdex_lib::table::SortOrder;

use args::{Cli, Command};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto).is_err()
    {
        eprintln!("logger initialization failed; continuing without logs");
    }

    if let Err(err) = run(cli).await {
        error!("{err}");
        exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match &cli.command {
        Command::Categories => {
            print!("{}", render::category_listing());
            Ok(())
        }
        Command::Show {
            category,
            sort,
            desc,
            output,
        } => {
            let client = client_from(&cli)?;
            show(&client, category, sort.as_deref(), *desc, output).await
        }
        Command::Browse { category } => {
            let client = client_from(&cli)?;
            browse::run(client, category.clone()).await
        }
    }
}

async fn show(
    client: &CatalogClient,
    category: &str,
    sort: Option<&str>,
    desc: bool,
    output: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let Some(category) = Category::find(category) else {
        return Err(format!(
            "unknown category `{category}`; run `itemdex categories` to list them"
        )
        .into());
    };

    let mut table = client.build_table(category.name()).await?;
    let version = client.version().await;

    if let Some(name) = sort {
        let Some(column) = render::resolve_column(&table, name) else {
            return Err(format!(
                "no column `{name}`; columns: {}",
                render::column_names(&table)
            )
            .into());
        };
        let order = if desc {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        table.sort(column, order);
    }

    match output {
        "text" => print!("{}", render::text_table(&table, version.as_ref())),
        "json" => println!("{:#}", render::json_table(&table, version.as_ref())),
        other => {
            return Err(format!("unknown output format `{other}` (expected text or json)").into());
        }
    }
    Ok(())
}

fn client_from(cli: &Cli) -> Result<CatalogClient, itemdex_lib::error::Error> {
    let mut builder = CatalogClient::builder();
    if let Some(url) = &cli.base_url {
        builder = builder.base_url(url.as_str());
    }
    if let Some(url) = &cli.site_url {
        builder = builder.site_url(url.as_str());
    }
    if let Some(seconds) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    builder.build()
}
