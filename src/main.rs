mod error;
mod session;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use boards::BoardStore;
use clap::{Args, Parser, Subcommand};
use order::{Catalog, Category, OrderEffect, OrderSelection, OrderState};

use crate::error::CliError;
use crate::session::{SessionStats, run_session};

#[derive(Parser, Debug)]
#[command(name = "driven", about = "Restaurant ordering and to-do board cores, driven from the terminal")]
struct Cli {
    /// JSON catalog with `dishes`, `drinks` and `desserts`; the house menu when absent.
    #[arg(long, env = "DRIVEN_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the active catalog as JSON.
    Catalog,
    /// Build an order from one item per category and print its message link.
    Order(OrderArgs),
    /// Replay order actions from JSON lines.
    OrderSession(OrderSessionArgs),
    /// Replay board actions from JSON lines.
    BoardSession(BoardSessionArgs),
}

#[derive(Args, Debug)]
struct OrderArgs {
    #[arg(long)]
    dish: String,

    #[arg(long)]
    drink: String,

    #[arg(long)]
    dessert: String,

    /// Open the message link in the system browser.
    #[arg(long, default_value_t = false)]
    open: bool,
}

#[derive(Args, Debug)]
struct OrderSessionArgs {
    #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
    input: String,

    /// Open `open_link` effects in the system browser.
    #[arg(long, default_value_t = false)]
    open: bool,
}

#[derive(Args, Debug)]
struct BoardSessionArgs {
    #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
    input: String,

    /// Print the final store as JSON after the last effect.
    #[arg(long, default_value_t = false)]
    snapshot: bool,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    run(Cli::parse())
}

/// The catalog is read only by the commands that use it.
fn run(cli: Cli) -> Result<(), CliError> {
    let catalog_path = cli.catalog.as_deref();
    match cli.command {
        Command::Catalog => print_json(&load_catalog(catalog_path)?),
        Command::Order(args) => run_order(&load_catalog(catalog_path)?, args),
        Command::OrderSession(args) => run_order_session(load_catalog(catalog_path)?, args),
        Command::BoardSession(args) => run_board_session(args),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, CliError> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };
    let raw = std::fs::read_to_string(path).map_err(|error| CliError::io("read", path.display().to_string(), error))?;
    let catalog = Catalog::from_json(&raw)?;
    tracing::info!(
        path = %path.display(),
        dishes = catalog.dishes.len(),
        drinks = catalog.drinks.len(),
        desserts = catalog.desserts.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn run_order(catalog: &Catalog, args: OrderArgs) -> Result<(), CliError> {
    let mut selection = OrderSelection::new();
    for (category, name) in [
        (Category::Dish, &args.dish),
        (Category::Drink, &args.drink),
        (Category::Dessert, &args.dessert),
    ] {
        selection.select(category, catalog.find(category, name)?.clone());
    }

    let url = order::order_link(&selection)?;
    println!("{}", selection.summary_text()?);
    println!();
    println!("{url}");

    if args.open {
        open_link(&url)?;
    }
    Ok(())
}

fn run_order_session(catalog: Catalog, args: OrderSessionArgs) -> Result<(), CliError> {
    let mut state = OrderState::new(catalog);
    let reader = open_input(&args.input)?;
    let totals = run_session(&mut state, reader, io::stdout().lock(), |effect| match effect {
        OrderEffect::OpenLink { url } if args.open => open_link(url),
        _ => Ok(()),
    })?;
    log_stats("order", totals);
    Ok(())
}

fn run_board_session(args: BoardSessionArgs) -> Result<(), CliError> {
    let mut store = BoardStore::new();
    let reader = open_input(&args.input)?;
    let stats = run_session(&mut store, reader, io::stdout().lock(), |_| Ok(()))?;
    log_stats("board", stats);

    if args.snapshot {
        print_json(&store)?;
    }
    Ok(())
}

fn open_input(input: &str) -> Result<Box<dyn BufRead>, CliError> {
    if input == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(input).map_err(|error| CliError::io("open", input, error))?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_link(url: &str) -> Result<(), CliError> {
    tracing::info!(url, "opening message link");
    open::that(url).map_err(|source| CliError::OpenLink { url: url.to_owned(), source })
}

fn log_stats(kind: &str, stats: SessionStats) {
    tracing::info!(
        kind,
        actions = stats.actions,
        skipped = stats.skipped,
        effects = stats.effects,
        "session finished"
    );
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
