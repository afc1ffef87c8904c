use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, warn};

use crate::config::Config;
use crate::facts::{FeedSource, OfflineFeed, WikimediaFeed, fetch_fact};
use crate::history_storage::HistoryStore;
use crate::logging;
use crate::models::{DayMonth, HistoryItem, append_capped};
use crate::tui::run_interactive;
use crate::utils::terminal::sanitize_fact;
use crate::utils::{random_date, resolve_data_dir, today};

#[derive(Parser)]
#[command(name = "on-this-day")]
#[command(version)]
#[command(about = "Discover a historical fact for any day of the year", long_about = None)]
pub struct Cli {
    /// Directory holding history, config and log (default: platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Skip the network and use only the built-in facts
    #[arg(long, global = true)]
    pub offline: bool,

    /// Wikipedia language edition for the feed (e.g. en, pt, de)
    #[arg(long, global = true, value_name = "CODE")]
    pub language: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a fact for a date (DD/MM, default today)
    Fact { date: Option<String> },
    /// Print a fact for a random date
    Surprise,
    /// Show recent lookups, newest first
    History,
    /// Delete the stored history
    ClearHistory,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    if cli.command.is_some() {
        logging::init_stderr();
    } else if let Err(e) = logging::init_file(&data_dir) {
        // No logging is better than log lines drawn over the TUI
        eprintln!("Logging disabled: {:#}", e);
    }

    let mut config = Config::load(&data_dir)?;
    if cli.offline {
        config.offline = true;
    }
    if let Some(language) = cli.language {
        config.language = language;
    }

    let store = HistoryStore::in_dir(&data_dir);

    match cli.command {
        None => run_interactive(feed_source(&config)?, store, today().to_string())?,
        Some(Commands::Fact { date }) => {
            let date = match date {
                Some(input) => input.trim().parse::<DayMonth>()?,
                None => today(),
            };
            let item = lookup_and_record(feed_source(&config)?.as_ref(), &store, date);
            println!("{}: {}", item.date, item.fact);
        }
        Some(Commands::Surprise) => {
            let date = random_date(&mut rand::rng());
            let item = lookup_and_record(feed_source(&config)?.as_ref(), &store, date);
            println!("{}: {}", item.date, item.fact);
        }
        Some(Commands::History) => show_history(&store),
        Some(Commands::ClearHistory) => {
            store.clear()?;
            println!("History cleared");
        }
    }

    Ok(())
}

fn feed_source(config: &Config) -> Result<Arc<dyn FeedSource>> {
    if config.offline {
        return Ok(Arc::new(OfflineFeed));
    }
    Ok(Arc::new(WikimediaFeed::from_config(config)?))
}

fn load_history(store: &HistoryStore) -> Vec<HistoryItem> {
    store.load().unwrap_or_else(|e| {
        warn!(error = %format!("{:#}", e), "could not load history, treating as empty");
        Vec::new()
    })
}

/// Fetch a fact and append it to the stored history
fn lookup_and_record(source: &dyn FeedSource, store: &HistoryStore, date: DayMonth) -> HistoryItem {
    let fact = fetch_fact(source, date, &mut rand::rng());
    let item = HistoryItem::new(date.to_string(), fact);

    let mut history = load_history(store);
    append_capped(&mut history, item.clone());
    if let Err(e) = store.save(&history) {
        error!(error = %format!("{:#}", e), "could not save history");
    }

    item
}

fn show_history(store: &HistoryStore) {
    let history = load_history(store);
    if history.is_empty() {
        println!("No lookups yet");
        return;
    }

    println!("Recent lookups");
    println!("==============");
    for item in history.iter().rev() {
        println!("{}  {}", sanitize_fact(&item.date), sanitize_fact(&item.fact));
    }
}
