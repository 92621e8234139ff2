use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tally_core::{CategoryCatalog, ReferenceMonth, TransactionRecord};
use tally_finance::{list_transactions, summarize_categories, summarize_highlights};
use tally_ingest::{check_categories, load_store, parse_csv, Normalizer};
use tracing::info;

mod config;
mod logging;
mod render;
mod state;

use config::Config;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TALLY_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "tally", version = VERSION, about = "Income/expense highlights and monthly category breakdown")]
struct Cli {
    /// Debug-level logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    verbose: bool,

    /// Print engine output as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// JSON transaction store (defaults to the user's store under ~/.tally)
    #[arg(long, conflicts_with = "csv")]
    file: Option<PathBuf>,

    /// Read a CSV export instead of the JSON store
    #[arg(long)]
    csv: Option<PathBuf>,

    /// User whose store to read (defaults to profile.user_id)
    #[arg(long)]
    user: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write ~/.tally/config.toml with defaults
    Init,

    /// Totals of entries and expenses, balance and latest dates
    Highlights {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Expenses of one month broken down by category
    Summary {
        /// Reference month as YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<ReferenceMonth>,

        /// Move the reference month by N months (e.g. -1 for the previous one)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// All transactions in stored order
    List {
        #[command(flatten)]
        source: SourceArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match cli.command {
        Command::Init => config::init_config()?,

        Command::Highlights { source } => {
            let (cfg, catalog) = load_settings()?;
            let records = load_records(&source, &cfg)?;
            notify_quality(&records, &catalog);
            let highlights = summarize_highlights(&records).context("computing highlights")?;
            emit(cli.json, &highlights, || render::render_highlights(&highlights, &cfg.display))?;
        }

        Command::Summary {
            month,
            offset,
            source,
        } => {
            let (cfg, catalog) = load_settings()?;
            let base = match month {
                Some(m) => m,
                None => current_month(&cfg)?,
            };
            let month = base
                .shift(offset)
                .with_context(|| format!("moving {base} by {offset} months"))?;

            let records = load_records(&source, &cfg)?;
            notify_quality(&records, &catalog);
            let summary = summarize_categories(&records, month, &catalog)
                .with_context(|| format!("summarizing {month}"))?;
            emit(cli.json, &summary, || render::render_summary(&summary, &cfg.display))?;
        }

        Command::List { source } => {
            let (cfg, catalog) = load_settings()?;
            let records = load_records(&source, &cfg)?;
            let rows = list_transactions(&records, &catalog);
            emit(cli.json, &rows, || render::render_rows(&rows, &cfg.display))?;
        }
    }

    Ok(())
}

fn load_settings() -> Result<(Config, CategoryCatalog)> {
    let cfg = config::load_config()?;
    let catalog = cfg.catalog()?;
    Ok((cfg, catalog))
}

fn load_records(source: &SourceArgs, cfg: &Config) -> Result<Vec<TransactionRecord>> {
    let normalizer = Normalizer::new(cfg.timezone()?)?;

    if let Some(csv) = &source.csv {
        let records = parse_csv(csv, &normalizer).with_context(|| format!("parsing {}", csv.display()))?;
        info!(count = records.len(), path = %csv.display(), "loaded CSV export");
        return Ok(records);
    }

    let path = match &source.file {
        Some(p) => p.clone(),
        None => state::store_path(source.user.as_deref().unwrap_or(&cfg.profile.user_id))?,
    };
    let records = load_store(&path, &normalizer).with_context(|| format!("loading {}", path.display()))?;
    info!(count = records.len(), path = %path.display(), "loaded transaction store");
    Ok(records)
}

fn current_month(cfg: &Config) -> Result<ReferenceMonth> {
    let tz = cfg.timezone()?;
    Ok(ReferenceMonth::of(Utc::now().with_timezone(&tz).date_naive()))
}

fn notify_quality(records: &[TransactionRecord], catalog: &CategoryCatalog) {
    if let Some(notice) = render::render_quality_notice(&check_categories(records, catalog)) {
        eprint!("{notice}");
    }
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value).context("serialize output")?);
    } else {
        print!("{}", text());
    }
    Ok(())
}
