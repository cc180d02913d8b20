// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line search for the teams with the best alphabet coverage.

use alphabet_cover::error::team_size_from_signed;
use alphabet_cover::pool::{source, Ordering};
use alphabet_cover::report;
use alphabet_cover::search::{CancelToken, SearchConfig, Searcher, TiePolicy, DEFAULT_TEAM_SIZE};
use alphabet_cover::Pool;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::env;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cover")]
#[command(about = "Find teams whose names cover the most letters of the alphabet")]
struct Args {
    /// Number of members per team
    #[arg(
        short = 'k',
        long,
        default_value_t = DEFAULT_TEAM_SIZE as i64,
        allow_negative_numbers = true
    )]
    team_size: i64,

    /// File of candidate names, one per line ('-' for stdin). Defaults to the built-in roster.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Report the first best team or every tie
    #[arg(long, value_enum, default_value_t = TiePolicy::All)]
    ties: TiePolicy,

    /// Order in which candidates are searched
    #[arg(long, value_enum, default_value_t = Ordering::Rarity)]
    order: Ordering,

    /// Split the search across threads
    #[arg(long)]
    parallel: bool,

    /// Stop after this many seconds and report the best team found so far
    #[arg(long)]
    time_limit: Option<u64>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log search progress at debug level
    #[arg(short, long)]
    verbose: bool,
}

/// Log filter: `RUST_LOG` directives when given, otherwise WARN (DEBUG with `--verbose`).
fn log_filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn init_tracing(verbose: bool) {
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(verbose, directives.as_deref()))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let team_size = team_size_from_signed(args.team_size)?;
    let names = source::load_names(args.input.as_deref())?;
    let pool = Pool::from_names(names);

    let config = SearchConfig::new(team_size)
        .with_tie_policy(args.ties)
        .with_ordering(args.order)
        .with_parallel(args.parallel);
    let searcher = Searcher::new(&pool, config)?;

    let cancel = CancelToken::new();
    if let Some(secs) = args.time_limit {
        let timer = cancel.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(secs));
            info!(secs, "time limit reached, cancelling search");
            timer.cancel();
        });
    }

    let result = searcher.run_with_cancel(&cancel);
    match args.format {
        Format::Text => print!("{}", report::render_text(&result)),
        Format::Json => println!(
            "{}",
            report::render_json(&result).context("failed to encode result as JSON")?
        ),
    }
    Ok(())
}
