//! # standings
//!
//! A CLI for building football league tables from a season of match results.
//!
//! ## Overview
//!
//! standings is built on top of standingslib. It reads one CSV row per
//! fixture (`Round,Date,Team 1,FT,Team 2`, scores written as `2–1` with an
//! en-dash), or downloads a season from the footballcsv repositories, and
//! prints the ranked table.
//!
//! ## Usage
//!
//! ```bash
//! # Table from a local file
//! standings table eng.1.csv
//!
//! # From stdin, written as CSV
//! cat eng.1.csv | standings table - --output csv --out standings.csv
//!
//! # Two points for a win, with home/away columns
//! standings table eng.1.csv --win-points 2 --splits
//!
//! # Download and rank a season
//! standings fetch --season 2020-21 --level 2
//!
//! # Only print where a season would be downloaded from
//! standings url --season 2020-21
//! ```
//!
//! Logging goes to stderr. `RUST_LOG` takes precedence over `--log-level`.

mod fetch;
mod render;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use standingslib::{
    read_fixtures, read_fixtures_path, BuildOptions, Columns, FixtureTable, Level, PointsRules,
    SchemaPolicy, Season, SeasonSource, TableBuilder,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::render::{render, OutputFormat, OutputMode};

/// Flags shared by every command that produces a table
fn table_args() -> Vec<Arg> {
    vec![
        Arg::new("output")
            .short('o')
            .long("output")
            .value_parser(["table", "json", "csv"])
            .default_value("table")
            .help("Output format"),
        Arg::new("out")
            .long("out")
            .value_name("PATH")
            .help("Write output to a file instead of stdout"),
        Arg::new("win-points")
            .long("win-points")
            .value_name("N")
            .value_parser(value_parser!(u32))
            .help("Points for a win (default 3)"),
        Arg::new("draw-points")
            .long("draw-points")
            .value_name("N")
            .value_parser(value_parser!(u32))
            .help("Points for a draw (default 1)"),
        Arg::new("loss-points")
            .long("loss-points")
            .value_name("N")
            .value_parser(value_parser!(u32))
            .help("Points for a loss (default 0)"),
        Arg::new("allow-schema-mismatch")
            .long("allow-schema-mismatch")
            .action(ArgAction::SetTrue)
            .help("Warn instead of failing when the column headers are unexpected"),
        Arg::new("splits")
            .long("splits")
            .action(ArgAction::SetTrue)
            .help("Show points per game and home/away records (table output)"),
    ]
}

/// Flags locating a season upstream
fn season_args() -> Vec<Arg> {
    vec![
        Arg::new("season")
            .short('s')
            .long("season")
            .required(true)
            .help("Season in YYYY-YY form, e.g. 2020-21"),
        Arg::new("level")
            .short('l')
            .long("level")
            .value_parser(value_parser!(u8))
            .default_value("1")
            .help("League level, 1 is the top flight"),
        Arg::new("country")
            .short('c')
            .long("country")
            .default_value(standingslib::source::DEFAULT_COUNTRY)
            .help("Country repository on footballcsv"),
    ]
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("standings")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build football league tables from a season of match results")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("warn")
                .help("Log filter used when RUST_LOG is not set"),
        )
        .subcommand(
            Command::new("table")
                .about("Rank the fixtures of a local CSV file")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .help("Fixtures CSV file, or - for stdin"),
                )
                .args(table_args()),
        )
        .subcommand(
            Command::new("fetch")
                .about("Download a season and rank its fixtures")
                .args(season_args())
                .args(table_args()),
        )
        .subcommand(
            Command::new("url")
                .about("Print the download URL of a season")
                .args(season_args()),
        )
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Map points and schema flags onto build options
fn build_options(matches: &ArgMatches) -> BuildOptions {
    let mut rules = PointsRules::default();
    if let Some(&win) = matches.get_one::<u32>("win-points") {
        rules = rules.with_win(win);
    }
    if let Some(&draw) = matches.get_one::<u32>("draw-points") {
        rules = rules.with_draw(draw);
    }
    if let Some(&loss) = matches.get_one::<u32>("loss-points") {
        rules = rules.with_loss(loss);
    }

    let policy = if matches.get_flag("allow-schema-mismatch") {
        SchemaPolicy::Warn
    } else {
        SchemaPolicy::Strict
    };

    BuildOptions::new().rules(rules).schema_policy(policy)
}

fn season_source(matches: &ArgMatches) -> Result<SeasonSource> {
    let season: Season = matches
        .get_one::<String>("season")
        .map(|s| s.as_str())
        .unwrap_or_default()
        .parse()?;
    let level = Level::new(matches.get_one::<u8>("level").copied().unwrap_or(1))?;
    let mut source = SeasonSource::new(season).level(level);
    if let Some(country) = matches.get_one::<String>("country") {
        source = source.country(country.to_lowercase());
    }
    Ok(source)
}

/// Build, render and emit a table
fn emit_table(matches: &ArgMatches, fixtures: &FixtureTable, title: Option<&str>) -> Result<()> {
    let standings = TableBuilder::new(build_options(matches)).build(fixtures)?;
    tracing::info!(
        teams = standings.len(),
        fixtures = standings.fixture_count,
        "built standings"
    );

    let format: OutputFormat = matches
        .get_one::<String>("output")
        .map(|s| s.parse())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();
    let columns = Columns::core()
        .with_ppg(matches.get_flag("splits"))
        .with_splits(matches.get_flag("splits"));

    let out = matches.get_one::<String>("out");
    // Files never get terminal styling
    let output_mode = if out.is_some() {
        OutputMode::Text
    } else {
        OutputMode::Auto
    };
    let output = render(&standings, format, columns, title, output_mode)?;

    match out {
        Some(path) => {
            std::fs::write(path, output).with_context(|| format!("failed to write {path}"))?;
            tracing::info!(%path, "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Handler for table command
fn table_handler(matches: &ArgMatches) -> Result<()> {
    let file = matches
        .get_one::<String>("file")
        .map(|s| s.as_str())
        .unwrap_or("-");

    let fixtures = if file == "-" {
        read_fixtures(io::stdin().lock()).context("failed to read fixtures from stdin")?
    } else {
        read_fixtures_path(file)?
    };
    tracing::debug!(rows = fixtures.len(), "read fixtures");

    emit_table(matches, &fixtures, None)
}

/// Handler for fetch command
fn fetch_handler(matches: &ArgMatches) -> Result<()> {
    let source = season_source(matches)?;
    let fixtures = fetch::fetch_season(&source)?;
    let title = source.to_string();
    emit_table(matches, &fixtures, Some(&title))
}

/// Handler for url command
fn url_handler(matches: &ArgMatches) -> Result<()> {
    let source = season_source(matches)?;
    println!("{}", source.url());
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("table", sub)) => table_handler(sub),
        Some(("fetch", sub)) => fetch_handler(sub),
        Some(("url", sub)) => url_handler(sub),
        _ => Err(anyhow::anyhow!("no command given, see --help")),
    }
}

fn main() -> ExitCode {
    let matches = match build_command().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            // --help and --version also arrive here
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let log_level = matches
        .get_one::<String>("log-level")
        .map(|s| s.as_str())
        .unwrap_or("warn");
    init_tracing(log_level);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
