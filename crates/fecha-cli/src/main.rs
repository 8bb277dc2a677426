use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use fecha_engine::{try_resolve, ResolveOptions, WeekStartDay, ISO_FORMAT};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fecha",
    about = "Resolve Spanish relative date phrases to ISO dates",
    version
)]
struct Cli {
    /// Date phrase, e.g. "semana que viene para jueves" (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    expression: Vec<String>,

    /// Reference date (YYYY-MM-DD) used as "today" [default: local date]
    #[arg(long, value_parser = parse_reference_date)]
    today: Option<NaiveDate>,

    /// First day of the week for "semana que viene" phrases
    #[arg(long, value_enum, default_value_t = WeekStart::Monday)]
    week_start: WeekStart,

    /// Print the full resolution (input, normalized text, date, rule) as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum WeekStart {
    Monday,
    Sunday,
}

impl From<WeekStart> for WeekStartDay {
    fn from(value: WeekStart) -> Self {
        match value {
            WeekStart::Monday => WeekStartDay::Monday,
            WeekStart::Sunday => WeekStartDay::Sunday,
        }
    }
}

fn parse_reference_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, ISO_FORMAT).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let expression = cli.expression.join(" ");
    let today = cli.today.unwrap_or_else(fecha_engine::today);
    let options = ResolveOptions {
        week_start: cli.week_start.into(),
    };
    tracing::debug!(%expression, %today, "resolving from command line");

    let resolved = try_resolve(&expression, today, &options)
        .with_context(|| format!("could not resolve a date relative to {today}"))?;

    let mut stdout = io::stdout().lock();
    if cli.json {
        let json = serde_json::to_string_pretty(&resolved).context("failed to serialize result")?;
        writeln!(stdout, "{json}")?;
    } else {
        writeln!(stdout, "{}", resolved.iso())?;
    }
    Ok(())
}
