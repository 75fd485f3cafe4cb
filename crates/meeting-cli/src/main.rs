//! `meetq` — query single-day meeting availability from a JSON day file.
//!
//! ## Usage
//!
//! ```sh
//! # Free ranges as JSON (stdin → stdout)
//! cat day.json | meetq query
//!
//! # Free ranges as text, from file to file
//! meetq query -i day.json -o slots.txt --format text
//!
//! # Earliest slot that fits
//! meetq first -i day.json
//!
//! # Merged busy ranges of a group
//! meetq busy -i day.json --attendees alice,bob
//!
//! # Which scheduling policy produced the answer
//! meetq explain -i day.json
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

mod day;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use day::{DayFile, SlotDto};
use meeting_engine::{busy_for, first_available, query_detailed, TimeRange};
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "meetq",
    version,
    about = "Find meeting slots for mandatory and optional attendees"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Reject requests whose duration is zero or negative
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every free range that fits the request
    Query {
        /// Input day file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print the earliest slot, trimmed to the requested duration
    First {
        /// Input day file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print the merged busy ranges of a group of attendees
    Busy {
        /// Input day file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Comma-separated attendee names
        #[arg(long)]
        attendees: String,
    },
    /// Print which scheduling policy produced the answer
    Explain {
        /// Input day file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meetq=warn,meeting_engine=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Query {
            input,
            output,
            format,
        } => {
            let day = load_day(input.as_deref(), cli.strict)?;
            let report = query_detailed(&day.events()?, &day.request());
            tracing::debug!(policy = ?report.policy, slots = report.free.len(), "query answered");
            let rendered = match format {
                Format::Json => render_json(&report.free)?,
                Format::Text => render_text(&report.free)?,
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::First { input } => {
            let day = load_day(input.as_deref(), cli.strict)?;
            let slot = first_available(&day.events()?, &day.request());
            let rendered = render_text(slot.as_slice())?;
            write_output(None, &rendered)?;
        }
        Commands::Busy { input, attendees } => {
            let day = load_day(input.as_deref(), cli.strict)?;
            let group = parse_attendees(&attendees);
            if group.is_empty() {
                anyhow::bail!("--attendees must name at least one attendee");
            }
            let busy = busy_for(&day.events()?, &group);
            write_output(None, &render_json(&busy)?)?;
        }
        Commands::Explain { input } => {
            let day = load_day(input.as_deref(), cli.strict)?;
            let report = query_detailed(&day.events()?, &day.request());
            let policy = serde_json::to_value(report.policy)?;
            let mut rendered = format!("policy: {}\n", policy.as_str().unwrap_or_default());
            rendered.push_str(&render_text(&report.free)?);
            write_output(None, &rendered)?;
        }
    }

    Ok(())
}

fn load_day(path: Option<&Path>, strict: bool) -> Result<DayFile> {
    let json = read_input(path)?;
    let day = DayFile::parse(&json)?;
    if strict && day.request.duration <= 0 {
        anyhow::bail!(
            "Meeting duration must be positive, got {} minutes",
            day.request.duration
        );
    }
    Ok(day)
}

/// Split `a, b,,c` into `{a, b, c}`.
fn parse_attendees(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn render_json(ranges: &[TimeRange]) -> Result<String> {
    let slots = ranges
        .iter()
        .map(SlotDto::from_range)
        .collect::<Result<Vec<_>>>()?;
    let mut json = serde_json::to_string_pretty(&slots)?;
    json.push('\n');
    Ok(json)
}

fn render_text(ranges: &[TimeRange]) -> Result<String> {
    if ranges.is_empty() {
        return Ok("no available slots\n".to_string());
    }
    let mut out = String::new();
    for range in ranges {
        let slot = SlotDto::from_range(range)?;
        out.push_str(&format!(
            "{}-{} ({} min)\n",
            slot.start, slot.end, slot.duration_minutes
        ));
    }
    Ok(out)
}

/// Read the day file from `path`, or from stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    let Some(path) = path else {
        return io::read_to_string(io::stdin()).context("Failed to read from stdin");
    };
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write `content` to `path`, or to stdout when no path is given.
fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")
        }
    }
}
