//! Command-line interface: argument parsing and the non-interactive
//! `trace` and `play` commands.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::config::Config;
use crate::search::{SessionError, SortedArray, StepView, Trace, ViewModel};
use crate::session::{play_to_end, step_delay, ArrayGenerator, SearchSession, SessionLimits};

#[derive(Debug, Parser)]
#[command(
    name = "splitscope",
    version,
    about = "Step through binary search one decision at a time"
)]
pub struct Cli {
    /// Directory for config and logs (default: ~/.splitscope)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive terminal visualizer (default)
    Tui(TuiArgs),
    /// Print every step of a search
    Trace(TraceArgs),
    /// Auto-play a search to the end, one frame per step
    Play(PlayArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct TuiArgs {
    /// Size of generated arrays
    #[arg(long)]
    pub size: Option<usize>,

    /// Initial search target
    #[arg(long, allow_hyphen_values = true)]
    pub target: Option<i64>,

    /// Do not force generated arrays to contain the target
    #[arg(long)]
    pub no_guarantee: bool,

    /// Auto-play speed multiplier (0.5-2.0)
    #[arg(long)]
    pub speed: Option<f64>,

    /// Seed for reproducible arrays
    #[arg(long)]
    pub seed: Option<u64>,
}

impl TuiArgs {
    /// Apply the flags on top of the loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(size) = self.size {
            config = config.with_array_size(size);
        }
        if let Some(target) = self.target {
            config = config.with_default_target(target);
        }
        if let Some(speed) = self.speed {
            config = config.with_speed(speed);
        }
        if self.no_guarantee {
            config = config.with_guarantee_target(false);
        }
        config
    }
}

/// Where the searched array comes from
#[derive(Debug, Clone, Default, Args)]
pub struct ArraySource {
    /// Comma-separated ascending values, e.g. `--array 1,5,9`
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, conflicts_with = "size")]
    pub array: Option<Vec<i64>>,

    /// Generate a random array of this size
    #[arg(long)]
    pub size: Option<usize>,

    /// Seed for the generated array
    #[arg(long, requires = "size")]
    pub seed: Option<u64>,

    /// Do not force the generated array to contain the target
    #[arg(long)]
    pub no_guarantee: bool,
}

#[derive(Debug, Clone, Args)]
pub struct TraceArgs {
    /// Value to search for
    #[arg(long, allow_hyphen_values = true)]
    pub target: i64,

    #[command(flatten)]
    pub source: ArraySource,

    /// Print the trace as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct PlayArgs {
    /// Value to search for
    #[arg(long, allow_hyphen_values = true)]
    pub target: i64,

    #[command(flatten)]
    pub source: ArraySource,

    /// Speed multiplier (0.5-2.0)
    #[arg(long)]
    pub speed: Option<f64>,
}

/// Build a session over the requested array and start the search.
///
/// A supplied `--array` is only checked for ordering; any target is
/// accepted. Generated arrays use the configured value range.
pub fn start_session(
    config: &Config,
    source: &ArraySource,
    target: i64,
) -> Result<SearchSession, SessionError> {
    let mut session = match &source.array {
        Some(values) => {
            let mut session = SearchSession::new(SessionLimits::unbounded());
            session.set_array(SortedArray::new(values.clone())?);
            session
        }
        None => {
            let generator = source
                .seed
                .map_or_else(ArrayGenerator::new, ArrayGenerator::seeded);
            let mut session = SearchSession::with_generator(config.limits(), generator);
            let guarantee = config.array.guarantee_target && !source.no_guarantee;
            let size = source.size.unwrap_or(config.array.size);
            session.generate_array(size, guarantee, target)?;
            session
        }
    };

    session.start_search(target)?;
    Ok(session)
}

#[derive(Serialize)]
struct TraceReport<'a> {
    array: &'a [i64],
    trace: &'a Trace,
}

/// Closing line for a finished trace.
pub fn summary_line(trace: &Trace) -> String {
    match trace.found_index() {
        Some(index) => format!(
            "Found {} at index {} after {} comparisons",
            trace.target(),
            index,
            trace.comparisons()
        ),
        None => format!(
            "{} not found after {} comparisons",
            trace.target(),
            trace.comparisons()
        ),
    }
}

/// Write one frame: progress, highlight strip and the step's message.
pub fn write_frame(out: &mut impl Write, view: &ViewModel) -> std::io::Result<()> {
    let message = view.log_lines().last().unwrap_or_default();
    writeln!(out, "[{}] {}", view.progress, message)?;
    writeln!(
        out,
        "    {}  range {}",
        view.highlight_strip(),
        view.stats.range_label()
    )
}

pub fn run_trace(config: &Config, args: &TraceArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let session = start_session(config, &args.source, args.target)?;
    let array = session.array().map_or(&[][..], SortedArray::as_slice);
    let Some(trace) = session.navigator().trace() else {
        return Err(SessionError::EmptyTrace.into());
    };

    if args.json {
        let report = TraceReport { array, trace };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(out, "Array: {:?}", array)?;
    for cursor in 0..trace.len() {
        write_frame(out, &StepView::project(array, trace, cursor))?;
    }
    writeln!(out, "{}", summary_line(trace))?;
    Ok(())
}

pub async fn run_play(config: &Config, args: &PlayArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let mut session = start_session(config, &args.source, args.target)?;
    let speed = args.speed.unwrap_or(config.playback.speed);
    let delay = step_delay(config.playback.base_delay, speed);

    if let Some(array) = session.array() {
        writeln!(out, "Array: {:?}", array.as_slice())?;
    }

    let mut write_result = Ok(());
    play_to_end(&mut session, delay, |view| {
        if write_result.is_ok() {
            write_result = write_frame(out, view).and_then(|_| out.flush());
        }
    })
    .await?;
    write_result?;

    if let Some(trace) = session.navigator().trace() {
        writeln!(out, "{}", summary_line(trace))?;
    }
    Ok(())
}
