#![forbid(unsafe_code)]

//! Pattern lock trace replay.
//!
//! # Running
//!
//! ```sh
//! cargo run -p patternlock-harness -- crates/patternlock-harness/fixtures/top_row_success.json
//! cargo run -p patternlock-harness -- trace.json --pattern 1,5,9 --svg frame.svg
//! ```
//!
//! Prints a JSON summary on stdout. Set `RUST_LOG=debug` to see the
//! tracker's events on stderr.

use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use patternlock_harness::{ReplayError, Trace, replay};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "patternlock-replay",
    about = "Replay a recorded pointer trace through the pattern lock tracker",
    version
)]
struct Args {
    /// JSON trace to replay.
    trace: PathBuf,

    /// Write the final frame as SVG.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Expected pattern as 1-based cell ids, e.g. `1,5,9`.
    #[arg(long, value_delimiter = ',')]
    pattern: Option<Vec<NonZeroUsize>>,
}

impl Args {
    fn expected(&self) -> Option<Vec<usize>> {
        self.pattern
            .as_ref()
            .map(|ids| ids.iter().map(|id| id.get()).collect())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), ReplayError> {
    let trace = Trace::load(&args.trace)?;
    let expected = args.expected();
    let outcome = replay(&trace, expected.as_deref())?;

    if let Some(path) = &args.svg {
        fs::write(path, &outcome.svg)?;
        tracing::info!(message = "patternlock.svg_written", path = %path.display());
    }
    println!("{}", serde_json::to_string_pretty(&outcome.summary)?);
    Ok(())
}
