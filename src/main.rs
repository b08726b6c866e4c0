use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;

use pagesim::replacer::{Access, PolicyKind, UnknownPolicy};
use pagesim::sim::{compare, run_policy, AccessEvent, EventSink, NullSink};
use pagesim::trace::{read_trace, TraceReader};
use pagesim::{FrameCapacity, SimConfig, DEFAULT_FRAME_CAPACITY, DEFAULT_TRACE_PATH};

#[derive(Parser)]
#[command(author, version, about = "pagesim - count page faults for FIFO, LRU, MRU and Optimal replacement")]
struct Cli {
    /// Trace file, one page number per line
    #[arg(default_value = DEFAULT_TRACE_PATH)]
    trace: PathBuf,

    /// Number of physical frames
    #[arg(short, long, default_value_t = DEFAULT_FRAME_CAPACITY as i64, allow_negative_numbers = true)]
    frames: i64,

    /// Policy to run: fifo, lru, mru, optimal or all
    #[arg(short, long, default_value = "all")]
    policy: PolicyArg,

    /// Print every hit, fault and eviction
    #[arg(short, long)]
    verbose: bool,
}

/// `--policy` value: one policy, or every policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PolicyArg {
    All,
    One(PolicyKind),
}

impl PolicyArg {
    fn selected(self) -> Option<PolicyKind> {
        match self {
            PolicyArg::All => None,
            PolicyArg::One(kind) => Some(kind),
        }
    }
}

impl FromStr for PolicyArg {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(PolicyArg::All);
        }
        s.parse().map(PolicyArg::One)
    }
}

/// Writes one line per event; output errors are reported once and then ignored.
struct PrintSink<W: Write> {
    out: W,
    failed: bool,
}

impl<W: Write> PrintSink<W> {
    fn new(out: W) -> Self {
        Self { out, failed: false }
    }
}

impl<W: Write> EventSink for PrintSink<W> {
    fn record(&mut self, event: &AccessEvent) {
        let result = match event.access {
            Access::Hit => writeln!(self.out, "Successful request of Page: {}", event.page_id.0),
            Access::Fault { evicted } => {
                writeln!(
                    self.out,
                    "Page fault while attempting to access page number: {}",
                    event.page_id.0
                )
                .and_then(|()| match evicted {
                    Some(victim) => writeln!(self.out, "Evicted Page: {}", victim.0),
                    None => Ok(()),
                })
            }
        };

        if let Err(err) = result {
            if !self.failed {
                log::warn!("Event output failed: {}", err);
                self.failed = true;
            }
        }
    }
}

fn run_streaming<S: EventSink>(kind: PolicyKind, capacity: FrameCapacity, path: &Path, sink: S) -> Result<()> {
    let reader = TraceReader::open(path).with_context(|| format!("opening trace {}", path.display()))?;
    let report = run_policy(kind, capacity, reader, sink)
        .with_context(|| format!("running {} over {}", kind, path.display()))?;

    println!("\n{}", report);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SimConfig::new(cli.frames, cli.policy.selected()).context("invalid configuration")?;
    let capacity = config.frame_capacity;

    if cli.verbose || config.policy.is_some() {
        for kind in config.policies() {
            println!("{} Policy Page Replacement Algorithm\n", kind);
            if cli.verbose {
                run_streaming(kind, capacity, &cli.trace, PrintSink::new(io::stdout().lock()))?;
            } else {
                run_streaming(kind, capacity, &cli.trace, NullSink)?;
            }
        }
        return Ok(());
    }

    let trace = read_trace(&cli.trace).with_context(|| format!("reading trace {}", cli.trace.display()))?;
    let comparison = compare(capacity, &trace);

    println!("{} references, {}", trace.len(), capacity);
    for report in &comparison.reports {
        println!("{}", report);
    }
    if let Some(best) = comparison.best() {
        println!("\nFewest faults: {} ({})", best.policy, best.stats);
    }

    Ok(())
}
