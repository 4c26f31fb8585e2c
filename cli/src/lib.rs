//! Fake benchmark script for exercising benchmark output consumers.
//!
//! The binary stands in for a real benchmark script and prints one of:
//!
//! - a random, contract-conforming document
//! - the recorded output of a real run, looked up by git revision
//! - a deliberately broken result from the fault catalog
//!
//! # Design Principles
//!
//! - **Quiet by default** - Only the document goes to stdout; logging is off unless requested.
//! - **Crashing beats replay beats generation** - See [`Mode::select`].

use std::io;
use std::path::Path;

use faults::Fault;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `PSEUBENCH_LOG=debug`.
pub const LOG_ENV: &str = "PSEUBENCH_LOG";

/// What a single run does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    /// Run a fault; `None` picks one at random.
    Crash(Option<Fault>),
    /// Print the recorded output from this dataset.
    Replay { dataset: &'a Path },
    /// Print a random document.
    Generate,
}

impl<'a> Mode<'a> {
    /// Resolves the mode from the command-line flags.
    ///
    /// A requested fault implies crash mode. Crash mode wins over replay, and
    /// replay wins over generation.
    pub const fn select(crash: bool, fault: Option<Fault>, real_data: Option<&'a Path>) -> Self {
        if crash || fault.is_some() {
            return Self::Crash(fault);
        }
        match real_data {
            Some(dataset) => Self::Replay { dataset },
            None => Self::Generate,
        }
    }
}

/// Installs a stderr subscriber filtered by [`LOG_ENV`], silent when unset.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
