use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use faults::Fault;
use generate::{generate_script_output, Dictionary, GenerationLimits};
use pseubench::{init_logging, Mode};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(
    name = "pseubench",
    version,
    about = "Generates random data mimicking a benchmark script. Can also crash in nice ways."
)]
struct Cli {
    /// Path to the benchmark repository.
    benchmark_repo: PathBuf,
    /// Crash in a randomly chosen way.
    #[arg(long)]
    crash: bool,
    /// Crash in this specific way (implies --crash).
    #[arg(long, value_enum)]
    fault: Option<Fault>,
    /// Max amount of benchmarks, properties and results.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u64).range(1..))]
    max_sizes: u64,
    /// Path to a recorded JSON dataset to replay instead of generating.
    #[arg(long)]
    real_data: Option<PathBuf>,
    /// RNG seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Word list used for names, units and errors.
    #[arg(long)]
    dictionary: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging();

    let custom_dictionary = cli
        .dictionary
        .as_deref()
        .map(Dictionary::load)
        .transpose()
        .context("load dictionary")?;
    let dictionary = match &custom_dictionary {
        Some(dictionary) => dictionary,
        None => Dictionary::embedded(),
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mode = Mode::select(cli.crash, cli.fault, cli.real_data.as_deref());
    tracing::debug!(?mode, seed = ?cli.seed, "selected mode");

    match mode {
        Mode::Crash(fault) => {
            let fault = fault.unwrap_or_else(|| Fault::choose(&mut rng));
            let code = fault
                .plan(&mut rng)
                .execute(&mut out)
                .context("write fault output")?;
            return Ok(ExitCode::from(code));
        }
        Mode::Replay { dataset } => {
            let data = replay::fetch_correct_data(dataset, &cli.benchmark_repo)
                .with_context(|| format!("replay {}", dataset.display()))?;
            writeln!(out, "{data}").context("write replayed output")?;
        }
        Mode::Generate => {
            let max = usize::try_from(cli.max_sizes).context("--max-sizes out of range")?;
            let output =
                generate_script_output(dictionary, GenerationLimits::uniform(max), &mut rng);
            writeln!(out, "{}", model::to_json_string(&output)).context("write output")?;
        }
    }

    out.flush().context("flush stdout")?;
    Ok(ExitCode::SUCCESS)
}
