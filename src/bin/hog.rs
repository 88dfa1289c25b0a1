//! Command-line runner for Hog strategy experiments.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;

use hog::eval::EvalConfig;
use hog::experiments::{run_experiments, Experiment};

#[derive(Debug, Parser)]
#[command(name = "hog", about = "Play Hog")]
struct Cli {
    /// Runs strategy experiments
    #[arg(short = 'r', long = "run-experiments", alias = "run_experiments")]
    run_experiments: bool,

    /// Experiments to run (defaults to the final strategy)
    #[arg(short, long, value_enum)]
    experiment: Vec<ExperimentArg>,

    /// Samples per estimate
    #[arg(short = 'n', long, default_value_t = 1000)]
    samples: usize,

    /// Root seed for all dice
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Run trials on all cores
    #[arg(long)]
    parallel: bool,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ExperimentArg {
    MaxRolls,
    AlwaysRoll8,
    Bacon,
    Swap,
    Final,
    All,
}

impl ExperimentArg {
    fn expand(self) -> Vec<Experiment> {
        match self {
            ExperimentArg::MaxRolls => vec![Experiment::MaxScoringNumRolls],
            ExperimentArg::AlwaysRoll8 => vec![Experiment::AlwaysRoll(8)],
            ExperimentArg::Bacon => vec![Experiment::Bacon],
            ExperimentArg::Swap => vec![Experiment::Swap],
            ExperimentArg::Final => vec![Experiment::Final],
            ExperimentArg::All => Experiment::all(),
        }
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if !cli.run_experiments {
        return Ok(());
    }

    let experiments = if cli.experiment.is_empty() {
        Experiment::defaults()
    } else {
        cli.experiment.iter().flat_map(|e| e.expand()).collect()
    };

    let config = EvalConfig::new()
        .with_samples(cli.samples)
        .with_seed(cli.seed)
        .with_parallel(cli.parallel);

    info!(?experiments, ?config, "running experiments");
    for report in run_experiments(&experiments, &config)? {
        println!("{report}");
    }

    Ok(())
}
