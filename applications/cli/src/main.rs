/// Sounder - pick clips from a directory with the adaptive selector
mod config;
mod error;

use clap::{Parser, Subcommand};
use crate::config::SounderConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sounder_selector::{DirectoryRepository, Selector, SelectorBuilder};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sounder")]
#[command(about = "Adaptive clip selection from a directory of audio clips", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Clip directory (overrides configuration)
    #[arg(short, long, global = true, env = "SOUNDER_DIR")]
    dir: Option<PathBuf>,

    /// Random seed for reproducible runs
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the next selected clips
    Pick {
        /// Number of clips to select
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Run many selections and report clip frequencies
    Simulate {
        /// Number of selections
        #[arg(short = 'n', long, default_value_t = 10_000)]
        draws: usize,
    },
    /// Show the clip order and the current distribution
    Weights,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sounder=info,sounder_selector=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = SounderConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.dir {
        config.clips.directory = dir;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;

    let selector = build_selector(&config)?;

    match cli.command {
        Commands::Pick { count } => pick(&selector, count),
        Commands::Simulate { draws } => simulate(&selector, draws),
        Commands::Weights => weights(&selector),
    }

    Ok(())
}

fn build_selector(config: &SounderConfig) -> crate::error::Result<Selector> {
    let repository = DirectoryRepository::new(&config.clips.directory);
    tracing::info!("Loading clips from {}", repository.root().display());

    let mut builder = SelectorBuilder::new()
        .boost_policy(config.boost)
        .load_from(&repository)?;

    if let Some(seed) = config.seed {
        tracing::debug!("Using fixed seed {}", seed);
        builder = builder.random_source(StdRng::seed_from_u64(seed));
    }

    Ok(builder.build()?)
}

fn pick(selector: &Selector, count: usize) {
    for _ in 0..count {
        println!("{}", selector.select_next());
    }
}

fn simulate(selector: &Selector, draws: usize) {
    let mut counts = vec![0usize; selector.clips().len()];
    let mut cycles = 0usize;

    for _ in 0..draws {
        let selection = selector.select();
        counts[selection.position] += 1;
        if selection.completed_cycle() {
            cycles += 1;
        }
    }

    println!("{:>5}  {:>8}  {:>7}  clip", "pos", "count", "share");
    for (position, clip) in selector.clips().iter().enumerate() {
        let share = if draws == 0 {
            0.0
        } else {
            counts[position] as f64 * 100.0 / draws as f64
        };
        println!("{:>5}  {:>8}  {:>6.2}%  {}", position, counts[position], share, clip);
    }
    println!();
    println!("{} draws, {} completed boost cycles", draws, cycles);
}

fn weights(selector: &Selector) {
    let distribution = selector.distribution();
    let state = selector.state();

    println!("state: {:?}", state);
    for (position, clip) in selector.clips().iter().enumerate() {
        let marker = if state.is_boosting() && state.next_target_index() == position {
            " <- target"
        } else {
            ""
        };
        println!(
            "{:>5}  {:>3}  {}{}",
            position,
            distribution.weights()[position],
            clip,
            marker
        );
    }
}
