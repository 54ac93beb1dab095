//! Random square-formation experiment CLI.
//!
//! Commands:
//! - run: Run the full Monte Carlo experiment
//! - single: Run one trial and display the completing square

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use rand::prelude::*;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lattice_kernel::lattice::Lattice;
use squares_experiment::experiment::{run_trial, ExperimentRunner, ExperimentRunnerConfig};
use squares_experiment::render::render_grid;
use squares_experiment::results::format_duration;

/// Generate a timestamped output path from the given path.
/// e.g., "summary.json" -> "summary-20260829-010530.json"
fn timestamped_path(path: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("summary");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("json");
    let parent = path.parent().unwrap_or(std::path::Path::new("."));
    parent.join(format!("{}-{}.{}", stem, timestamp, ext))
}

#[derive(Parser)]
#[command(name = "squares-experiment")]
#[command(version)]
#[command(about = "Monte Carlo experiments on random square formation")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full experiment
    Run {
        /// Lattice side length
        #[arg(long, default_value = "10")]
        n: usize,

        /// Number of trials
        #[arg(long, default_value = "10000")]
        trials: u64,

        /// Report progress every k-th trial (0 disables)
        #[arg(long, default_value = "100")]
        report_every: u64,

        /// Render the success snapshot in reports when n is below this
        #[arg(long, default_value = "10")]
        render_threshold: usize,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Output file for the JSON run summary
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run a single trial and display the result
    Single {
        /// Lattice side length
        #[arg(long, default_value = "10")]
        n: usize,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Output file for the JSON trial record
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    match cli.command {
        Commands::Run {
            n,
            trials,
            report_every,
            render_threshold,
            seed,
            output,
        } => {
            let config = ExperimentRunnerConfig {
                n,
                trials,
                report_every,
                render_threshold,
                seed,
            };

            info!(n = n, trials = trials, "Starting experiment");
            let runner = ExperimentRunner::new(config);
            let summary = runner.run()?;

            println!("\n=== Experiment Complete ===");
            println!("Run: {}", summary.run_id);
            println!("Lattice: {}x{}", n, n);
            println!("Trials: {}", summary.stats.trials);
            println!("Elapsed: {}", format_duration(summary.elapsed_ms));
            println!("Trials/sec: {:.0}", summary.trials_per_sec);
            println!("Average points to square: {:.6}", summary.avg_points);
            println!("Average side length: {:.6}", summary.avg_side_length);
            println!("Points/size ratio: {:.6}", summary.points_to_size_ratio);

            if let Some(output) = output {
                let output_path = timestamped_path(&output);
                summary.save(&output_path)?;
                println!("Summary saved to: {}", output_path.display());
            }
        }

        Commands::Single { n, seed, output } => {
            let mut rng: Box<dyn RngCore> = match seed {
                Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
                None => Box::new(rand::rng()),
            };

            let mut lattice = Lattice::new(n)?;
            let outcome = run_trial(&mut lattice, &mut rng);

            println!("Points placed: {}", outcome.points_placed);
            println!("Side length: {:.6}", outcome.side_length);
            println!("Square: {}", outcome.square);
            println!("\n{}", render_grid(&lattice, &outcome.square));

            if let Some(output) = output {
                let json = serde_json::to_string_pretty(&outcome)?;
                std::fs::write(&output, json)?;
                println!("Trial record saved to: {}", output.display());
            }
        }
    }

    Ok(())
}
