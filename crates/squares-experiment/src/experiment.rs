//! Experiment runner for random square-formation trials.
//!
//! Orchestrates the experiment lifecycle:
//! 1. Reset the lattice
//! 2. Place random points until the detector reports a square
//! 3. Accumulate statistics, report on a cadence, repeat

use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use lattice_kernel::detector::find_square;
use lattice_kernel::lattice::Lattice;
use lattice_kernel::point::Square;
use lattice_kernel::sampler::sample_empty_point;

use crate::render::render_grid;
use crate::results::{RunSummary, RunningStats};

/// Configuration for the experiment runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentRunnerConfig {
    /// Lattice side length
    pub n: usize,
    /// Number of trials to run
    pub trials: u64,
    /// Report progress every k-th completed trial (0 disables reporting)
    pub report_every: u64,
    /// Render the success snapshot in reports when n is below this
    pub render_threshold: usize,
    /// Random seed for reproducibility (None for random)
    pub seed: Option<u64>,
}

impl Default for ExperimentRunnerConfig {
    fn default() -> Self {
        Self {
            n: 10,
            trials: 10_000,
            report_every: 100,
            render_threshold: 10,
            seed: None,
        }
    }
}

/// Outcome of a single trial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// Points on the lattice when the square formed
    pub points_placed: usize,
    /// Side length of the completing square
    pub side_length: f64,
    /// The completing square itself
    pub square: Square,
}

/// Place random points on `lattice` until one completes a square.
///
/// The lattice is reset first; on return it holds the success snapshot,
/// with the completing square's vertices among the placed points.
pub fn run_trial(lattice: &mut Lattice, rng: &mut impl Rng) -> TrialOutcome {
    lattice.reset();
    loop {
        let pt = sample_empty_point(lattice, rng);
        lattice.occupy(pt);
        if let Some(square) = find_square(lattice, pt) {
            return TrialOutcome {
                points_placed: lattice.placed_count(),
                side_length: square.side_length(),
                square,
            };
        }
    }
}

/// Runs the configured number of trials and accumulates statistics.
pub struct ExperimentRunner {
    config: ExperimentRunnerConfig,
}

impl ExperimentRunner {
    /// Create a new runner with the given configuration.
    pub fn new(config: ExperimentRunnerConfig) -> Self {
        Self { config }
    }

    /// Drive all trials to completion and return the run summary.
    pub fn run(&self) -> Result<RunSummary> {
        let run_id = Uuid::new_v4().to_string();
        let started_at = Utc::now();
        let start = Instant::now();

        let mut rng: Box<dyn RngCore> = match self.config.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::rng()),
        };

        let mut lattice = Lattice::new(self.config.n)?;
        let mut stats = RunningStats::new();

        for trial in 0..self.config.trials {
            let outcome = run_trial(&mut lattice, &mut rng);
            stats.record(&outcome);
            debug!(
                trial = trial,
                points = outcome.points_placed,
                side = outcome.side_length,
                "Trial complete"
            );

            let completed = trial + 1;
            if self.config.report_every > 0 && completed % self.config.report_every == 0 {
                let elapsed = start.elapsed().as_secs_f64();
                info!(
                    progress = format!("{}/{}", completed, self.config.trials),
                    avg_points = format!("{:.4}", stats.avg_points()),
                    avg_side = format!("{:.4}", stats.avg_side_length()),
                    ratio = format!("{:.4}", stats.points_to_size_ratio(self.config.n)),
                    trials_per_sec = format!("{:.0}", completed as f64 / elapsed.max(f64::EPSILON)),
                    "Completed trial"
                );

                if self.config.n < self.config.render_threshold {
                    println!("{}", render_grid(&lattice, &outcome.square));
                }
            }
        }

        let elapsed_ms = start.elapsed().as_millis() as u64;
        Ok(RunSummary::new(
            run_id,
            &self.config,
            started_at,
            Utc::now(),
            &stats,
            elapsed_ms,
        ))
    }
}
