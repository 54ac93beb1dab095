//! Statistics accumulation and run summaries.
//!
//! Captures the three aggregates the experiment measures:
//! - Average number of points needed to form a square
//! - Average side length of the completing square
//! - Ratio of the point average to the lattice side length

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::experiment::{ExperimentRunnerConfig, TrialOutcome};

/// Running totals across trials.
///
/// Both totals are monotonically non-decreasing; they reset only at run
/// start, never per trial.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunningStats {
    /// Trials completed so far
    pub trials: u64,
    /// Cumulative point count at success
    pub total_points: u64,
    /// Cumulative square side length at success
    pub total_side_length: f64,
}

impl RunningStats {
    /// Create empty running stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trial outcome into the running totals.
    pub fn record(&mut self, outcome: &TrialOutcome) {
        self.trials += 1;
        self.total_points += outcome.points_placed as u64;
        self.total_side_length += outcome.side_length;
    }

    /// Average number of points needed to form a square.
    pub fn avg_points(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.total_points as f64 / self.trials as f64
    }

    /// Average side length of the completing square.
    pub fn avg_side_length(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.total_side_length / self.trials as f64
    }

    /// Ratio of the point average to the lattice side length `n`.
    pub fn points_to_size_ratio(&self, n: usize) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.total_points as f64 / (self.trials as f64 * n as f64)
    }
}

/// Serializable record of one experiment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Unique run identifier
    pub run_id: String,
    /// Configuration the run was executed with
    pub config: ExperimentRunnerConfig,
    /// Start time
    pub started_at: DateTime<Utc>,
    /// End time
    pub ended_at: DateTime<Utc>,
    /// Raw running totals
    pub stats: RunningStats,
    /// Average points needed to form a square
    pub avg_points: f64,
    /// Average side length of the completing square
    pub avg_side_length: f64,
    /// avg_points divided by the lattice side length
    pub points_to_size_ratio: f64,
    /// Wall-clock duration in milliseconds
    pub elapsed_ms: u64,
    /// Throughput over the whole run
    pub trials_per_sec: f64,
}

impl RunSummary {
    /// Build a summary from the final accumulator state.
    pub fn new(
        run_id: String,
        config: &ExperimentRunnerConfig,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
        stats: &RunningStats,
        elapsed_ms: u64,
    ) -> Self {
        let trials_per_sec = if elapsed_ms > 0 {
            stats.trials as f64 * 1000.0 / elapsed_ms as f64
        } else {
            0.0
        };

        Self {
            run_id,
            config: config.clone(),
            started_at,
            ended_at,
            avg_points: stats.avg_points(),
            avg_side_length: stats.avg_side_length(),
            points_to_size_ratio: stats.points_to_size_ratio(config.n),
            stats: stats.clone(),
            elapsed_ms,
            trials_per_sec,
        }
    }

    /// Save the summary to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a summary from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let summary = serde_json::from_str(&json)?;
        Ok(summary)
    }
}

/// Format a duration in milliseconds for display.
pub fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        format!("{:.1}m", ms as f64 / 60_000.0)
    }
}
