//! Random square-formation experiment harness.
//!
//! Drives repeated trials against the lattice kernel:
//! - Places points at random empty cells until a square forms
//! - Accumulates point-count and side-length statistics across trials
//! - Reports progress and renders success snapshots on a cadence

pub mod experiment;
pub mod render;
pub mod results;
