//! Lattice Kernel: incremental square detection on a bounded integer lattice.
//!
//! Implements the core of the random square-formation experiment: an
//! occupancy grid with an ordered placement log, uniform sampling of empty
//! cells, and a detection test that decides in time linear in the number of
//! placed points whether the newest point completes a square (axis-aligned
//! or tilted) with three earlier points.

pub mod detector;
pub mod lattice;
pub mod point;
pub mod sampler;

pub use detector::find_square;
pub use lattice::Lattice;
pub use point::{Point, Square};
pub use sampler::sample_empty_point;
