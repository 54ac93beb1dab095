//! Lattice state: an `n x n` occupancy grid plus the ordered log of placed
//! points for the current trial.
//!
//! The grid answers occupancy queries in O(1); the log drives the detector's
//! linear scan and preserves placement order. The two are mutated together
//! and never diverge.

use anyhow::{bail, Result};

use crate::point::Point;

/// Occupancy state for one trial on a bounded square lattice.
#[derive(Debug, Clone)]
pub struct Lattice {
    /// Side length
    n: i32,
    /// Flat row-major occupancy grid, `n * n` cells
    cells: Vec<bool>,
    /// Placed points, in placement order
    placed: Vec<Point>,
}

impl Lattice {
    /// Create an empty lattice of side length `n`.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            bail!("Lattice side length must be positive");
        }
        let side = i32::try_from(n)
            .map_err(|_| anyhow::anyhow!("Lattice side length {} too large", n))?;
        let cell_count = n
            .checked_mul(n)
            .ok_or_else(|| anyhow::anyhow!("Lattice side length {} too large", n))?;

        Ok(Self {
            n: side,
            cells: vec![false; cell_count],
            placed: Vec::new(),
        })
    }

    /// Side length of the lattice.
    pub fn size(&self) -> i32 {
        self.n
    }

    /// Whether `p` lies on the lattice.
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.n && p.y >= 0 && p.y < self.n
    }

    fn index(&self, p: Point) -> usize {
        debug_assert!(self.in_bounds(p), "point {} off a {}-lattice", p, self.n);
        p.x as usize * self.n as usize + p.y as usize
    }

    /// Whether the cell at `p` is occupied. `p` must be in bounds.
    pub fn is_occupied(&self, p: Point) -> bool {
        self.cells[self.index(p)]
    }

    /// Mark `p` occupied and append it to the placement log.
    ///
    /// Idempotent: a second call for an already-occupied cell changes
    /// nothing. Grid and log are updated as one step. Returns whether the
    /// point was newly placed.
    pub fn occupy(&mut self, p: Point) -> bool {
        let idx = self.index(p);
        if self.cells[idx] {
            return false;
        }
        self.cells[idx] = true;
        self.placed.push(p);
        true
    }

    /// Clear all occupancy and the placement log, keeping the allocations.
    pub fn reset(&mut self) {
        self.cells.fill(false);
        self.placed.clear();
    }

    /// The placed points, in placement order.
    pub fn placed(&self) -> &[Point] {
        &self.placed
    }

    /// Number of placed points.
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }
}
