//! Geometric value types: lattice points and detected squares.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point on the bounded integer lattice.
///
/// Coordinates are signed so that square-completion arithmetic can wander
/// off the lattice before being rejected; valid points always lie in
/// `[0, n)` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a point at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_sq(self, other: Point) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (self.distance_sq(other) as f64).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A detected square.
///
/// `v1` is the newly placed vertex and `v3` the previously placed vertex it
/// pairs with; `v1`--`v3` is an edge of the square. `v2` is the derived
/// vertex adjacent to `v3`, `v4` the derived vertex adjacent to `v1`, so
/// the diagonals are `v1`--`v2` and `v3`--`v4` and the cyclic boundary
/// order is `v1, v3, v2, v4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    pub v1: Point,
    pub v2: Point,
    pub v3: Point,
    pub v4: Point,
}

impl Square {
    /// Side length: the Euclidean distance between the adjacent vertices
    /// `v2` and `v3`. This is the size statistic recorded per trial.
    pub fn side_length(&self) -> f64 {
        self.v2.distance(self.v3)
    }

    /// All four vertices, in stored order.
    pub fn vertices(&self) -> [Point; 4] {
        [self.v1, self.v2, self.v3, self.v4]
    }

    /// Vertices in cyclic order around the square's boundary.
    pub fn boundary(&self) -> [Point; 4] {
        [self.v1, self.v3, self.v2, self.v4]
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {} {}]", self.v1, self.v2, self.v3, self.v4)
    }
}
