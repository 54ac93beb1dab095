//! Point placement: uniform sampling of an empty lattice cell.

use rand::Rng;

use crate::lattice::Lattice;
use crate::point::Point;

/// Sample an unoccupied cell uniformly at random.
///
/// Rejection sampling: each axis is drawn independently in `[0, n)` and the
/// draw is retried while the cell is taken. The caller must not invoke this
/// on a saturated lattice; trials stop far below saturation (density stays
/// under roughly `1.7 * n` points), so the expected number of retries stays
/// small.
pub fn sample_empty_point(lattice: &Lattice, rng: &mut impl Rng) -> Point {
    let n = lattice.size();
    loop {
        let p = Point::new(rng.random_range(0..n), rng.random_range(0..n));
        if !lattice.is_occupied(p) {
            return p;
        }
    }
}
