//! ASCII rendering of a success snapshot.

use lattice_kernel::lattice::Lattice;
use lattice_kernel::point::{Point, Square};

/// Render the lattice with the completing square highlighted.
///
/// Rows run from `y = n - 1` down to `0` so the output matches Cartesian
/// orientation. Square vertices print as `#`, other occupied cells as `.`,
/// empty cells as blanks.
pub fn render_grid(lattice: &Lattice, square: &Square) -> String {
    let n = lattice.size();
    let vertices = square.vertices();
    let mut out = String::with_capacity((n as usize * 2 + 1) * n as usize);

    for y in (0..n).rev() {
        for x in 0..n {
            let p = Point::new(x, y);
            if vertices.contains(&p) {
                out.push_str("# ");
            } else if lattice.is_occupied(p) {
                out.push_str(". ");
            } else {
                out.push_str("  ");
            }
        }
        out.push('\n');
    }
    out
}
