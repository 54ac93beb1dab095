//! Square detection: does a newly placed point complete a square with three
//! already-placed points?

use crate::lattice::Lattice;
use crate::point::{Point, Square};

/// Test whether `t`, the most recently placed point, is a vertex of a
/// square whose other three vertices are already occupied.
///
/// Scans the placement log in insertion order. For each prior point `p`
/// there are exactly two squares with `t`--`p` as an edge, one on each side
/// of the segment; their remaining vertices are `p` and `t` translated by
/// the perpendicular of `p - t`. Rotating both ways covers axis-aligned and
/// tilted squares of every size. A candidate is rejected when either
/// derived vertex falls off the lattice, and accepted when both derived
/// cells are occupied.
///
/// The first acceptance wins: log order, left-hand square before right-hand
/// for each `p`. This tie-break is part of the contract and makes the
/// result deterministic for a fixed placement history.
///
/// O(placed points) per call.
pub fn find_square(lattice: &Lattice, t: Point) -> Option<Square> {
    for &p in lattice.placed() {
        if p == t {
            continue;
        }

        // Left-hand square: p - t rotated clockwise
        let d2 = Point::new(p.x + p.y - t.y, p.y - p.x + t.x);
        let d4 = Point::new(t.x + p.y - t.y, t.y - p.x + t.x);
        if let Some(square) = accept(lattice, t, p, d2, d4) {
            return Some(square);
        }

        // Right-hand square: p - t rotated counterclockwise
        let d2 = Point::new(p.x - p.y + t.y, p.y + p.x - t.x);
        let d4 = Point::new(t.x - p.y + t.y, t.y + p.x - t.x);
        if let Some(square) = accept(lattice, t, p, d2, d4) {
            return Some(square);
        }
    }
    None
}

/// Accept the candidate square when both derived vertices are on the
/// lattice and occupied. Out-of-bounds candidates are a normal rejection,
/// not an error.
fn accept(lattice: &Lattice, t: Point, p: Point, d2: Point, d4: Point) -> Option<Square> {
    if lattice.in_bounds(d2)
        && lattice.in_bounds(d4)
        && lattice.is_occupied(d2)
        && lattice.is_occupied(d4)
    {
        Some(Square {
            v1: t,
            v2: d2,
            v3: p,
            v4: d4,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lattice_with(n: usize, points: &[Point]) -> Lattice {
        let mut lattice = Lattice::new(n).unwrap();
        for &p in points {
            lattice.occupy(p);
        }
        lattice
    }

    /// A returned square must have four distinct, in-bounds, occupied
    /// vertices, equal edges, and equal perpendicular diagonals.
    fn assert_valid_square(lattice: &Lattice, square: &Square) {
        let vertices = square.vertices();
        for (i, v) in vertices.iter().enumerate() {
            assert!(lattice.in_bounds(*v), "vertex {} out of bounds: {}", i, v);
            assert!(lattice.is_occupied(*v), "vertex {} unoccupied: {}", i, v);
            for w in &vertices[i + 1..] {
                assert_ne!(v, w, "duplicate vertex {}", v);
            }
        }

        let b = square.boundary();
        let side_sq = b[0].distance_sq(b[1]);
        assert!(side_sq > 0, "degenerate square");
        for i in 0..4 {
            assert_eq!(
                b[i].distance_sq(b[(i + 1) % 4]),
                side_sq,
                "edge {} length mismatch",
                i
            );
        }

        // Diagonals: equal length, perpendicular
        let (d1a, d1b) = (b[0], b[2]);
        let (d2a, d2b) = (b[1], b[3]);
        assert_eq!(d1a.distance_sq(d1b), d2a.distance_sq(d2b));
        let u = ((d1b.x - d1a.x) as i64, (d1b.y - d1a.y) as i64);
        let v = ((d2b.x - d2a.x) as i64, (d2b.y - d2a.y) as i64);
        assert_eq!(u.0 * v.0 + u.1 * v.1, 0, "diagonals not perpendicular");
    }

    #[test]
    fn test_three_points_never_form_a_square() {
        let pts = [Point::new(0, 0), Point::new(3, 0), Point::new(3, 3)];
        let lattice = lattice_with(4, &pts);
        assert!(find_square(&lattice, pts[2]).is_none());
    }

    #[test]
    fn test_axis_aligned_square_detected_whichever_corner_lands_last() {
        // The 4x4 corner square must be found exactly when its fourth
        // vertex is placed, regardless of which one that is.
        let corners = [
            Point::new(0, 0),
            Point::new(3, 0),
            Point::new(3, 3),
            Point::new(0, 3),
        ];

        for last in 0..4 {
            let mut lattice = Lattice::new(4).unwrap();
            for (i, &c) in corners.iter().enumerate() {
                if i != last {
                    lattice.occupy(c);
                    assert!(
                        find_square(&lattice, c).is_none(),
                        "square reported with only {} corners placed",
                        lattice.placed_count()
                    );
                }
            }

            lattice.occupy(corners[last]);
            let square = find_square(&lattice, corners[last])
                .expect("fourth corner must complete the square");
            assert_valid_square(&lattice, &square);
            assert_eq!(square.v1, corners[last]);
            assert!((square.side_length() - 3.0).abs() < 1e-12);

            let mut found: Vec<Point> = square.vertices().to_vec();
            let mut expected = corners.to_vec();
            found.sort_by_key(|p| (p.x, p.y));
            expected.sort_by_key(|p| (p.x, p.y));
            assert_eq!(found, expected);
        }
    }

    #[test]
    fn test_tilted_square_detected() {
        // Diamond inscribed in a 3x3 lattice
        let pts = [
            Point::new(1, 0),
            Point::new(2, 1),
            Point::new(0, 1),
            Point::new(1, 2),
        ];
        let lattice = lattice_with(3, &pts);

        let square = find_square(&lattice, pts[3]).expect("tilted square not found");
        assert_valid_square(&lattice, &square);
        assert!((square.side_length() - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_minimal_lattice_boundary() {
        // On n = 2 the only possible square is the full 2x2; it must appear
        // exactly when the fourth cell fills.
        let cells = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(0, 1),
            Point::new(1, 1),
        ];
        let mut lattice = Lattice::new(2).unwrap();
        for &c in &cells[..3] {
            lattice.occupy(c);
            assert!(find_square(&lattice, c).is_none());
        }

        lattice.occupy(cells[3]);
        let square = find_square(&lattice, cells[3]).expect("2x2 square not found");
        assert_valid_square(&lattice, &square);
        assert!((square.side_length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_bounds_candidates_are_rejected() {
        // The diagonal (0,2)--(2,0) only completes to squares whose other
        // vertices lie off a 3-lattice; the scan must reject them quietly.
        let pts = [
            Point::new(2, 0),
            Point::new(1, 2),
            Point::new(2, 1),
            Point::new(0, 2),
        ];
        let lattice = lattice_with(3, &pts);
        assert!(find_square(&lattice, Point::new(0, 2)).is_none());
    }

    #[test]
    fn test_first_partner_in_log_order_wins() {
        // Two axis-aligned squares share the corner (2,2). The partner
        // placed earliest must generate the returned square.
        let early_partner = Point::new(2, 4); // completes {(2,2),(2,4),(4,4),(4,2)}
        let pts = [
            early_partner,
            Point::new(0, 2),
            Point::new(2, 0),
            Point::new(4, 2),
            Point::new(4, 4),
            Point::new(0, 0),
        ];
        let mut lattice = lattice_with(5, &pts);

        let t = Point::new(2, 2);
        lattice.occupy(t);
        let square = find_square(&lattice, t).expect("completing point must be detected");
        assert_eq!(square.v3, early_partner, "log-order tie-break violated");
        assert_valid_square(&lattice, &square);
    }

    #[test]
    fn test_left_hand_case_wins_over_right_hand() {
        // One partner admits squares on both sides of the shared edge; the
        // left-hand square must be returned.
        let partner = Point::new(2, 3);
        let pts = [
            partner,
            Point::new(3, 3), // left-hand derived vertices
            Point::new(3, 2),
            Point::new(1, 3), // right-hand derived vertices
            Point::new(1, 2),
        ];
        let mut lattice = lattice_with(5, &pts);

        let t = Point::new(2, 2);
        lattice.occupy(t);
        let square = find_square(&lattice, t).expect("square must be detected");
        assert_eq!(square.v3, partner);
        assert_eq!(square.v2, Point::new(3, 3), "left-hand case must win");
        assert_eq!(square.v4, Point::new(3, 2));
        assert_valid_square(&lattice, &square);
    }

    #[test]
    fn test_dense_non_square_configuration() {
        // An L shape plus strays: plenty of points, no square
        let pts = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(0, 1),
            Point::new(0, 2),
            Point::new(3, 4),
        ];
        let mut lattice = Lattice::new(5).unwrap();
        for &p in &pts {
            lattice.occupy(p);
            assert!(
                find_square(&lattice, p).is_none(),
                "false positive after placing {}",
                p
            );
        }
    }

    #[test]
    fn test_new_point_is_v1() {
        let pts = [
            Point::new(0, 0),
            Point::new(2, 0),
            Point::new(2, 2),
            Point::new(0, 2),
        ];
        let lattice = lattice_with(3, &pts);
        let square = find_square(&lattice, pts[3]).unwrap();
        assert_eq!(square.v1, pts[3], "v1 must be the newly placed point");
    }
}
