use std::f32::consts::TAU;

use crate::coords::Vec2;

/// Rotational offset applied to every polygon, in turns.
///
/// Fixes the first vertex at a quarter turn so all generated shapes share the
/// same "pointing" orientation regardless of side count.
const CANONICAL_TURN: f32 = 0.25;

/// Builds the vertex list of a regular `n`-gon around `center`.
///
/// Vertex `i` sits at angle `2π·(i/n + 0.25)`; consecutive vertices are
/// spaced by exactly `2π/n`. Pure function; the pipeline always passes
/// pre-validated inputs, so invalid ones are only debug-asserted.
pub fn regular_polygon(n: u32, center: Vec2, radius: f32) -> Vec<Vec2> {
    debug_assert!(n >= 3, "regular_polygon needs at least 3 sides");
    debug_assert!(radius > 0.0, "regular_polygon needs a positive radius");

    (0..n)
        .map(|i| {
            let angle = TAU * (i as f32 / n as f32 + CANONICAL_TURN);
            Vec2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-4;

    fn angle_of(v: Vec2) -> f32 {
        v.y.atan2(v.x)
    }

    #[test]
    fn produces_n_vertices_on_the_radius() {
        for n in 3..12 {
            let pts = regular_polygon(n, Vec2::zero(), 10.0);
            assert_eq!(pts.len(), n as usize);
            for p in &pts {
                assert!((p.length() - 10.0).abs() < TOL, "vertex off radius: {p:?}");
            }
        }
    }

    #[test]
    fn vertices_are_equally_spaced() {
        for n in [3u32, 4, 5, 6, 30] {
            let pts = regular_polygon(n, Vec2::zero(), 1.0);
            let step = TAU / n as f32;
            for i in 0..pts.len() {
                let a = angle_of(pts[i]);
                let b = angle_of(pts[(i + 1) % pts.len()]);
                let delta = (b - a).rem_euclid(TAU);
                assert!((delta - step).abs() < TOL, "n={n} i={i} delta={delta}");
            }
        }
    }

    #[test]
    fn first_vertex_points_a_quarter_turn_in() {
        // angle 2π·0.25 puts the first vertex at (cx, cy + r) for every n.
        for n in [3u32, 4, 7] {
            let pts = regular_polygon(n, Vec2::new(5.0, 5.0), 2.0);
            assert!((pts[0].x - 5.0).abs() < TOL);
            assert!((pts[0].y - 7.0).abs() < TOL);
        }
    }

    #[test]
    fn respects_center_translation() {
        let at_origin = regular_polygon(5, Vec2::zero(), 3.0);
        let shifted = regular_polygon(5, Vec2::new(10.0, -4.0), 3.0);
        for (a, b) in at_origin.iter().zip(&shifted) {
            assert!((a.x + 10.0 - b.x).abs() < TOL);
            assert!((a.y - 4.0 - b.y).abs() < TOL);
        }
    }
}
