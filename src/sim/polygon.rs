//! Polygon area and collision radius
//!
//! Polygons are ordered vertex lists in body-local space; vertex i connects
//! to vertex i+1, and the last vertex connects back to the first.

use glam::Vec2;

use crate::math::{cross, get_wrapped};

/// Shoelace total with its sign kept.
///
/// Accumulates `((a.y + b.y) / 2) * (b.x - a.x)` over every edge. With y up,
/// the result is positive for clockwise winding and negative for
/// counter-clockwise.
pub(crate) fn signed_area(vertices: &[Vec2]) -> f32 {
    let mut total = 0.0;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = *get_wrapped(vertices, i as isize + 1);

        let dy = (a.y + b.y) / 2.0;
        let dx = b.x - a.x;
        total += dy * dx;
    }
    total
}

/// Unsigned polygon area
pub fn polygon_area(vertices: &[Vec2]) -> f32 {
    signed_area(vertices).abs()
}

/// Radius of the circle with the same area as the polygon.
///
/// A cheap broad-phase proxy, not a bound: elongated shapes poke out of it.
/// Degenerate polygons (collinear, fewer than three points) give 0.
pub fn collision_radius(vertices: &[Vec2]) -> f32 {
    (polygon_area(vertices) / std::f32::consts::PI).sqrt()
}

/// Point containment for a clockwise triangle `(a, b, c)`.
///
/// Points on an edge count as inside.
pub fn is_point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let cross1 = cross(b - a, p - a);
    let cross2 = cross(c - b, p - b);
    let cross3 = cross(a - c, p - c);

    !(cross1 > 0.0 || cross2 > 0.0 || cross3 > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{PI, TAU};

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]
    }

    /// Standard cross-product shoelace, for comparison
    fn reference_area(vertices: &[Vec2]) -> f32 {
        let n = vertices.len();
        let mut sum = 0.0;
        for i in 0..n {
            sum += cross(vertices[i], vertices[(i + 1) % n]);
        }
        (sum / 2.0).abs()
    }

    fn star(radii: &[f32]) -> Vec<Vec2> {
        let step = TAU / radii.len() as f32;
        radii
            .iter()
            .enumerate()
            .map(|(i, r)| crate::polar_to_cartesian(*r, i as f32 * step))
            .collect()
    }

    #[test]
    fn test_square_area() {
        assert!((polygon_area(&unit_square()) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_signed_area_winding() {
        // Counter-clockwise with y up
        assert!(signed_area(&unit_square()) < 0.0);

        let mut cw = unit_square();
        cw.reverse();
        assert!(signed_area(&cw) > 0.0);
    }

    #[test]
    fn test_collision_radius_of_square() {
        // Side 2: area 4, equal-area radius sqrt(4/π) ≈ 1.128 vs circumradius √2
        let square = vec![
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
        ];
        let r = collision_radius(&square);
        assert!((r - (4.0 / PI).sqrt()).abs() < 1e-5);
        assert!((r - 1.128).abs() < 1e-3);
        // Ratio to circumradius is sqrt(2/π) for any square
        assert!((r / 2.0_f32.sqrt() - (2.0 / PI).sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_collision_radius_degenerate() {
        let line = vec![Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)];
        assert_eq!(collision_radius(&line), 0.0);
        assert_eq!(collision_radius(&[Vec2::ZERO, Vec2::X]), 0.0);
        assert_eq!(collision_radius(&[]), 0.0);
    }

    #[test]
    fn test_point_in_triangle() {
        // Clockwise with y up
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(0.0, 2.0);
        let c = Vec2::new(2.0, 0.0);

        assert!(is_point_in_triangle(Vec2::new(0.5, 0.5), a, b, c));
        assert!(!is_point_in_triangle(Vec2::new(2.0, 2.0), a, b, c));
        assert!(!is_point_in_triangle(Vec2::new(-0.1, 0.5), a, b, c));
    }

    #[test]
    fn test_point_on_edge_is_inside() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(0.0, 2.0);
        let c = Vec2::new(2.0, 0.0);

        assert!(is_point_in_triangle(Vec2::new(0.0, 1.0), a, b, c));
        assert!(is_point_in_triangle(Vec2::new(1.0, 1.0), a, b, c));
        assert!(is_point_in_triangle(a, a, b, c));
    }

    proptest! {
        #[test]
        fn area_matches_reference(radii in prop::collection::vec(1.0f32..50.0, 3..16)) {
            let poly = star(&radii);
            let area = polygon_area(&poly);
            let expected = reference_area(&poly);
            prop_assert!((area - expected).abs() <= 1e-3 * expected.max(1.0));
        }

        #[test]
        fn area_invariant_under_rotation_and_reversal(
            radii in prop::collection::vec(1.0f32..50.0, 3..16),
            shift in 0usize..16,
        ) {
            let poly = star(&radii);
            let area = polygon_area(&poly);

            let mut rotated = poly.clone();
            rotated.rotate_left(shift % poly.len());
            prop_assert!((polygon_area(&rotated) - area).abs() <= 1e-3 * area.max(1.0));

            let mut reversed = poly.clone();
            reversed.reverse();
            prop_assert!((polygon_area(&reversed) - area).abs() <= 1e-3 * area.max(1.0));
            prop_assert!((signed_area(&reversed) + signed_area(&poly)).abs() <= 1e-3 * area.max(1.0));
        }

        #[test]
        fn radius_gives_equal_area_circle(radii in prop::collection::vec(1.0f32..50.0, 3..16)) {
            let poly = star(&radii);
            let r = collision_radius(&poly);
            let area = polygon_area(&poly);
            prop_assert!((PI * r * r - area).abs() <= 1e-3 * area.max(1.0));
        }
    }
}
