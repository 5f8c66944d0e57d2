//! Integration tests for triangulating polygons with holes.

use approx::assert_relative_eq;
use earshull::polygon::{
    merge_holes, triangulate_polygon, triangulate_with_holes, Polygon, Triangulation,
};
use earshull::{Point2, TriangleWinding, TriangulationError, TriangulationOptions};

fn polygon(coords: &[(f64, f64)]) -> Polygon<f64> {
    Polygon::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
}

fn square(min: f64, max: f64) -> Polygon<f64> {
    polygon(&[(min, min), (max, min), (max, max), (min, max)])
}

/// Clockwise square for use as a hole.
fn square_hole(min: f64, max: f64) -> Polygon<f64> {
    polygon(&[(min, min), (min, max), (max, max), (max, min)])
}

/// n + h + 2k - 2 for n outer vertices, h hole vertices and k holes.
fn expected_triangles(outer: &Polygon<f64>, holes: &[Polygon<f64>]) -> usize {
    let hole_vertices: usize = holes.iter().map(Polygon::len).sum();
    outer.len() + hole_vertices + 2 * holes.len() - 2
}

/// Separating-axis test: true when the interiors of two triangles overlap.
///
/// Triangles that only share an edge or a vertex touch along the separating
/// axis and do not count.
fn interiors_overlap(t1: [Point2<f64>; 3], t2: [Point2<f64>; 3], tolerance: f64) -> bool {
    let project = |tri: &[Point2<f64>; 3], (nx, ny): (f64, f64)| {
        tri.iter()
            .map(|p| p.x * nx + p.y * ny)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    };

    for tri in [&t1, &t2] {
        for i in 0..3 {
            let (a, b) = (tri[i], tri[(i + 1) % 3]);
            let axis = (a.y - b.y, b.x - a.x);
            let (lo1, hi1) = project(&t1, axis);
            let (lo2, hi2) = project(&t2, axis);
            if hi1 <= lo2 + tolerance || hi2 <= lo1 + tolerance {
                return false;
            }
        }
    }
    true
}

fn assert_disjoint(result: &Triangulation<f64>) {
    let corners: Vec<_> = result.triangle_points().collect();
    for (i, &t1) in corners.iter().enumerate() {
        for (j, &t2) in corners.iter().enumerate().skip(i + 1) {
            assert!(
                !interiors_overlap(t1, t2, 1e-9),
                "triangles {} and {} overlap",
                i,
                j
            );
        }
    }
}

fn demo_outer() -> Polygon<f64> {
    polygon(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (1.0, 1.0),
        (1.1, 1.0),
        (1.1, 1.7),
        (0.5, 1.7),
        (0.5, 1.8),
        (1.2, 1.8),
        (1.2, 1.0),
        (2.0, 1.0),
        (5.0, 0.0),
        (4.0, 2.0),
        (4.0, 2.1),
        (3.1, 2.1),
        (3.1, 0.9),
        (3.0, 0.9),
        (3.0, 2.2),
        (4.0, 2.2),
        (4.0, 4.0),
        (2.0, 4.0),
        (2.0, 3.0),
        (1.0, 3.0),
        (1.0, 2.0),
        (0.0, 2.0),
    ])
}

fn demo_holes() -> Vec<Polygon<f64>> {
    vec![
        square_hole(0.25, 0.75),
        square_hole(3.25, 3.75),
        polygon(&[(2.1, 2.5), (2.5, 2.9), (2.9, 2.5), (2.5, 2.1)]),
    ]
}

#[test]
fn square_with_square_hole() {
    let outer = square(0.0, 2.0);
    let holes = [square_hole(0.5, 1.5)];

    let result = triangulate_with_holes(&outer, &holes, TriangulationOptions::default()).unwrap();

    assert_eq!(result.len(), 8);
    assert_eq!(result.len(), expected_triangles(&outer, &holes));
    assert_eq!(result.points.len(), 8);
    assert_relative_eq!(result.area(), 3.0, epsilon = 1e-12);
}

#[test]
fn two_holes() {
    let outer = square(0.0, 4.0);
    let holes = [square_hole(0.5, 1.5), square_hole(2.5, 3.5)];

    let merged = merge_holes(&outer, &holes).unwrap();
    assert_eq!(
        merged.boundary,
        vec![0, 4, 5, 6, 7, 4, 0, 1, 2, 8, 9, 10, 11, 8, 2, 3]
    );

    let result = triangulate_with_holes(&outer, &holes, TriangulationOptions::default()).unwrap();
    assert_eq!(result.len(), 14);
    assert_relative_eq!(result.area(), 14.0, epsilon = 1e-12);
    for tri in &result.triangles {
        assert!(tri.signed_area(&result.points) > 0.0);
    }
    assert_disjoint(&result);

    let refined = triangulate_with_holes(
        &outer,
        &holes,
        TriangulationOptions::default().with_refinement(true),
    )
    .unwrap();
    assert_eq!(refined.len(), 14);
    assert_relative_eq!(refined.area(), 14.0, epsilon = 1e-12);
    assert_disjoint(&refined);
}

#[test]
fn triangular_hole() {
    let outer = square(0.0, 4.0);
    let holes = [polygon(&[(1.0, 1.0), (2.0, 3.0), (3.0, 1.0)])];

    let result = triangulate_with_holes(&outer, &holes, TriangulationOptions::default()).unwrap();
    assert_eq!(result.len(), 7);
    assert_relative_eq!(result.area(), 14.0, epsilon = 1e-12);
}

#[test]
fn concave_outline_with_three_holes() {
    let outer = demo_outer();
    let holes = demo_holes();
    let hole_area: f64 = holes.iter().map(Polygon::area).sum();

    let result = triangulate_with_holes(&outer, &holes, TriangulationOptions::default()).unwrap();

    assert_eq!(result.len(), 40);
    assert_eq!(result.len(), expected_triangles(&outer, &holes));
    assert_eq!(result.points.len(), 36);
    assert_relative_eq!(result.area(), outer.area() - hole_area, epsilon = 1e-9);
    assert_relative_eq!(result.area(), 10.32, epsilon = 1e-9);
    for tri in &result.triangles {
        assert!(tri.signed_area(&result.points) > 0.0);
    }
    assert_disjoint(&result);
}

#[test]
fn refinement_keeps_coverage() {
    let outer = demo_outer();
    let holes = demo_holes();
    let options = TriangulationOptions::default().with_refinement(true);

    let result = triangulate_with_holes(&outer, &holes, options).unwrap();

    assert_eq!(result.len(), 40);
    assert_relative_eq!(result.area(), 10.32, epsilon = 1e-9);
    for tri in &result.triangles {
        assert!(tri.signed_area(&result.points) > 0.0);
    }
    assert_disjoint(&result);
}

#[test]
fn refinement_iteration_limit() {
    let outer = demo_outer();
    let holes = demo_holes();
    let options = TriangulationOptions::default()
        .with_refinement(true)
        .with_max_flip_iterations(0);

    assert_eq!(
        triangulate_with_holes(&outer, &holes, options),
        Err(TriangulationError::ConvergenceFailed { iterations: 0 })
    );
}

#[test]
fn winding_flag_orders_triangles() {
    let outer = square(0.0, 2.0);
    let holes = [square_hole(0.5, 1.5)];

    let winding = TriangleWinding::try_from(0).unwrap();
    let options = TriangulationOptions::default().with_winding(winding);
    let result = triangulate_with_holes(&outer, &holes, options).unwrap();

    assert_eq!(result.len(), 8);
    for tri in &result.triangles {
        assert!(tri.signed_area(&result.points) < 0.0);
    }
    assert_relative_eq!(result.area(), 3.0, epsilon = 1e-12);
}

#[test]
fn blocked_hole_reports_no_bridge() {
    let outer = square(0.0, 10.0);
    let holes = [
        square_hole(4.0, 6.0),
        polygon(&[(5.0, 0.5), (0.5, 5.0), (5.0, 9.5), (9.5, 5.0)]),
    ];

    assert_eq!(
        triangulate_with_holes(&outer, &holes, TriangulationOptions::default()),
        Err(TriangulationError::NoBridgeFound { hole: 0 })
    );
}

#[test]
fn hole_outside_outer_is_degenerate() {
    let outer = square(0.0, 4.0);
    let holes = [polygon(&[(1.0, 5.0), (1.0, 6.0), (2.0, 6.0), (2.0, 5.0)])];

    let result = triangulate_with_holes(&outer, &holes, TriangulationOptions::default());
    assert!(matches!(
        result,
        Err(TriangulationError::DegenerateGeometry { .. })
    ));
}

#[test]
fn clockwise_outer_has_no_ear() {
    let outer = square(0.0, 1.0).reversed();
    assert_eq!(
        triangulate_polygon(&outer, TriangleWinding::default()),
        Err(TriangulationError::NoEarFound { remaining: 4 })
    );
}

#[test]
fn invalid_winding_flag() {
    assert_eq!(
        TriangleWinding::try_from(7),
        Err(TriangulationError::InvalidWindingFlag(7))
    );
}
