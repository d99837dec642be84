// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use triangulator::geometry::{CanonicalEdge, Point2};
use triangulator::kernel::{circumcircle_contains, orient2d};
use triangulator::operations::triangulation::delaunay::{Delaunay, triangulate, triangulate_batch};
use triangulator::operations::triangulation::{Triangle, Triangulate2D, Triangulation};
use triangulator::TriangulatorError;

fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
    coords.iter().copied().map(Point2::from).collect()
}

fn random_cloud(seed: u64, n: usize) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point2::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0)))
        .collect()
}

fn used_indices(triangles: &[Triangle]) -> HashSet<usize> {
    triangles.iter().flat_map(|t| t.indices()).collect()
}

fn assert_delaunay(points: &[Point2], triangles: &[Triangle]) {
    for t in triangles {
        let (a, b, c) = (&points[t.0], &points[t.1], &points[t.2]);
        for (i, p) in points.iter().enumerate() {
            if !t.contains(i) {
                assert!(
                    !circumcircle_contains(p, a, b, c),
                    "point {i} lies inside the circumcircle of {t:?}"
                );
            }
        }
    }
}

#[test]
fn test_fewer_than_three_points() {
    assert!(triangulate(&[]).unwrap().is_empty());
    assert!(triangulate(&pts(&[(0.0, 0.0)])).unwrap().is_empty());
    assert!(triangulate(&pts(&[(0.0, 0.0), (1.0, 0.0)])).unwrap().is_empty());
}

#[test]
fn test_single_triangle() {
    let tris = triangulate(&pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])).unwrap();
    assert_eq!(tris, vec![Triangle(0, 1, 2)]);
}

#[test]
fn test_square() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let tris = triangulate(&points).unwrap();

    assert_eq!(tris.len(), 2);
    assert_eq!(used_indices(&tris), (0..4).collect());
    for t in &tris {
        let area = orient2d(&points[t.0], &points[t.1], &points[t.2]).abs() / 2.0;
        assert!(area > 1e-12, "degenerate triangle {t:?}");
    }

    let result: HashSet<Triangle> = tris.into_iter().collect();
    let first: HashSet<Triangle> = [Triangle(0, 1, 2), Triangle(0, 2, 3)].into_iter().collect();
    let second: HashSet<Triangle> = [Triangle(1, 2, 3), Triangle(0, 1, 3)].into_iter().collect();
    assert!(result == first || result == second);
}

#[test]
fn test_pentagon_is_delaunay() {
    let points = pts(&[(0.0, 0.0), (2.0, 0.0), (3.0, 1.0), (1.5, 2.0), (0.0, 1.0)]);
    let tris = triangulate(&points).unwrap();

    assert_eq!(used_indices(&tris), (0..points.len()).collect());
    assert_delaunay(&points, &tris);
}

#[test]
fn test_collinear_points_give_nothing() {
    let cases = [
        pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]),
        pts(&[(0.0, 0.0), (3.0, 0.0), (1.0, 0.0), (2.0, 0.0)]),
        pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]),
        pts(&[(5.0, -1.0), (5.0, 2.0), (5.0, 0.0)]),
        pts(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]),
    ];
    for points in &cases {
        assert!(triangulate(points).unwrap().is_empty(), "{points:?}");
    }
}

#[test]
fn test_triangles_are_canonical_and_in_range() {
    let points = random_cloud(1, 120);
    let tris = triangulate(&points).unwrap();
    assert!(!tris.is_empty());
    for t in &tris {
        assert!(t.0 < t.1 && t.1 < t.2, "{t:?} is not sorted");
        assert!(t.2 < points.len(), "{t:?} references a scaffold point");
    }
}

#[test]
fn test_random_clouds_are_delaunay_and_manifold() {
    for seed in 0..5 {
        let points = random_cloud(seed, 150);
        let mesh = Delaunay::build(&points).unwrap();

        assert_eq!(mesh.points, points);
        assert!(mesh.is_well_formed());
        assert!(mesh.is_manifold());
        assert!(mesh.is_delaunay());
        assert_delaunay(&points, &mesh.triangles);

        for t in &mesh.triangles {
            assert!(orient2d(&points[t.0], &points[t.1], &points[t.2]).abs() > 0.0);
        }
    }
}

#[test]
fn test_interior_edges_are_shared_twice() {
    // Regular hexagon around a center point: the six spokes are interior.
    let mut points = vec![Point2::new(0.0, 0.0)];
    for k in 0..6 {
        let angle = std::f64::consts::PI / 3.0 * k as f64 + 0.1;
        points.push(Point2::new(angle.cos(), angle.sin()));
    }
    let mesh = Delaunay::build(&points).unwrap();
    let counts = mesh.edge_counts();

    assert_eq!(mesh.triangles.len(), 6);
    for k in 1..=6 {
        assert_eq!(counts[&CanonicalEdge::new(0, k)], 2, "spoke 0-{k}");
    }
    assert_eq!(mesh.boundary_edges().len(), 6);
}

#[test]
fn test_deterministic_for_fixed_order() {
    let points = random_cloud(42, 200);
    assert_eq!(triangulate(&points).unwrap(), triangulate(&points).unwrap());
}

#[test]
fn test_concurrent_calls_match_sequential() {
    let inputs: Vec<Vec<Point2>> = (0..8).map(|s| random_cloud(100 + s, 80)).collect();
    let sequential: Vec<Vec<Triangle>> = inputs.iter().map(|p| triangulate(p).unwrap()).collect();

    let batched: Vec<Vec<Triangle>> = triangulate_batch(&inputs)
        .into_iter()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(batched, sequential);

    let parallel: Vec<Vec<Triangle>> = inputs
        .par_iter()
        .map(|p| triangulate(p).unwrap())
        .collect();
    assert_eq!(parallel, sequential);
}

#[test]
fn test_non_finite_coordinate_fails_whole_call() {
    let mut points = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
    points[2].x = f64::NAN;
    let err = triangulate(&points).unwrap_err();
    assert!(matches!(err, TriangulatorError::InvalidCoordinate { index: 2, .. }));

    let err = triangulate(&pts(&[(f64::INFINITY, 0.0)])).unwrap_err();
    assert!(matches!(err, TriangulatorError::InvalidCoordinate { index: 0, .. }));
}

#[test]
fn test_batch_reports_failures_per_input() {
    let good = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let bad = pts(&[(0.0, 0.0), (f64::NAN, 0.0), (0.0, 1.0)]);
    let results = triangulate_batch(&[good, bad]);
    assert_eq!(results[0].as_ref().unwrap(), &vec![Triangle(0, 1, 2)]);
    assert!(results[1].is_err());
}

#[test]
fn test_trait_entry_point() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let mesh: Triangulation = <Delaunay as Triangulate2D>::triangulate(&points).unwrap();
    assert_eq!(mesh.triangles, vec![Triangle(0, 1, 2)]);
    assert!(mesh.validate().is_ok());
}
