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

use triangulator::TriangulatorError;
use triangulator::geometry::{Aabb2, CanonicalEdge, Point2};

#[test]
fn test_try_from_coords_accepts_integers_and_floats() {
    let p = Point2::try_from_coords(0, 3i32, 4u64).unwrap();
    assert_eq!(p, Point2::new(3.0, 4.0));

    let q = Point2::try_from_coords(1, 0.5f32, -2.25f64).unwrap();
    assert_eq!(q, Point2::new(0.5, -2.25));
}

#[test]
fn test_try_from_coords_rejects_non_finite() {
    let err = Point2::try_from_coords(7, f32::NAN, 1.0).unwrap_err();
    assert!(matches!(err, TriangulatorError::InvalidCoordinate { index: 7, .. }));

    let err = Point2::try_from_coords(2, 0, f64::NEG_INFINITY).unwrap_err();
    assert!(matches!(err, TriangulatorError::InvalidCoordinate { index: 2, .. }));
}

#[test]
fn test_aabb_from_points() {
    let pts = [
        Point2::new(1.0, -1.0),
        Point2::new(-2.0, 3.0),
        Point2::new(0.5, 0.5),
    ];
    let bb = Aabb2::from_points(&pts).unwrap();
    assert_eq!(bb.min, Point2::new(-2.0, -1.0));
    assert_eq!(bb.max, Point2::new(1.0, 3.0));
    assert_eq!(bb.width(), 3.0);
    assert_eq!(bb.height(), 4.0);
    assert_eq!(bb.extent_or_unit(), 4.0);
    assert_eq!(bb.center(), Point2::new(-0.5, 1.0));
    assert!(pts.iter().all(|p| bb.contains(p)));
}

#[test]
fn test_aabb_degenerate_extent() {
    assert!(Aabb2::from_points(&[]).is_none());

    let bb = Aabb2::from_points(&[Point2::new(4.0, 4.0), Point2::new(4.0, 4.0)]).unwrap();
    assert_eq!(bb.extent_or_unit(), 1.0);
}

#[test]
fn test_canonical_edge_is_undirected() {
    assert_eq!(CanonicalEdge::new(5, 2), CanonicalEdge::new(2, 5));
    assert_eq!(CanonicalEdge::new(5, 2), CanonicalEdge(2, 5));

    let set: HashSet<_> = [CanonicalEdge::new(1, 0), CanonicalEdge::new(0, 1)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 1);
    assert!(CanonicalEdge::from((9, 3)).contains(9));
}
