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

use triangulator::TriangulatorError;
use triangulator::config::EPS;
use triangulator::geometry::Point2;
use triangulator::kernel::{circumcircle, circumcircle_contains, orient2d, try_circumcircle_contains};

fn unit_triangle() -> (Point2, Point2, Point2) {
    (
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    )
}

#[test]
fn test_center_is_inside() {
    let (a, b, c) = unit_triangle();
    assert!(circumcircle_contains(&Point2::new(0.5, 0.5), &a, &b, &c));
    assert!(circumcircle_contains(&Point2::new(0.9, 0.9), &a, &b, &c));
}

#[test]
fn test_far_point_is_outside() {
    let (a, b, c) = unit_triangle();
    assert!(!circumcircle_contains(&Point2::new(2.0, 2.0), &a, &b, &c));
    assert!(!circumcircle_contains(&Point2::new(-1.0, 0.5), &a, &b, &c));
}

#[test]
fn test_point_on_circle_is_outside() {
    let (a, b, c) = unit_triangle();
    // (1, 1) is the fourth corner of the unit square, exactly on the circle.
    assert!(!circumcircle_contains(&Point2::new(1.0, 1.0), &a, &b, &c));
    // Vertices are on their own circle.
    assert!(!circumcircle_contains(&a, &a, &b, &c));
}

#[test]
fn test_orientation_does_not_matter() {
    let (a, b, c) = unit_triangle();
    let p = Point2::new(0.4, 0.3);
    assert!(circumcircle_contains(&p, &a, &b, &c));
    assert!(circumcircle_contains(&p, &a, &c, &b));
    assert!(circumcircle_contains(&p, &c, &b, &a));
}

#[test]
fn test_collinear_triangle_contains_nothing() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(1.0, 0.0);
    let c = Point2::new(2.0, 0.0);
    assert!(!circumcircle_contains(&Point2::new(1.0, 0.0), &a, &b, &c));
    assert!(!circumcircle_contains(&Point2::new(1.0, 0.1), &a, &b, &c));
    assert!(circumcircle(&a, &b, &c).is_none());
}

#[test]
fn test_nearly_degenerate_triangle_contains_nothing() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(1.0, 0.0);
    let c = Point2::new(0.5, 1e-13);
    assert!(!circumcircle_contains(&Point2::new(0.5, 0.0), &a, &b, &c));
}

#[test]
fn test_radius_is_shrunk_by_eps() {
    let (a, b, c) = unit_triangle();
    let (center, r2) = circumcircle(&a, &b, &c).unwrap();
    assert_eq!(center, Point2::new(0.5, 0.5));
    assert_eq!(r2, 0.5);

    // Just inside the true circle but within tolerance: still outside.
    let nudge = Point2::new(1.0 - EPS / 10.0, 1.0);
    assert!(nudge.distance_squared(&center) < r2);
    assert!(!circumcircle_contains(&nudge, &a, &b, &c));
}

#[test]
fn test_try_rejects_non_finite_input() {
    let (a, b, c) = unit_triangle();
    let nan = Point2::new(f64::NAN, 0.0);
    let inf = Point2::new(0.0, f64::INFINITY);

    assert!(matches!(
        try_circumcircle_contains(&nan, &a, &b, &c),
        Err(TriangulatorError::InvalidCoordinate { index: 0, .. })
    ));
    assert!(matches!(
        try_circumcircle_contains(&a, &a, &b, &inf),
        Err(TriangulatorError::InvalidCoordinate { index: 3, .. })
    ));
    assert!(try_circumcircle_contains(&Point2::new(0.2, 0.2), &a, &b, &c).unwrap());
}

#[test]
fn test_orient2d() {
    let (a, b, c) = unit_triangle();
    assert_eq!(orient2d(&a, &b, &c), 1.0);
    assert_eq!(orient2d(&a, &c, &b), -1.0);
}
