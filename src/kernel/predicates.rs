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

use crate::config::EPS;
use crate::error::Result;
use crate::geometry::Point2;

/// Twice the signed area of `(a, b, c)`: positive when counter-clockwise,
/// negative when clockwise, zero when collinear.
#[inline]
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Circumcenter and squared circumradius of `(a, b, c)`, or `None` when the
/// triangle is degenerate (`|d| < EPS`).
pub fn circumcircle(a: &Point2, b: &Point2, c: &Point2) -> Option<(Point2, f64)> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < EPS {
        return None;
    }

    let a2 = a.norm_squared();
    let b2 = b.norm_squared();
    let c2 = c.norm_squared();

    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;

    let center = Point2::new(ux, uy);
    let r2 = center.distance_squared(a);
    Some((center, r2))
}

/// True when `p` lies strictly inside the circumcircle of `(a, b, c)`, with
/// the radius shrunk by `EPS`. Points on the circle (within tolerance) are
/// outside, and degenerate triangles never contain anything.
///
/// Inputs are assumed finite; see [`try_circumcircle_contains`].
#[inline]
pub fn circumcircle_contains(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    match circumcircle(a, b, c) {
        Some((center, r2)) => p.distance_squared(&center) < r2 - EPS,
        None => false,
    }
}

/// Checked variant of [`circumcircle_contains`]. A non-finite coordinate is
/// reported as `InvalidCoordinate` with `index` being the argument position
/// (`0` for `p`, `1..=3` for `a`, `b`, `c`).
pub fn try_circumcircle_contains(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> Result<bool> {
    for (i, q) in [p, a, b, c].into_iter().enumerate() {
        q.check_finite(i)?;
    }
    Ok(circumcircle_contains(p, a, b, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_right_triangle_circumcircle() {
        let (center, r2) = circumcircle(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
            &Point2::new(0.0, 2.0),
        )
        .unwrap();
        assert!((center.x - 1.0).abs() < 1e-12);
        assert!((center.y - 1.0).abs() < 1e-12);
        assert!((r2 - 2.0).abs() < 1e-12);
    }

    #[test]
    fn orientation_sign() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        assert!(orient2d(&a, &b, &c) > 0.0);
        assert!(orient2d(&a, &c, &b) < 0.0);
        assert_eq!(orient2d(&a, &b, &Point2::new(2.0, 0.0)), 0.0);
    }
}
