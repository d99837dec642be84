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

use std::collections::HashMap;

use log::{debug, trace};
use rayon::prelude::*;

use crate::config::SCAFFOLD_SCALE;
use crate::error::Result;
use crate::geometry::point_2::check_all_finite;
use crate::geometry::{Aabb2, CanonicalEdge, Point2};
use crate::kernel::circumcircle_contains;
use crate::operations::triangulation::{Triangle, Triangulate2D, Triangulation};

/// Bowyer-Watson Delaunay builder.
pub struct Delaunay;

impl Triangulate2D for Delaunay {
    fn triangulate(points: &[Point2]) -> Result<Triangulation> {
        Self::build(points)
    }
}

impl Delaunay {
    /// Build the Delaunay triangulation of `pts`. The returned mesh owns a
    /// copy of the input points in their original order.
    pub fn build(pts: &[Point2]) -> Result<Triangulation> {
        let triangles = triangulate(pts)?;
        Ok(Triangulation::new(pts.to_vec(), triangles))
    }

    /// Insert point `pid` into `triangles`: drop every triangle whose
    /// circumcircle contains it and fan the cavity boundary to `pid`.
    fn bowyer_watson_insert_point(pid: usize, points: &[Point2], triangles: &mut Vec<Triangle>) {
        let p = &points[pid];

        let (bad, good): (Vec<Triangle>, Vec<Triangle>) = triangles
            .drain(..)
            .partition(|t| circumcircle_contains(p, &points[t.0], &points[t.1], &points[t.2]));
        *triangles = good;

        if bad.is_empty() {
            trace!("point {pid}: no enclosing circumcircle, skipped");
            return;
        }

        let mut edge_count: HashMap<CanonicalEdge, u32> = HashMap::with_capacity(bad.len() * 3);
        for t in &bad {
            for e in t.edges() {
                *edge_count.entry(e).or_insert(0) += 1;
            }
        }

        // Edges shared by two bad triangles are interior to the cavity.
        // Walking `bad` keeps the emission order independent of hashing.
        let before = triangles.len();
        for t in &bad {
            for e in t.edges() {
                if edge_count.get(&e) == Some(&1) {
                    triangles.push(Triangle::sorted(e.0, e.1, pid));
                }
            }
        }

        trace!(
            "point {pid}: cavity of {} triangles, {} boundary edges",
            bad.len(),
            triangles.len() - before
        );
    }
}

/// Scaffold vertices enclosing the bounding box of `points`, placed
/// `SCAFFOLD_SCALE * delta` away from its center.
fn scaffold(bbox: &Aabb2) -> [Point2; 3] {
    let r = SCAFFOLD_SCALE * bbox.extent_or_unit();
    let mid = bbox.center();
    [
        Point2::new(mid.x - 2.0 * r, mid.y - r),
        Point2::new(mid.x, mid.y + 2.0 * r),
        Point2::new(mid.x + 2.0 * r, mid.y - r),
    ]
}

/// Delaunay triangles of `points`, indices referring to input order.
///
/// Fewer than three points, or all points collinear, give an empty result.
/// A non-finite coordinate fails the whole call before any work is done.
pub fn triangulate(points: &[Point2]) -> Result<Vec<Triangle>> {
    check_all_finite(points)?;

    let n = points.len();
    if n < 3 {
        return Ok(Vec::new());
    }

    let Some(bbox) = Aabb2::from_points(points) else {
        return Ok(Vec::new());
    };

    // Scaffold lives at [n, n + 3) of the same arena.
    let mut arena = Vec::with_capacity(n + 3);
    arena.extend_from_slice(points);
    arena.extend_from_slice(&scaffold(&bbox));

    debug!(
        "triangulating {n} points, extent {}",
        bbox.extent_or_unit()
    );

    let mut triangles = vec![Triangle(n, n + 1, n + 2)];
    for pid in 0..n {
        Delaunay::bowyer_watson_insert_point(pid, &arena, &mut triangles);
    }

    triangles.retain(|t| t.0 < n && t.1 < n && t.2 < n);

    debug!("triangulated {n} points into {} triangles", triangles.len());
    Ok(triangles)
}

/// Triangulates independent point sets in parallel. Each result matches what
/// [`triangulate`] returns for that input alone.
pub fn triangulate_batch<P>(inputs: &[P]) -> Vec<Result<Vec<Triangle>>>
where
    P: AsRef<[Point2]> + Sync,
{
    inputs.par_iter().map(|pts| triangulate(pts.as_ref())).collect()
}
