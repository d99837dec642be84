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

use crate::error::{Result, TriangulatorError};
use crate::geometry::{CanonicalEdge, Point2};
use crate::kernel::circumcircle_contains;

pub mod delaunay;

pub trait Triangulate2D {
    fn triangulate(points: &[Point2]) -> Result<Triangulation>;
}

/// Three point indices. Triangles produced by the builder are canonical
/// (sorted ascending); decoded triangles keep their wire order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triangle(pub usize, pub usize, pub usize);

impl Triangle {
    /// Canonical form of `{a, b, c}`.
    #[inline]
    pub fn sorted(a: usize, b: usize, c: usize) -> Self {
        let mut v = [a, b, c];
        v.sort_unstable();
        Triangle(v[0], v[1], v[2])
    }

    #[inline]
    pub fn as_sorted(&self) -> Self {
        Self::sorted(self.0, self.1, self.2)
    }

    #[inline]
    pub fn indices(&self) -> [usize; 3] {
        [self.0, self.1, self.2]
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.0 == v || self.1 == v || self.2 == v
    }

    #[inline]
    pub fn edges(&self) -> [CanonicalEdge; 3] {
        [
            CanonicalEdge::new(self.0, self.1),
            CanonicalEdge::new(self.1, self.2),
            CanonicalEdge::new(self.2, self.0),
        ]
    }

    #[inline]
    pub fn has_repeated_index(&self) -> bool {
        self.0 == self.1 || self.1 == self.2 || self.0 == self.2
    }
}

impl From<[usize; 3]> for Triangle {
    fn from([a, b, c]: [usize; 3]) -> Self {
        Triangle(a, b, c)
    }
}

impl From<(usize, usize, usize)> for Triangle {
    fn from((a, b, c): (usize, usize, usize)) -> Self {
        Triangle(a, b, c)
    }
}

/// A point set together with triangles indexing into it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Triangulation {
    pub points: Vec<Point2>,
    pub triangles: Vec<Triangle>,
}

impl Triangulation {
    pub fn new(points: Vec<Point2>, triangles: Vec<Triangle>) -> Self {
        Self { points, triangles }
    }

    /// Number of triangles incident to each undirected edge.
    pub fn edge_counts(&self) -> HashMap<CanonicalEdge, usize> {
        let mut counts = HashMap::with_capacity(self.triangles.len() * 3 / 2 + 1);
        for t in &self.triangles {
            for e in t.edges() {
                *counts.entry(e).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Every edge borders at most two triangles.
    pub fn is_manifold(&self) -> bool {
        self.edge_counts().values().all(|&c| c <= 2)
    }

    /// Edges bordering exactly one triangle.
    pub fn boundary_edges(&self) -> Vec<CanonicalEdge> {
        let mut edges: Vec<_> = self
            .edge_counts()
            .into_iter()
            .filter_map(|(e, c)| (c == 1).then_some(e))
            .collect();
        edges.sort_unstable();
        edges
    }

    /// No point lies strictly inside the circumcircle of a triangle that
    /// does not use it, under the same tolerance as the builder. Ill-formed
    /// meshes are never Delaunay.
    pub fn is_delaunay(&self) -> bool {
        if !self.is_well_formed() {
            return false;
        }
        self.triangles.iter().all(|t| {
            let (a, b, c) = (&self.points[t.0], &self.points[t.1], &self.points[t.2]);
            self.points
                .iter()
                .enumerate()
                .all(|(i, p)| t.contains(i) || !circumcircle_contains(p, a, b, c))
        })
    }

    /// Every triangle index is below the point count.
    pub fn validate(&self) -> Result<()> {
        let n = self.points.len();
        for (ti, t) in self.triangles.iter().enumerate() {
            for v in t.indices() {
                if v >= n {
                    return Err(TriangulatorError::IndexOutOfRange {
                        triangle: ti,
                        index: v as u64,
                        point_count: n,
                    });
                }
            }
        }
        Ok(())
    }

    /// Triangles with three distinct in-range indices.
    pub fn is_well_formed(&self) -> bool {
        self.validate().is_ok() && self.triangles.iter().all(|t| !t.has_repeated_index())
    }
}
