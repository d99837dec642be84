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

//! 2D Delaunay triangulation of point clouds, plus the little-endian binary
//! formats used to ship point sets in and meshes out.
//!
//! ```
//! use triangulator::geometry::Point2;
//! use triangulator::io::{decode_mesh, decode_pointset, encode_mesh, encode_pointset};
//! use triangulator::operations::triangulation::delaunay::triangulate;
//!
//! let wire = encode_pointset(&[
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ])
//! .unwrap();
//!
//! let points = decode_pointset(&wire).unwrap();
//! let triangles = triangulate(&points).unwrap();
//! assert_eq!(triangles.len(), 2);
//!
//! let mesh = decode_mesh(&encode_mesh(&points, &triangles).unwrap()).unwrap();
//! assert_eq!(mesh.triangles, triangles);
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod operations;
pub mod service;

pub use error::{Result, TriangulatorError};
pub use geometry::Point2;
pub use operations::triangulation::{Triangle, Triangulation};
