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

use std::fs;
use std::io::Write;
use std::path::Path;

use log::warn;
use num_traits::PrimInt;

use crate::config::{COUNT_BYTES, TRIANGLE_RECORD_BYTES};
use crate::error::{Result, TriangulatorError};
use crate::geometry::Point2;
use crate::io::pointset::{self, write_pointset};
use crate::io::{count_field, read_u32_le};
use crate::operations::triangulation::{Triangle, Triangulation};

/// Anything that can be written as a triangle record. Signed index types are
/// accepted so that negative values can be reported instead of wrapping.
pub trait TriangleIndices {
    type Index: PrimInt;

    fn triangle_indices(&self) -> [Self::Index; 3];
}

impl TriangleIndices for Triangle {
    type Index = usize;

    fn triangle_indices(&self) -> [usize; 3] {
        self.indices()
    }
}

impl<I: PrimInt> TriangleIndices for [I; 3] {
    type Index = I;

    fn triangle_indices(&self) -> [I; 3] {
        *self
    }
}

impl<I: PrimInt> TriangleIndices for (I, I, I) {
    type Index = I;

    fn triangle_indices(&self) -> [I; 3] {
        [self.0, self.1, self.2]
    }
}

fn checked_index<I: PrimInt>(triangle: usize, index: I, point_count: usize) -> Result<u32> {
    if index < I::zero() {
        return Err(TriangulatorError::NegativeIndex {
            triangle,
            index: index.to_i64().unwrap_or(i64::MIN),
        });
    }
    index
        .to_usize()
        .filter(|&v| v < point_count)
        .and_then(|_| index.to_u32())
        .ok_or(TriangulatorError::IndexOutOfRange {
            triangle,
            index: index.to_u64().unwrap_or(u64::MAX),
            point_count,
        })
}

fn validate_triangles<T: TriangleIndices>(
    triangles: &[T],
    point_count: usize,
) -> Result<Vec<[u32; 3]>> {
    triangles
        .iter()
        .enumerate()
        .map(|(ti, t)| {
            let [a, b, c] = t.triangle_indices();
            Ok([
                checked_index(ti, a, point_count)?,
                checked_index(ti, b, point_count)?,
                checked_index(ti, c, point_count)?,
            ])
        })
        .collect()
}

/// Encodes a point set followed by `u32 count | (u32, u32, u32)*`, indices
/// in the order given. An empty triangle list is written as `count = 0`.
///
/// Every coordinate and index is checked before anything is produced.
pub fn encode_mesh<T: TriangleIndices>(points: &[Point2], triangles: &[T]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_mesh(&mut out, points, triangles)?;
    Ok(out)
}

/// Streaming form of [`encode_mesh`].
pub fn write_mesh<W: Write, T: TriangleIndices>(
    out: &mut W,
    points: &[Point2],
    triangles: &[T],
) -> Result<()> {
    let records = validate_triangles(triangles, points.len())?;
    let count = count_field(records.len())?;
    // Point validation runs inside write_pointset before its first write.
    let mut buf = Vec::with_capacity(
        pointset::encoded_len(points.len()).unwrap_or(0)
            + COUNT_BYTES
            + records.len() * TRIANGLE_RECORD_BYTES,
    );
    write_pointset(&mut buf, points)?;
    buf.extend_from_slice(&count.to_le_bytes());
    for r in &records {
        for v in r {
            buf.extend_from_slice(&v.to_le_bytes());
        }
    }
    out.write_all(&buf)?;
    Ok(())
}

/// Decodes a mesh.
///
/// The point prefix follows [`pointset::decode_pointset`]. No bytes after it
/// means zero triangles; otherwise the triangle section must be complete and
/// every index must be below the point count.
pub fn decode_mesh(data: &[u8]) -> Result<Triangulation> {
    let n_points = read_u32_le(data, 0).ok_or(TriangulatorError::Truncated {
        needed: COUNT_BYTES,
        available: data.len(),
    })?;
    let points_len = pointset::encoded_len(n_points as usize)
        .filter(|&len| len <= data.len())
        .ok_or(TriangulatorError::SizeMismatch {
            count: n_points,
            expected: pointset::encoded_len(n_points as usize).unwrap_or(usize::MAX),
            actual: data.len(),
        })?;

    let points = pointset::decode_pointset(&data[..points_len])?;

    let rest = &data[points_len..];
    if rest.is_empty() {
        return Ok(Triangulation::new(points, Vec::new()));
    }

    let n_triangles = read_u32_le(data, points_len).ok_or(TriangulatorError::Truncated {
        needed: points_len + COUNT_BYTES,
        available: data.len(),
    })?;
    let first = points_len + COUNT_BYTES;
    let needed = (n_triangles as usize)
        .checked_mul(TRIANGLE_RECORD_BYTES)
        .and_then(|len| len.checked_add(first));
    let end = match needed {
        Some(end) if end <= data.len() => end,
        _ => {
            return Err(TriangulatorError::Truncated {
                needed: needed.unwrap_or(usize::MAX),
                available: data.len(),
            });
        }
    };

    let point_count = points.len();
    let mut triangles = Vec::with_capacity(n_triangles as usize);
    for (ti, offset) in (first..end).step_by(TRIANGLE_RECORD_BYTES).enumerate() {
        let mut idx = [0usize; 3];
        for (k, slot) in idx.iter_mut().enumerate() {
            let v = read_u32_le(data, offset + 4 * k).ok_or(TriangulatorError::Truncated {
                needed: offset + 4 * (k + 1),
                available: data.len(),
            })?;
            if v as usize >= point_count {
                return Err(TriangulatorError::IndexOutOfRange {
                    triangle: ti,
                    index: u64::from(v),
                    point_count,
                });
            }
            *slot = v as usize;
        }
        triangles.push(Triangle::from(idx));
    }

    if end < data.len() {
        warn!(
            "ignoring {} trailing bytes after {} triangles",
            data.len() - end,
            n_triangles
        );
    }

    Ok(Triangulation::new(points, triangles))
}

pub fn read_mesh_file<P: AsRef<Path>>(path: P) -> Result<Triangulation> {
    let data = fs::read(path)?;
    decode_mesh(&data)
}

pub fn write_mesh_file<P: AsRef<Path>>(mesh: &Triangulation, path: P) -> Result<()> {
    let data = encode_mesh(&mesh.points, &mesh.triangles)?;
    fs::write(path, data)?;
    Ok(())
}
