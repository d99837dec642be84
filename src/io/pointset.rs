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

use crate::config::{COUNT_BYTES, POINT_RECORD_BYTES};
use crate::error::{Result, TriangulatorError};
use crate::geometry::Point2;
use crate::io::{count_field, read_f32_le, read_u32_le};

/// Exact byte length of a point set holding `count` points, or `None` if it
/// overflows `usize`.
#[inline]
pub fn encoded_len(count: usize) -> Option<usize> {
    count
        .checked_mul(POINT_RECORD_BYTES)?
        .checked_add(COUNT_BYTES)
}

/// Checks every point survives narrowing to `f32` as a finite value and
/// returns the count field.
fn validate(points: &[Point2]) -> Result<u32> {
    for (i, p) in points.iter().enumerate() {
        p.check_finite(i)?;
        let (x, y) = p.to_f32_pair();
        if !x.is_finite() || !y.is_finite() {
            return Err(TriangulatorError::invalid_coordinate(i, p.x, p.y));
        }
    }
    count_field(points.len())
}

fn write_validated<W: Write>(out: &mut W, count: u32, points: &[Point2]) -> std::io::Result<()> {
    out.write_all(&count.to_le_bytes())?;
    for p in points {
        let (x, y) = p.to_f32_pair();
        out.write_all(&x.to_le_bytes())?;
        out.write_all(&y.to_le_bytes())?;
    }
    Ok(())
}

/// Encodes `points` as `u32 count | (f32 x, f32 y)*`.
///
/// Coordinates are narrowed to single precision. Nothing is produced if any
/// coordinate is non-finite before or after narrowing.
pub fn encode_pointset(points: &[Point2]) -> Result<Vec<u8>> {
    let count = validate(points)?;
    let mut out = Vec::with_capacity(encoded_len(points.len()).unwrap_or(0));
    write_validated(&mut out, count, points)?;
    Ok(out)
}

/// Streaming form of [`encode_pointset`]. Validation completes before the
/// first byte reaches `out`.
pub fn write_pointset<W: Write>(out: &mut W, points: &[Point2]) -> Result<()> {
    let count = validate(points)?;
    write_validated(out, count, points)?;
    Ok(())
}

/// Decodes a point set. The buffer must be exactly `4 + 8 * count` bytes;
/// shorter and longer buffers are both rejected.
pub fn decode_pointset(data: &[u8]) -> Result<Vec<Point2>> {
    let count = read_u32_le(data, 0).ok_or(TriangulatorError::Truncated {
        needed: COUNT_BYTES,
        available: data.len(),
    })?;

    let expected = encoded_len(count as usize);
    if expected != Some(data.len()) {
        return Err(TriangulatorError::SizeMismatch {
            count,
            expected: expected.unwrap_or(usize::MAX),
            actual: data.len(),
        });
    }

    let mut points = Vec::with_capacity(count as usize);
    for offset in (COUNT_BYTES..data.len()).step_by(POINT_RECORD_BYTES) {
        // Length was checked above, so both reads are in bounds.
        let x = read_f32_le(data, offset).unwrap_or(f32::NAN);
        let y = read_f32_le(data, offset + 4).unwrap_or(f32::NAN);
        points.push(Point2::from_f32_pair(x, y));
    }
    Ok(points)
}

pub fn read_pointset_file<P: AsRef<Path>>(path: P) -> Result<Vec<Point2>> {
    let data = fs::read(path)?;
    decode_pointset(&data)
}

pub fn write_pointset_file<P: AsRef<Path>>(points: &[Point2], path: P) -> Result<()> {
    let data = encode_pointset(points)?;
    fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_len_matches_layout() {
        assert_eq!(encoded_len(0), Some(4));
        assert_eq!(encoded_len(3), Some(28));
        assert_eq!(encoded_len(usize::MAX), None);
    }

    #[test]
    fn narrowing_overflow_is_rejected() {
        let err = encode_pointset(&[Point2::new(0.0, 0.0), Point2::new(1e300, 0.0)]).unwrap_err();
        assert!(matches!(
            err,
            TriangulatorError::InvalidCoordinate { index: 1, .. }
        ));
    }
}
