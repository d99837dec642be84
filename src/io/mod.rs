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

//! Little-endian binary formats, no padding:
//!
//! ```text
//! PointSet: u32 count | count x (f32 x, f32 y)
//! Mesh:     PointSet  | u32 triangle_count | triangle_count x (u32, u32, u32)
//! ```

pub mod mesh;
pub mod pointset;

pub use mesh::{TriangleIndices, decode_mesh, encode_mesh};
pub use pointset::{decode_pointset, encode_pointset};

use crate::config::COUNT_BYTES;
use crate::error::{Result, TriangulatorError};

/// `u32` at `offset`, or `None` if fewer than four bytes remain.
#[inline]
pub(crate) fn read_u32_le(data: &[u8], offset: usize) -> Option<u32> {
    let bytes = data.get(offset..offset.checked_add(COUNT_BYTES)?)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

#[inline]
pub(crate) fn read_f32_le(data: &[u8], offset: usize) -> Option<f32> {
    read_u32_le(data, offset).map(f32::from_bits)
}

/// Count field for a sequence of `len` elements.
#[inline]
pub(crate) fn count_field(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| TriangulatorError::CountOverflow { count: len })
}
