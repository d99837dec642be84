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

//! Error type shared by the predicate, the builder and both codecs.

use thiserror::Error;

/// Result type alias using [`TriangulatorError`].
pub type Result<T> = std::result::Result<T, TriangulatorError>;

/// Failures reported by the core. Every operation either returns a complete
/// result or exactly one of these; nothing is partially written.
#[derive(Error, Debug)]
pub enum TriangulatorError {
    /// A coordinate is NaN, infinite, or not representable as `f64`.
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    InvalidCoordinate { index: usize, x: f64, y: f64 },

    /// The buffer ends before a declared record is complete.
    #[error("buffer truncated: needed {needed} bytes, found {available}")]
    Truncated { needed: usize, available: usize },

    /// The declared point count disagrees with the buffer length.
    #[error("{count} points require exactly {expected} bytes, buffer holds {actual}")]
    SizeMismatch {
        count: u32,
        expected: usize,
        actual: usize,
    },

    /// A triangle index is not below the point count.
    #[error("triangle {triangle} references index {index}, but there are only {point_count} points")]
    IndexOutOfRange {
        triangle: usize,
        index: u64,
        point_count: usize,
    },

    /// A triangle index is below zero.
    #[error("triangle {triangle} has negative index {index}")]
    NegativeIndex { triangle: usize, index: i64 },

    /// A sequence is too long for its `u32` count field.
    #[error("{count} elements do not fit a 32-bit count field")]
    CountOverflow { count: usize },

    /// File I/O error (file helpers only).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TriangulatorError {
    pub(crate) fn invalid_coordinate(index: usize, x: f64, y: f64) -> Self {
        TriangulatorError::InvalidCoordinate { index, x, y }
    }
}
