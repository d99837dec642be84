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

use num_traits::ToPrimitive;

use crate::error::{Result, TriangulatorError};

/// A 2D point. Coordinates are stored in double precision; the wire format
/// narrows them to `f32`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point from any primitive numeric pair, rejecting values that
    /// are not finite once converted. `index` is the position reported in
    /// the error.
    pub fn try_from_coords<X, Y>(index: usize, x: X, y: Y) -> Result<Self>
    where
        X: ToPrimitive,
        Y: ToPrimitive,
    {
        let xf = x.to_f64().unwrap_or(f64::NAN);
        let yf = y.to_f64().unwrap_or(f64::NAN);
        let p = Self::new(xf, yf);
        p.check_finite(index)?;
        Ok(p)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// `Err(InvalidCoordinate)` unless both coordinates are finite.
    #[inline]
    pub fn check_finite(&self, index: usize) -> Result<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(TriangulatorError::invalid_coordinate(index, self.x, self.y))
        }
    }

    #[inline]
    pub fn distance_squared(&self, other: &Point2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Squared distance to the origin.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Narrowed wire representation.
    #[inline]
    pub fn to_f32_pair(&self) -> (f32, f32) {
        (self.x as f32, self.y as f32)
    }

    #[inline]
    pub fn from_f32_pair(x: f32, y: f32) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for (f64, f64) {
    fn from(p: Point2) -> Self {
        (p.x, p.y)
    }
}

/// Checks every point of a slice, reporting the first offender.
pub fn check_all_finite(points: &[Point2]) -> Result<()> {
    points
        .iter()
        .enumerate()
        .try_for_each(|(i, p)| p.check_finite(i))
}
