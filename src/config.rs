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

//! Numeric and wire constants, plus the input limits applied at the service
//! boundary.

use std::env;

/// Tolerance of the in-circle predicate. Both the degenerate-determinant
/// cutoff and the radius shrink use it.
pub const EPS: f64 = 1e-12;

/// Distance of the scaffold vertices from the bounding box center, in units
/// of the larger box extent.
pub const SCAFFOLD_SCALE: f64 = 10.0;

/// Size of a `u32` count field.
pub const COUNT_BYTES: usize = 4;
/// `f32 x | f32 y`
pub const POINT_RECORD_BYTES: usize = 8;
/// `u32 a | u32 b | u32 c`
pub const TRIANGLE_RECORD_BYTES: usize = 12;

/// Default for [`Limits::max_points`].
pub const DEFAULT_MAX_POINTS: usize = 1_000_000;

/// Environment variable read by [`Limits::from_env`].
pub const MAX_POINTS_ENV: &str = "TRIANGULATOR_MAX_POINTS";

/// Caller-side bounds on work accepted per request. The core itself never
/// enforces these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_points: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

impl Limits {
    pub fn new(max_points: usize) -> Self {
        Self { max_points }
    }

    /// Reads `TRIANGULATOR_MAX_POINTS`, falling back to the default when the
    /// variable is unset.
    pub fn from_env() -> Result<Self, String> {
        match env::var(MAX_POINTS_ENV) {
            Ok(raw) => Self::parse_max_points(&raw),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(format!("{MAX_POINTS_ENV}: {e}")),
        }
    }

    fn parse_max_points(raw: &str) -> Result<Self, String> {
        raw.trim()
            .parse::<usize>()
            .map(Self::new)
            .map_err(|e| format!("{MAX_POINTS_ENV}={raw:?}: {e}"))
    }

    pub fn allows(&self, point_count: usize) -> bool {
        point_count <= self.max_points
    }
}
