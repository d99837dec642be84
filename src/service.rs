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

//! Transport-free request handling: fetch a point set by id, triangulate it
//! and return the encoded mesh, mapping each failure to a status code.

use std::fmt;

use log::{info, warn};
use thiserror::Error;

use crate::config::Limits;
use crate::geometry::Point2;
use crate::io::{decode_pointset, encode_mesh, encode_pointset};
use crate::operations::triangulation::delaunay::triangulate;

pub const OCTET_STREAM: &str = "application/octet-stream";

/// Identifier of an upstream point set, in canonical UUID text form
/// (`8-4-4-4-12` hexadecimal groups).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointSetId(String);

impl PointSetId {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    pub fn parse(raw: &str) -> Result<Self, ServiceError> {
        let groups: Vec<&str> = raw.split('-').collect();
        let well_formed = groups.len() == Self::GROUPS.len()
            && groups
                .iter()
                .zip(Self::GROUPS)
                .all(|(g, len)| g.len() == len && g.bytes().all(|b| b.is_ascii_hexdigit()));
        if well_formed {
            Ok(Self(raw.to_ascii_lowercase()))
        } else {
            Err(ServiceError::InvalidPointSetId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PointSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upstream fetch failure.
#[derive(Error, Debug)]
#[error("point set source failed: {0}")]
pub struct SourceError(pub String);

/// Where encoded point sets come from.
pub trait PointSetSource {
    fn fetch(&self, id: &PointSetId) -> Result<Vec<u8>, SourceError>;
}

impl<F> PointSetSource for F
where
    F: Fn(&PointSetId) -> Result<Vec<u8>, SourceError>,
{
    fn fetch(&self, id: &PointSetId) -> Result<Vec<u8>, SourceError> {
        self(id)
    }
}

/// Returns the same encoded point set for every id.
#[derive(Debug, Clone)]
pub struct StaticPointSetSource {
    data: Vec<u8>,
}

impl StaticPointSetSource {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl Default for StaticPointSetSource {
    /// The unit right triangle `(0,0), (1,0), (0,1)`.
    fn default() -> Self {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        Self::new(encode_pointset(&points).unwrap_or_default())
    }
}

impl PointSetSource for StaticPointSetSource {
    fn fetch(&self, _id: &PointSetId) -> Result<Vec<u8>, SourceError> {
        Ok(self.data.clone())
    }
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("the point set id {0:?} is not a valid UUID")]
    InvalidPointSetId(String),

    #[error("the point set source is unavailable: {0}")]
    Unavailable(#[source] SourceError),

    #[error("could not decode the binary point set: {0}")]
    InvalidPointSetBinary(#[source] crate::TriangulatorError),

    #[error("point set has {count} points, limit is {limit}")]
    PointSetTooLarge { count: usize, limit: usize },

    #[error("triangulation failed: {0}")]
    TriangulationFailed(#[source] crate::TriangulatorError),

    #[error("could not encode the triangulation: {0}")]
    EncodingFailed(#[source] crate::TriangulatorError),
}

impl ServiceError {
    /// HTTP-style status code.
    pub fn status(&self) -> u16 {
        match self {
            ServiceError::InvalidPointSetId(_) => 400,
            ServiceError::PointSetTooLarge { .. } => 413,
            ServiceError::Unavailable(_) => 503,
            ServiceError::InvalidPointSetBinary(_)
            | ServiceError::TriangulationFailed(_)
            | ServiceError::EncodingFailed(_) => 500,
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::InvalidPointSetId(_) => "INVALID_POINTSET_ID",
            ServiceError::Unavailable(_) => "POINTSET_MANAGER_UNAVAILABLE",
            ServiceError::InvalidPointSetBinary(_) => "INVALID_POINTSET_BINARY",
            ServiceError::PointSetTooLarge { .. } => "POINTSET_TOO_LARGE",
            ServiceError::TriangulationFailed(_) => "TRIANGULATION_FAILED",
            ServiceError::EncodingFailed(_) => "ENCODING_FAILED",
        }
    }

    /// Short human-readable message, without internal detail.
    pub fn message(&self) -> &'static str {
        match self {
            ServiceError::InvalidPointSetId(_) => "The PointSetID format is invalid.",
            ServiceError::Unavailable(_) => "The PointSetManager could not be reached.",
            ServiceError::InvalidPointSetBinary(_) => "Could not decode binary PointSet data.",
            ServiceError::PointSetTooLarge { .. } => "The PointSet exceeds the point limit.",
            ServiceError::TriangulationFailed(_) => "Triangulation computation failed.",
            ServiceError::EncodingFailed(_) => "Could not encode the triangulation output.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

pub struct TriangulationService<S> {
    source: S,
    limits: Limits,
}

impl<S: PointSetSource> TriangulationService<S> {
    pub fn new(source: S) -> Self {
        Self::with_limits(source, Limits::default())
    }

    pub fn with_limits(source: S, limits: Limits) -> Self {
        Self { source, limits }
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Full pipeline for one request. Holds no state between calls.
    pub fn handle(&self, raw_id: &str) -> Result<Response, ServiceError> {
        let id = PointSetId::parse(raw_id)?;

        let data = self.source.fetch(&id).map_err(|e| {
            warn!("fetch of {id} failed: {e}");
            ServiceError::Unavailable(e)
        })?;

        let points = decode_pointset(&data).map_err(ServiceError::InvalidPointSetBinary)?;
        if !self.limits.allows(points.len()) {
            return Err(ServiceError::PointSetTooLarge {
                count: points.len(),
                limit: self.limits.max_points,
            });
        }

        let triangles = triangulate(&points).map_err(ServiceError::TriangulationFailed)?;
        let body = encode_mesh(&points, &triangles).map_err(ServiceError::EncodingFailed)?;

        info!(
            "point set {id}: {} points, {} triangles",
            points.len(),
            triangles.len()
        );
        Ok(Response {
            content_type: OCTET_STREAM,
            body,
        })
    }
}
