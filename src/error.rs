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

//! Error types for surface-mesh construction, conformization and point
//! location.

use thiserror::Error;

use crate::geometry::Point3;

/// Result type alias for surface-mesh operations.
pub type SmeshResult<T> = Result<T, SmeshError>;

/// A query point that no face of the target mesh contains.
///
/// `candidates` holds the faces binned in the point's voxel with the
/// distance from the point to each face center, nearest first.
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedPoint {
    pub pid: usize,
    pub point: Point3,
    pub voxel: Option<usize>,
    pub candidates: Vec<(usize, f64)>,
}

impl UnresolvedPoint {
    pub fn nearest_face(&self) -> Option<usize> {
        self.candidates.first().map(|&(fid, _)| fid)
    }
}

#[derive(Debug, Error)]
pub enum SmeshError {
    /// An edge has more than two incident faces.
    #[error("non-manifold edge ({p}, {q}) shared by faces {faces:?}")]
    NonManifoldEdge { p: usize, q: usize, faces: [usize; 3] },

    /// `np - ne + nf` differs from 1 on a patch that was asserted to be
    /// simply connected.
    #[error("Euler relation violated: np={np} ne={ne} nf={nf} (np - ne + nf must be 1)")]
    EulerMismatch { np: usize, ne: usize, nf: usize },

    /// Edge-to-face and face-to-edge tables disagree.
    #[error("edge {edge} lists face {face}, which does not reference it")]
    AdjacencyMismatch { edge: usize, face: usize },

    #[error("edge {edge} has no incident face")]
    OrphanEdge { edge: usize },

    #[error("point {point} lists edge {edge}, which does not touch it")]
    PointEdgeMismatch { point: usize, edge: usize },

    #[error("face {face} is degenerate ({len} points, or a repeated point)")]
    DegenerateFace { face: usize, len: usize },

    #[error("face {face} does not exist in the source mesh")]
    UnknownFace { face: usize },

    #[error("face {face} is listed more than once")]
    DuplicateFace { face: usize },

    #[error("point {point} does not exist")]
    UnknownPoint { point: usize },

    #[error("cannot register point {center} as center of edge ({p}, {q})")]
    InvalidEdgeCenter { p: usize, q: usize, center: usize },

    /// Following the edge-center map from `(p, q)` never terminates.
    #[error("edge-center map loops while subdividing edge ({p}, {q})")]
    EdgeCenterCycle { p: usize, q: usize },

    #[error("{what} must be computed first")]
    MissingGeometry { what: &'static str },

    #[error(
        "point {} at ({}, {}, {}) lies in no face ({} candidates)",
        .0.pid, .0.point.x, .0.point.y, .0.point.z, .0.candidates.len()
    )]
    Unresolved(Box<UnresolvedPoint>),

    #[error("ray from ({}, {}, {}) crosses none of faces {:?}", .origin.x, .origin.y, .origin.z, .faces)]
    NoFaceHit { origin: Point3, faces: Vec<usize> },

    /// Snapping point `point` would move it at least as far as the closest
    /// pair of points in the mesh.
    #[error("snapping point {point} moves it by {distance}, minimum point distance is {min_distance}")]
    TightSnap {
        point: usize,
        distance: f64,
        min_distance: f64,
    },

    #[error("invalid configuration: {details}")]
    InvalidConfig { details: String },
}

impl From<UnresolvedPoint> for SmeshError {
    fn from(u: UnresolvedPoint) -> Self {
        SmeshError::Unresolved(Box::new(u))
    }
}
