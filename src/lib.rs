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

//! Conformal surface meshes for intersecting two independently meshed
//! boundary surfaces.
//!
//! A [`Smesh`] is carved out of a parent [`IMesh`] (or another `Smesh`)
//! with local point and face numbering, and owns its point/edge/face
//! adjacency. Edge-center chains registered during cross-mesh registration
//! are spliced into the faces by [`Smesh::conformize`]. A uniform face hash
//! ([`FaceGrid`]) backs [`Smesh::locate`], which places foreign points on
//! faces, vertices or edges.
//!
//! ```
//! use smesh::{IMesh, Point3, Smesh, Snap};
//!
//! let pts = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let parent = IMesh::new(&pts, vec![vec![0, 1, 2, 3]]);
//! let mut mesh = Smesh::from_faces(&parent, &[0], true)?;
//! mesh.build_locator()?;
//!
//! let loc = mesh.locate_points(&[Point3::new(1.0, 1.0, 0.0)])?;
//! let loc = loc[0].as_ref().unwrap();
//! assert_eq!(loc.fid, 0);
//! assert!(matches!(loc.snap, Snap::Vertex(2)));
//! # Ok::<(), smesh::SmeshError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod numeric;

pub use config::SmeshConfig;
pub use error::{SmeshError, SmeshResult, UnresolvedPoint};
pub use geometry::{Aabb, Point3, Vector3};
pub use mesh::{
    SurfaceSource,
    basic_types::{LocateStats, PointLoc, Snap},
    canonical_edge::{Edge, UEdge},
    imesh::IMesh,
    locate::Located,
    smesh::Smesh,
    spatial_hash::FaceGrid,
};
