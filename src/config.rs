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

//! Tolerances and sizing knobs shared by a parent mesh and every surface
//! mesh carved out of it.
//!
//! ```
//! use smesh::SmeshConfig;
//!
//! let config = SmeshConfig::default()
//!     .with_near_vertex_tol(1e-4)
//!     .with_grid_resolution([64, 64, 8]);
//! assert!(config.validate().is_ok());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{SmeshError, SmeshResult};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SmeshConfig {
    /// `|1 - u|` below this snaps a located point onto a face vertex.
    pub near_vertex_tol: f64,

    /// `|w|` below this snaps a located point onto a face edge.
    pub near_edge_tol: f64,

    /// Slack on negative barycentric weights in the point-in-triangle test.
    pub inside_tol: f64,

    /// Voxel counts `[NX, NY, NZ]` of the face hash.
    pub grid_resolution: [usize; 3],

    /// Relative padding applied to every axis of the mesh bounding box.
    pub bbox_padding: f64,

    /// Require `np - ne + nf == 1` when building edges.
    pub check_euler: bool,

    /// Locate points on the rayon pool (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for SmeshConfig {
    fn default() -> Self {
        Self {
            near_vertex_tol: 1e-3,
            near_edge_tol: 1e-3,
            inside_tol: 1e-10,
            grid_resolution: [100, 100, 100],
            bbox_padding: 0.01,
            check_euler: true,
            parallel: true,
        }
    }
}

impl SmeshConfig {
    /// Tight snapping for meshes whose shared points coincide to round-off.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            near_vertex_tol: 1e-9,
            near_edge_tol: 1e-9,
            inside_tol: 1e-14,
            ..Self::default()
        }
    }

    /// Loose snapping for meshes of discretized curved surfaces, where
    /// matching points can sit noticeably off each other's faces.
    #[must_use]
    pub fn relaxed() -> Self {
        Self {
            near_vertex_tol: 1e-2,
            near_edge_tol: 1e-2,
            inside_tol: 1e-6,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_near_vertex_tol(mut self, tol: f64) -> Self {
        self.near_vertex_tol = tol;
        self
    }

    #[must_use]
    pub fn with_near_edge_tol(mut self, tol: f64) -> Self {
        self.near_edge_tol = tol;
        self
    }

    #[must_use]
    pub fn with_inside_tol(mut self, tol: f64) -> Self {
        self.inside_tol = tol;
        self
    }

    #[must_use]
    pub fn with_grid_resolution(mut self, res: [usize; 3]) -> Self {
        self.grid_resolution = res;
        self
    }

    #[must_use]
    pub fn with_check_euler(mut self, check: bool) -> Self {
        self.check_euler = check;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> SmeshResult<()> {
        let tols = [
            ("near_vertex_tol", self.near_vertex_tol),
            ("near_edge_tol", self.near_edge_tol),
            ("inside_tol", self.inside_tol),
            ("bbox_padding", self.bbox_padding),
        ];
        for (name, v) in tols {
            if !v.is_finite() || v < 0.0 {
                return Err(SmeshError::InvalidConfig {
                    details: format!("{name} must be finite and non-negative, got {v}"),
                });
            }
        }
        if self.grid_resolution.contains(&0) {
            return Err(SmeshError::InvalidConfig {
                details: format!("grid resolution {:?} has an empty axis", self.grid_resolution),
            });
        }
        Ok(())
    }
}
