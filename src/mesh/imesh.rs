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

use std::collections::BTreeSet;

use crate::{config::SmeshConfig, geometry::Point3, mesh::SurfaceSource};

/// Parent mesh that surface meshes are carved from.
///
/// Only what carving needs is kept: coordinates, face polygons, the skin
/// (boundary) faces and a designated patch. Skin defaults to every face.
#[derive(Debug, Clone, Default)]
pub struct IMesh {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub f: Vec<Vec<usize>>,
    pub skin: Vec<usize>,
    pub patch: BTreeSet<usize>,
    pub config: SmeshConfig,
}

impl IMesh {
    pub fn new(points: &[Point3], faces: Vec<Vec<usize>>) -> Self {
        let skin = (0..faces.len()).collect();
        Self {
            x: points.iter().map(|p| p.x).collect(),
            y: points.iter().map(|p| p.y).collect(),
            z: points.iter().map(|p| p.z).collect(),
            f: faces,
            skin,
            patch: BTreeSet::new(),
            config: SmeshConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SmeshConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_skin(mut self, skin: Vec<usize>) -> Self {
        self.skin = skin;
        self
    }

    #[must_use]
    pub fn with_patch<I: IntoIterator<Item = usize>>(mut self, patch: I) -> Self {
        self.patch = patch.into_iter().collect();
        self
    }

    pub fn np(&self) -> usize {
        self.x.len()
    }

    pub fn nf(&self) -> usize {
        self.f.len()
    }
}

impl SurfaceSource for IMesh {
    fn num_points(&self) -> usize {
        self.np()
    }

    fn point_at(&self, gp: usize) -> Option<Point3> {
        Some(Point3::new(*self.x.get(gp)?, *self.y.get(gp)?, *self.z.get(gp)?))
    }

    fn face_points(&self, gf: usize) -> Option<&[usize]> {
        self.f.get(gf).map(Vec::as_slice)
    }

    fn config(&self) -> &SmeshConfig {
        &self.config
    }
}
