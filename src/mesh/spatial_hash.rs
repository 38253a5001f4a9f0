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

use ahash::AHashMap;
use num_traits::ToPrimitive;
use tracing::debug;

use crate::{
    error::{SmeshError, SmeshResult},
    geometry::{Aabb, Point3},
    mesh::smesh::Smesh,
};

/// Uniform voxel grid over a padded mesh bounding box, with the faces whose
/// bounding box touches each voxel.
///
/// Binning is conservative: a voxel may list faces that do not actually
/// cross it, never the other way round.
#[derive(Debug, Clone)]
pub struct FaceGrid {
    pub bbox: Aabb,
    pub res: [usize; 3],
    pub h: [f64; 3],
    pub bins: AHashMap<usize, Vec<usize>>,
}

impl FaceGrid {
    /// Grid over `tight` padded by `padding` times each axis extent.
    ///
    /// A flat axis gets a unit step, and its first voxel is centered on the
    /// plane so that round-off on either side still lands in voxel 0.
    pub fn new(tight: &Aabb, res: [usize; 3], padding: f64) -> Self {
        let mut bbox = tight.padded(padding);
        let mut h = [1.0; 3];
        for i in 0..3 {
            if tight.extent(i) != 0.0 {
                h[i] = bbox.extent(i) / res[i] as f64;
            } else {
                bbox.min[i] -= 0.5;
                bbox.max[i] += 0.5;
            }
        }
        FaceGrid {
            bbox,
            res,
            h,
            bins: AHashMap::default(),
        }
    }

    pub fn nxy(&self) -> usize {
        self.res[0] * self.res[1]
    }

    pub fn nxyz(&self) -> usize {
        self.nxy() * self.res[2]
    }

    pub fn voxel(&self, i: usize, j: usize, k: usize) -> usize {
        i + self.res[0] * j + self.nxy() * k
    }

    fn raw_index(&self, axis: usize, v: f64) -> f64 {
        ((v - self.bbox.min[axis]) / self.h[axis]).floor()
    }

    /// Voxel coordinates of `p`, or `None` outside the grid.
    pub fn cell_of(&self, p: &Point3) -> Option<[usize; 3]> {
        let mut ijk = [0usize; 3];
        for axis in 0..3 {
            let mut i = self.raw_index(axis, p[axis]).to_usize()?;
            if i >= self.res[axis] {
                // the upper face of the grid is closed
                if i > self.res[axis] || p[axis] > self.bbox.max[axis] {
                    return None;
                }
                i = self.res[axis] - 1;
            }
            ijk[axis] = i;
        }
        Some(ijk)
    }

    pub fn voxel_of(&self, p: &Point3) -> Option<usize> {
        self.cell_of(p).map(|[i, j, k]| self.voxel(i, j, k))
    }

    fn clamped_cell(&self, p: &Point3) -> [usize; 3] {
        let mut ijk = [0usize; 3];
        for axis in 0..3 {
            let i = self.raw_index(axis, p[axis]).to_i64().unwrap_or(0);
            ijk[axis] = i.clamp(0, self.res[axis] as i64 - 1) as usize;
        }
        ijk
    }

    /// Box covered by voxel `(i, j, k)`.
    pub fn voxel_bounds(&self, i: usize, j: usize, k: usize) -> Aabb {
        let lo = Point3::new(
            self.bbox.min.x + i as f64 * self.h[0],
            self.bbox.min.y + j as f64 * self.h[1],
            self.bbox.min.z + k as f64 * self.h[2],
        );
        let hi = Point3::new(lo.x + self.h[0], lo.y + self.h[1], lo.z + self.h[2]);
        Aabb::new(lo, hi)
    }

    /// Voxel coordinates spanned by `bb`, as inclusive `(min, max)` corners.
    pub fn span(&self, bb: &Aabb) -> ([usize; 3], [usize; 3]) {
        (self.clamped_cell(&bb.min), self.clamped_cell(&bb.max))
    }

    /// File `fid` under every voxel its bounding box spans.
    pub fn insert(&mut self, fid: usize, bb: &Aabb) {
        let (lo, hi) = self.span(bb);
        for i in lo[0]..=hi[0] {
            for j in lo[1]..=hi[1] {
                for k in lo[2]..=hi[2] {
                    let voxel = self.voxel(i, j, k);
                    self.bins.entry(voxel).or_default().push(fid);
                }
            }
        }
    }

    pub fn faces_in(&self, voxel: usize) -> &[usize] {
        self.bins.get(&voxel).map_or(&[], Vec::as_slice)
    }
}

impl Smesh {
    /// Tight bounding box of face `fid`.
    pub fn face_bbox(&self, fid: usize) -> Aabb {
        self.fc[fid].iter().map(|&p| self.point(p)).collect()
    }

    /// Set up an empty face grid over the padded bounding box of the points.
    pub fn make_bbox(&mut self) -> SmeshResult<()> {
        if self.np() == 0 {
            return Err(SmeshError::MissingGeometry { what: "mesh points" });
        }
        let tight: Aabb = self.points().into_iter().collect();
        self.grid = Some(FaceGrid::new(
            &tight,
            self.config.grid_resolution,
            self.config.bbox_padding,
        ));
        Ok(())
    }

    pub fn bin_face(&mut self, fid: usize) -> SmeshResult<()> {
        if fid >= self.nf() {
            return Err(SmeshError::UnknownFace { face: fid });
        }
        let bb = self.face_bbox(fid);
        let grid = self
            .grid
            .as_mut()
            .ok_or(SmeshError::MissingGeometry { what: "bounding box" })?;
        grid.insert(fid, &bb);
        Ok(())
    }

    pub fn hash_faces(&mut self) -> SmeshResult<()> {
        match self.grid.as_mut() {
            Some(grid) => grid.bins.clear(),
            None => return Err(SmeshError::MissingGeometry { what: "bounding box" }),
        }
        for fid in 0..self.nf() {
            self.bin_face(fid)?;
        }
        if let Some(grid) = &self.grid {
            debug!(
                voxels = grid.nxyz(),
                occupied = grid.bins.len(),
                nf = self.nf(),
                "hashed faces"
            );
        }
        Ok(())
    }
}
