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

use crate::{
    error::{SmeshError, SmeshResult},
    geometry::{Point3, Vector3},
    mesh::smesh::Smesh,
};

impl Smesh {
    /// Face centers: the mean of each polygon's points.
    pub fn make_fcenters(&mut self) {
        let fcenters: Vec<Point3> = self
            .fc
            .iter()
            .map(|pn| Point3::centroid(pn.iter().map(|&p| self.point(p))).unwrap_or_default())
            .collect();
        self.fcenters = fcenters;
    }

    /// Unit face normals from the first two points taken relative to the
    /// face center. Orientation follows the winding; accuracy is first
    /// order on non-planar polygons.
    pub fn make_fnormals(&mut self) {
        if self.fcenters.len() != self.nf() {
            self.make_fcenters();
        }
        let fnormals: Vec<Vector3> = self
            .fc
            .iter()
            .zip(&self.fcenters)
            .map(|(pn, fc)| {
                let v0 = fc.vector_to(&self.point(pn[0]));
                let v1 = fc.vector_to(&self.point(pn[1]));
                v0.cross(&v1).normalized()
            })
            .collect();
        self.fnormals = fnormals;
    }

    /// Point normals: normalized sum of the normals of the incident faces,
    /// without angle weighting.
    pub fn make_pnormals(&mut self) {
        if self.fnormals.len() != self.nf() {
            self.make_fnormals();
        }
        if self.p2f.len() != self.np() {
            self.make_point_faces();
        }
        let pnormals: Vec<Vector3> = self
            .p2f
            .iter()
            .map(|pf| {
                pf.iter()
                    .fold(Vector3::zero(), |acc, &fid| acc + self.fnormals[fid])
                    .normalized()
            })
            .collect();
        self.pnormals = pnormals;
    }

    /// `d` with its component along the normal of `fid` removed, normalized.
    pub fn get_unit_projected_direction(&self, fid: usize, d: &Vector3) -> SmeshResult<Vector3> {
        if fid >= self.nf() {
            return Err(SmeshError::UnknownFace { face: fid });
        }
        let n = self
            .fnormals
            .get(fid)
            .ok_or(SmeshError::MissingGeometry { what: "face normals" })?;
        let dp = d.dot(n);
        Ok((*d - *n * dp).normalized())
    }

    /// Smallest distance between two distinct points, cached in `min_pdist`.
    pub fn compute_min_distance_between_points(&mut self) -> f64 {
        let np = self.np();
        let mut best = f64::MAX;
        for i in 0..np {
            let pi = self.point(i);
            for j in (i + 1)..np {
                let d = pi.distance_squared_to(&self.point(j));
                if d < best {
                    best = d;
                }
            }
        }
        let min_pdist = best.sqrt();
        self.min_pdist = Some(min_pdist);
        min_pdist
    }

    /// Face centers, normals and the face hash, everything `locate` and
    /// `deduce_face` read.
    pub fn build_locator(&mut self) -> SmeshResult<()> {
        self.make_fcenters();
        self.make_fnormals();
        self.make_bbox()?;
        self.hash_faces()
    }
}
