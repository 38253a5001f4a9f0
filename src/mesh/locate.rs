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

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, warn};

use crate::{
    error::{SmeshError, SmeshResult, UnresolvedPoint},
    geometry::{Point3, Vector3},
    kernel::predicates::{is_point_inside, ray_edge_intersect, sign},
    mesh::{
        basic_types::{LocateStats, PointLoc, Snap},
        smesh::Smesh,
        spatial_hash::FaceGrid,
    },
};

pub type Located = Result<PointLoc, UnresolvedPoint>;

impl Smesh {
    fn locator(&self) -> SmeshResult<&FaceGrid> {
        if self.fcenters.len() != self.nf() {
            return Err(SmeshError::MissingGeometry { what: "face centers" });
        }
        self.grid
            .as_ref()
            .ok_or(SmeshError::MissingGeometry { what: "face hash" })
    }

    /// Locate every point of `other` on this mesh; strict form.
    ///
    /// The first point that lies in no face aborts the whole batch with
    /// [`SmeshError::Unresolved`].
    pub fn locate(&self, other: &Smesh) -> SmeshResult<Vec<PointLoc>> {
        self.locate_each(other)?
            .into_iter()
            .map(|r| r.map_err(SmeshError::from))
            .collect()
    }

    /// Locate every point of `other` on this mesh, keeping unresolved points
    /// as values. Output order is `other`'s point order.
    pub fn locate_each(&self, other: &Smesh) -> SmeshResult<Vec<Located>> {
        self.locate_points(&other.points())
    }

    pub fn locate_points(&self, pts: &[Point3]) -> SmeshResult<Vec<Located>> {
        let grid = self.locator()?;
        let run = |(pid, pt): (usize, &Point3)| self.locate_in(grid, pid, pt);

        #[cfg(feature = "parallel")]
        let out: Vec<Located> = if self.config.parallel {
            pts.par_iter().enumerate().map(run).collect()
        } else {
            pts.iter().enumerate().map(run).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let out: Vec<Located> = pts.iter().enumerate().map(run).collect();

        for u in out.iter().filter_map(|r| r.as_ref().err()) {
            warn!(
                pid = u.pid,
                x = u.point.x,
                y = u.point.y,
                z = u.point.z,
                candidates = ?u.candidates,
                "point lies in no face"
            );
        }
        let stats = LocateStats::tally(out.iter().map(|r| r.as_ref().ok()));
        info!(
            interior = stats.interior,
            on_vertex = stats.on_vertex,
            on_edge = stats.on_edge,
            unresolved = stats.unresolved,
            "located {} points",
            pts.len()
        );

        Ok(out)
    }

    fn locate_in(&self, grid: &FaceGrid, pid: usize, pt: &Point3) -> Located {
        let Some(voxel) = grid.voxel_of(pt) else {
            return Err(UnresolvedPoint {
                pid,
                point: *pt,
                voxel: None,
                candidates: Vec::new(),
            });
        };

        let pf = grid.faces_in(voxel);
        for &fid in pf {
            let pn = &self.fc[fid];
            let fc = &self.fcenters[fid];
            let n = pn.len();

            for j in 0..n {
                let a = self.point(pn[j]);
                let b = self.point(pn[(j + 1) % n]);
                if let Some(bcrd) = is_point_inside(pt, &a, &b, fc, self.config.inside_tol) {
                    return Ok(self.classify(fid, j, n, bcrd, pt, &a, &b));
                }
            }
        }

        let mut candidates: Vec<(usize, f64)> = pf
            .iter()
            .map(|&fid| (fid, pt.distance_to(&self.fcenters[fid])))
            .collect();
        candidates.sort_by(|l, r| l.1.total_cmp(&r.1));

        Err(UnresolvedPoint {
            pid,
            point: *pt,
            voxel: Some(voxel),
            candidates,
        })
    }

    /// Vertex snaps win over the edge snap: a point near a vertex is near
    /// its edges too.
    #[allow(clippy::too_many_arguments)]
    fn classify(
        &self,
        fid: usize,
        j: usize,
        n: usize,
        (u, v, w): (f64, f64, f64),
        pt: &Point3,
        a: &Point3,
        b: &Point3,
    ) -> PointLoc {
        let mut loc = PointLoc {
            fid,
            sub: j,
            bcrd: [u, v, w],
            snap: Snap::Interior,
            x: pt.x,
            y: pt.y,
            z: pt.z,
        };

        let snapped = if sign(1.0 - u, self.config.near_vertex_tol) == 0 {
            loc.snap = Snap::Vertex(j);
            loc.bcrd = [1.0, 0.0, 0.0];
            *a
        } else if sign(1.0 - v, self.config.near_vertex_tol) == 0 {
            loc.snap = Snap::Vertex((j + 1) % n);
            loc.bcrd = [0.0, 1.0, 0.0];
            *b
        } else if sign(w, self.config.near_edge_tol) == 0 {
            loc.snap = Snap::Edge(j);
            loc.bcrd = [u, 1.0 - u, 0.0];
            b.lerp(a, u)
        } else {
            return loc;
        };

        loc.x = snapped.x;
        loc.y = snapped.y;
        loc.z = snapped.z;
        loc
    }

    /// Move every point of `pids` that snapped to a vertex or an edge onto
    /// its snapped position. `plocs` is indexed by point id.
    ///
    /// A move of at least the minimum inter-point distance is rejected
    /// before any point is touched.
    pub fn replace_by_projections(&mut self, pids: &[usize], plocs: &[PointLoc]) -> SmeshResult<()> {
        let min_pdist = match self.min_pdist {
            Some(d) => d,
            None => self.compute_min_distance_between_points(),
        };

        let mut moves = Vec::new();
        for &pid in pids {
            if pid >= self.np() {
                return Err(SmeshError::UnknownPoint { point: pid });
            }
            let ploc = plocs.get(pid).ok_or(SmeshError::UnknownPoint { point: pid })?;
            if ploc.snap == Snap::Interior {
                continue;
            }
            let target = ploc.point();
            let distance = self.point(pid).distance_to(&target);
            if distance >= min_pdist {
                warn!(pid, distance, min_pdist, "tight near vertex/edge situation");
                return Err(SmeshError::TightSnap {
                    point: pid,
                    distance,
                    min_distance: min_pdist,
                });
            }
            moves.push((pid, target));
        }

        if moves.is_empty() {
            return Ok(());
        }
        for (pid, t) in moves {
            self.x[pid] = t.x;
            self.y[pid] = t.y;
            self.z[pid] = t.z;
        }
        self.invalidate_geometry();
        Ok(())
    }

    /// Among the candidate faces `pf`, the one a ray from `origin` along `d`
    /// enters first.
    ///
    /// `d` is projected onto each face's plane; edges touching `last_vertex`
    /// and the edge `last_edge` are skipped, so the ray does not re-hit what
    /// it just left.
    pub fn deduce_face(
        &self,
        pf: &[usize],
        origin: &Point3,
        d: &Vector3,
        last_vertex: Option<usize>,
        last_edge: Option<usize>,
    ) -> SmeshResult<usize> {
        let mut t_min = f64::MAX;
        let mut ret_face = None;

        for &fid in pf {
            let proj = self.get_unit_projected_direction(fid, d)?;
            let normal = self.fnormals[fid];
            let pn = &self.fc[fid];
            let pe = &self.f2e[fid];
            let n = pn.len();

            for i in 0..n {
                let p = pn[i];
                let q = pn[(i + 1) % n];
                if last_vertex.is_some_and(|v| v == p || v == q) || last_edge == Some(pe[i]) {
                    continue;
                }

                let hit = ray_edge_intersect(
                    origin,
                    &proj,
                    &self.point(p),
                    &self.point(q),
                    &normal,
                    self.config.inside_tol,
                );
                if let Some((t, _)) = hit {
                    if t < t_min {
                        t_min = t;
                        ret_face = Some(fid);
                    }
                    // first edge hit settles this face
                    break;
                }
            }
        }

        ret_face.ok_or_else(|| SmeshError::NoFaceHit {
            origin: *origin,
            faces: pf.to_vec(),
        })
    }
}
