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

use ahash::{AHashMap, AHashSet};
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    config::SmeshConfig,
    error::{SmeshError, SmeshResult},
    geometry::{Point3, Vector3},
    mesh::{
        SurfaceSource,
        canonical_edge::{Edge, UEdge},
        imesh::IMesh,
        spatial_hash::FaceGrid,
    },
};

pub type PointList = SmallVec<[usize; 6]>;

/// Surface mesh with local point/face numbering and full point/edge/face
/// adjacency.
///
/// `f` is the connectivity the mesh was carved with; `fc` is the live one,
/// rewritten by [`Smesh::conformize`]. Every table below `fc` is derived
/// from it and is rebuilt, never patched.
#[derive(Debug, Clone, Default)]
pub struct Smesh {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,

    pub f: Vec<Vec<usize>>,
    pub fc: Vec<Vec<usize>>,

    pub e: Vec<Edge>,
    pub f2e: Vec<Vec<usize>>,
    pub e2f: Vec<[Option<usize>; 2]>,
    pub f2f: Vec<Vec<Option<usize>>>,
    pub p2f: Vec<PointList>,
    pub p2e: Vec<PointList>,

    pub g2lp: AHashMap<usize, usize>,
    pub l2gp: AHashMap<usize, usize>,
    pub g2lf: AHashMap<usize, usize>,
    pub l2gf: AHashMap<usize, usize>,

    /// Undirected edge -> point splitting it. Filled by cross-mesh
    /// registration, consumed by `conformize`.
    pub ecenter: AHashMap<UEdge, usize>,

    pub fcenters: Vec<Point3>,
    pub fnormals: Vec<Vector3>,
    pub pnormals: Vec<Vector3>,
    pub grid: Option<FaceGrid>,
    pub min_pdist: Option<f64>,

    pub config: SmeshConfig,
}

impl Smesh {
    /// Carve the faces `fids` (global ids of `src`) into a new surface mesh.
    ///
    /// Local faces follow the order of `fids`; local points follow their
    /// first appearance along those faces.
    pub fn from_faces<S>(src: &S, fids: &[usize], check_euler: bool) -> SmeshResult<Self>
    where
        S: SurfaceSource + ?Sized,
    {
        let config = src.config().clone().with_check_euler(check_euler);
        config.validate()?;

        let mut m = Smesh {
            config,
            ..Smesh::default()
        };
        m.f.reserve(fids.len());

        let mut l2g_points: Vec<usize> = Vec::new();

        for &gf in fids {
            if m.g2lf.contains_key(&gf) {
                return Err(SmeshError::DuplicateFace { face: gf });
            }
            let pn = src
                .face_points(gf)
                .ok_or(SmeshError::UnknownFace { face: gf })?;
            check_polygon(gf, pn)?;

            let lf = m.f.len();
            m.g2lf.insert(gf, lf);
            m.l2gf.insert(lf, gf);

            let mut local = Vec::with_capacity(pn.len());
            for &gp in pn {
                if gp >= src.num_points() {
                    return Err(SmeshError::UnknownPoint { point: gp });
                }
                let lp = *m.g2lp.entry(gp).or_insert_with(|| {
                    l2g_points.push(gp);
                    l2g_points.len() - 1
                });
                local.push(lp);
            }
            m.f.push(local);
        }

        let np = l2g_points.len();
        m.x.reserve(np);
        m.y.reserve(np);
        m.z.reserve(np);
        for (lp, &gp) in l2g_points.iter().enumerate() {
            let pt = src
                .point_at(gp)
                .ok_or(SmeshError::UnknownPoint { point: gp })?;
            m.x.push(pt.x);
            m.y.push(pt.y);
            m.z.push(pt.z);
            m.l2gp.insert(lp, gp);
        }

        debug_assert_eq!(m.g2lp.len(), np);
        debug_assert_eq!(m.l2gp.len(), np);

        m.fc = m.f.clone();
        m.build_adjacency()?;

        debug!(
            np = m.np(),
            ne = m.ne(),
            nf = m.nf(),
            "carved surface mesh from {} source faces",
            fids.len()
        );
        Ok(m)
    }

    /// Surface mesh over the given skin faces of `im`.
    pub fn from_mesh_skin(im: &IMesh, skin: &[usize], check_euler: bool) -> SmeshResult<Self> {
        Self::from_faces(im, skin, check_euler)
    }

    /// Surface mesh over the skin faces of `im` whose every point is tagged.
    pub fn from_point_tags(im: &IMesh, tags: &[bool], check_euler: bool) -> SmeshResult<Self> {
        let fids: Vec<usize> = im
            .skin
            .iter()
            .copied()
            .filter(|&gf| {
                im.f.get(gf).is_some_and(|pn| {
                    pn.iter().all(|&gp| tags.get(gp).copied().unwrap_or(false))
                })
            })
            .collect();
        Self::from_faces(im, &fids, check_euler)
    }

    /// Surface mesh over the designated patch of `im`.
    pub fn from_mesh_patch(im: &IMesh, check_euler: bool) -> SmeshResult<Self> {
        let fids: Vec<usize> = im.patch.iter().copied().collect();
        Self::from_faces(im, &fids, check_euler)
    }

    pub fn np(&self) -> usize {
        self.x.len()
    }

    pub fn ne(&self) -> usize {
        self.e.len()
    }

    pub fn nf(&self) -> usize {
        self.fc.len()
    }

    /// Coordinates of local point `p`. Panics on an out-of-range id, like
    /// slice indexing.
    pub fn point(&self, p: usize) -> Point3 {
        Point3::new(self.x[p], self.y[p], self.z[p])
    }

    pub fn points(&self) -> Vec<Point3> {
        (0..self.np()).map(|p| self.point(p)).collect()
    }

    /// Append a point that exists only in this mesh (it has no global id).
    /// Derived geometry and the face hash go stale.
    pub fn add_point(&mut self, x: f64, y: f64, z: f64) -> usize {
        self.x.push(x);
        self.y.push(y);
        self.z.push(z);
        self.invalidate_geometry();
        self.x.len() - 1
    }

    /// Record that `center` splits edge `(p, q)`.
    ///
    /// `(p, q)` must be an edge of the live connectivity, or a half of an
    /// edge that is already split (nested subdivision). Registering the same
    /// center twice is a no-op.
    pub fn register_edge_center(&mut self, p: usize, q: usize, center: usize) -> SmeshResult<()> {
        let np = self.np();
        for pid in [p, q, center] {
            if pid >= np {
                return Err(SmeshError::UnknownPoint { point: pid });
            }
        }
        let bad = SmeshError::InvalidEdgeCenter { p, q, center };
        if p == q || center == p || center == q {
            return Err(bad);
        }

        let key = UEdge::new(p, q);
        if let Some(&old) = self.ecenter.get(&key) {
            return if old == center { Ok(()) } else { Err(bad) };
        }

        let is_edge = self.find_edge(p, q).is_some();
        let is_half = self
            .ecenter
            .iter()
            .any(|(parent, &c)| key == UEdge::new(parent.a, c) || key == UEdge::new(c, parent.b));
        if !is_edge && !is_half {
            return Err(bad);
        }

        self.ecenter.insert(key, center);
        Ok(())
    }

    /// Id of the live edge joining `p` and `q`.
    pub fn find_edge(&self, p: usize, q: usize) -> Option<usize> {
        self.p2e
            .get(p)?
            .iter()
            .copied()
            .find(|&eid| self.e[eid].other(p) == Some(q))
    }

    /// Drop derived geometry and the face hash; they no longer describe the
    /// current points or faces.
    pub fn invalidate_geometry(&mut self) {
        self.fcenters.clear();
        self.fnormals.clear();
        self.pnormals.clear();
        self.grid = None;
        self.min_pdist = None;
    }

    pub fn clear(&mut self) {
        let config = std::mem::take(&mut self.config);
        *self = Smesh {
            config,
            ..Smesh::default()
        };
    }
}

fn check_polygon(gf: usize, pn: &[usize]) -> SmeshResult<()> {
    let n = pn.len();
    if n < 3 {
        return Err(SmeshError::DegenerateFace { face: gf, len: n });
    }
    // a repeated point collapses an edge or pinches the polygon
    let mut seen = AHashSet::with_capacity(n);
    if !pn.iter().all(|&p| seen.insert(p)) {
        return Err(SmeshError::DegenerateFace { face: gf, len: n });
    }
    Ok(())
}

impl SurfaceSource for Smesh {
    fn num_points(&self) -> usize {
        self.np()
    }

    fn point_at(&self, gp: usize) -> Option<Point3> {
        (gp < self.np()).then(|| self.point(gp))
    }

    fn face_points(&self, gf: usize) -> Option<&[usize]> {
        self.fc.get(gf).map(Vec::as_slice)
    }

    fn config(&self) -> &SmeshConfig {
        &self.config
    }
}
