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
use tracing::debug;

use crate::{
    error::{SmeshError, SmeshResult},
    mesh::{
        canonical_edge::{Edge, UEdge},
        smesh::{PointList, Smesh},
    },
};

/// Edge tables derived from a face list.
#[derive(Debug, Clone, Default)]
pub struct EdgeTables {
    pub e: Vec<Edge>,
    pub f2e: Vec<Vec<usize>>,
    pub e2f: Vec<[Option<usize>; 2]>,
    pub f2f: Vec<Vec<Option<usize>>>,
}

impl EdgeTables {
    /// Build `E`, `F2E`, `E2F` and `F2F` from `faces`.
    ///
    /// Edge ids follow first discovery while walking faces in id order; the
    /// stored orientation is the winding of the discovering face.
    pub fn build(faces: &[Vec<usize>], np: usize, check_euler: bool) -> SmeshResult<Self> {
        let nf = faces.len();
        let mut edges: AHashMap<UEdge, usize> = AHashMap::default();
        let mut e: Vec<Edge> = Vec::new();
        let mut f2e: Vec<Vec<usize>> = Vec::with_capacity(nf);

        for pn in faces {
            let n = pn.len();
            let mut pe = Vec::with_capacity(n);
            for j in 0..n {
                let p = pn[j];
                let q = pn[(j + 1) % n];
                let eid = *edges.entry(UEdge::new(p, q)).or_insert_with(|| {
                    e.push(Edge::new(p, q));
                    e.len() - 1
                });
                pe.push(eid);
            }
            f2e.push(pe);
        }

        let ne = e.len();
        let mut e2f: Vec<[Option<usize>; 2]> = vec![[None, None]; ne];

        for (fid, pe) in f2e.iter().enumerate() {
            for &eid in pe {
                let slot = &mut e2f[eid];
                match *slot {
                    [None, _] => slot[0] = Some(fid),
                    [Some(_), None] => slot[1] = Some(fid),
                    [Some(a), Some(b)] => {
                        return Err(SmeshError::NonManifoldEdge {
                            p: e[eid].p,
                            q: e[eid].q,
                            faces: [a, b, fid],
                        });
                    }
                }
            }
        }

        // Euler formula for planar graphs: np - ne + nf + 1 == 2
        if check_euler && np + nf != ne + 1 {
            return Err(SmeshError::EulerMismatch { np, ne, nf });
        }

        let mut tables = EdgeTables {
            e,
            f2e,
            e2f,
            f2f: Vec::new(),
        };
        tables.check_consistency()?;

        tables.f2f = tables
            .f2e
            .iter()
            .enumerate()
            .map(|(fid, pe)| {
                pe.iter()
                    .map(|&eid| {
                        let [a, b] = tables.e2f[eid];
                        if a == Some(fid) { b } else { a }
                    })
                    .collect()
            })
            .collect();

        Ok(tables)
    }

    /// Every face named in `E2F` lists the edge in its `F2E` row, and every
    /// edge has one or two incident faces.
    pub fn check_consistency(&self) -> SmeshResult<()> {
        check_edge_faces(&self.e2f, &self.f2e)
    }

    pub fn boundary_edges(&self) -> impl Iterator<Item = usize> + '_ {
        self.e2f
            .iter()
            .enumerate()
            .filter(|(_, f)| f[1].is_none())
            .map(|(eid, _)| eid)
    }
}

impl Smesh {
    pub fn make_edges(&mut self) -> SmeshResult<()> {
        let tables = EdgeTables::build(&self.fc, self.np(), self.config.check_euler)?;
        self.install_edges(tables);
        Ok(())
    }

    pub(crate) fn install_edges(&mut self, tables: EdgeTables) {
        debug!(
            np = self.np(),
            ne = tables.e.len(),
            nf = self.nf(),
            boundary = tables.boundary_edges().count(),
            "built edge tables"
        );
        self.e = tables.e;
        self.f2e = tables.f2e;
        self.e2f = tables.e2f;
        self.f2f = tables.f2f;
    }

    pub fn make_point_faces(&mut self) {
        let mut p2f = vec![PointList::new(); self.np()];
        for (fid, pn) in self.fc.iter().enumerate() {
            for &p in pn {
                p2f[p].push(fid);
            }
        }
        self.p2f = p2f;
    }

    pub fn make_point_edges(&mut self) {
        let mut p2e = vec![PointList::new(); self.np()];
        for (eid, edge) in self.e.iter().enumerate() {
            p2e[edge.p].push(eid);
            p2e[edge.q].push(eid);
        }
        self.p2e = p2e;
    }

    /// Rebuild every adjacency table from `fc`.
    pub fn build_adjacency(&mut self) -> SmeshResult<()> {
        self.make_edges()?;
        self.make_point_faces();
        self.make_point_edges();
        Ok(())
    }

    /// Drop all tables derived from `fc`, plus derived geometry.
    pub fn clear_conformal_data(&mut self) {
        self.f2e.clear();
        self.f2f.clear();
        self.p2f.clear();
        self.p2e.clear();
        self.e.clear();
        self.e2f.clear();
        self.invalidate_geometry();
    }

    /// Edges with a single incident face.
    pub fn boundary_edges(&self) -> Vec<usize> {
        (0..self.ne()).filter(|&eid| self.e2f[eid][1].is_none()).collect()
    }

    /// `np - ne + nf`, which is 1 for a single simply connected patch.
    pub fn euler_characteristic(&self) -> i64 {
        self.np() as i64 - self.ne() as i64 + self.nf() as i64
    }

    /// Re-run the structural checks on the installed tables.
    pub fn check_adjacency(&self) -> SmeshResult<()> {
        check_edge_faces(&self.e2f, &self.f2e)?;
        for (pid, pe) in self.p2e.iter().enumerate() {
            if let Some(&eid) = pe.iter().find(|&&eid| !self.e[eid].has_point(pid)) {
                return Err(SmeshError::PointEdgeMismatch { point: pid, edge: eid });
            }
        }
        Ok(())
    }
}

fn check_edge_faces(e2f: &[[Option<usize>; 2]], f2e: &[Vec<usize>]) -> SmeshResult<()> {
    for (eid, faces) in e2f.iter().enumerate() {
        if faces[0].is_none() {
            return Err(SmeshError::OrphanEdge { edge: eid });
        }
        for &fid in faces.iter().flatten() {
            if !f2e.get(fid).is_some_and(|pe| pe.contains(&eid)) {
                return Err(SmeshError::AdjacencyMismatch { edge: eid, face: fid });
            }
        }
    }
    Ok(())
}
