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

use crate::geometry::Point3;

/// How a located point relates to the face that contains it.
///
/// Indices are positions in the face polygon: `Vertex(j)` is the `j`-th
/// point of the face, `Edge(j)` the edge from point `j` to point `j + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snap {
    Interior,
    Vertex(usize),
    Edge(usize),
}

/// Where a foreign point lands on a surface mesh.
///
/// `bcrd` are the barycentric weights against the fan triangle
/// (`Fc[fid][sub]`, `Fc[fid][sub + 1]`, face center). `x, y, z` is the
/// snapped position for vertex and edge hits and the query point itself
/// for interior hits.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLoc {
    pub fid: usize,
    pub sub: usize,
    pub bcrd: [f64; 3],
    pub snap: Snap,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PointLoc {
    pub fn v_idx(&self) -> Option<usize> {
        match self.snap {
            Snap::Vertex(j) => Some(j),
            _ => None,
        }
    }

    pub fn e_idx(&self) -> Option<usize> {
        match self.snap {
            Snap::Edge(j) => Some(j),
            _ => None,
        }
    }

    pub fn point(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }
}

/// Per-snap tallies of a batch of locations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocateStats {
    pub interior: usize,
    pub on_vertex: usize,
    pub on_edge: usize,
    pub unresolved: usize,
}

impl LocateStats {
    pub fn tally<'a, I>(locs: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a PointLoc>>,
    {
        let mut s = LocateStats::default();
        for loc in locs {
            match loc.map(|l| l.snap) {
                Some(Snap::Interior) => s.interior += 1,
                Some(Snap::Vertex(_)) => s.on_vertex += 1,
                Some(Snap::Edge(_)) => s.on_edge += 1,
                None => s.unresolved += 1,
            }
        }
        s
    }
}
