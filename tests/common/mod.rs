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

#![allow(dead_code)]

use smesh::{IMesh, Point3, Smesh};

/// Structured quad grid in the z = 0 plane over the given grid lines.
///
/// Point `(i, j)` has id `i + xs.len() * j`; face `(i, j)` has id
/// `i + (xs.len() - 1) * j` and counter-clockwise winding seen from +z.
pub fn grid_from_lines(xs: &[f64], ys: &[f64]) -> IMesh {
    let nx = xs.len();
    let mut pts = Vec::with_capacity(nx * ys.len());
    for &y in ys {
        for &x in xs {
            pts.push(Point3::new(x, y, 0.0));
        }
    }
    let id = |i: usize, j: usize| i + nx * j;
    let mut faces = Vec::new();
    for j in 0..ys.len() - 1 {
        for i in 0..nx - 1 {
            faces.push(vec![id(i, j), id(i + 1, j), id(i + 1, j + 1), id(i, j + 1)]);
        }
    }
    IMesh::new(&pts, faces)
}

/// `n x n` quads over the unit square.
pub fn unit_grid(n: usize) -> IMesh {
    let lines: Vec<f64> = (0..=n).map(|i| i as f64 / n as f64).collect();
    grid_from_lines(&lines, &lines)
}

pub fn all_faces(im: &IMesh) -> Vec<usize> {
    (0..im.nf()).collect()
}

pub fn carve_all(im: &IMesh) -> Smesh {
    Smesh::from_faces(im, &all_faces(im), true).expect("valid grid")
}

pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

pub fn same_point(a: &Point3, b: &Point3) -> bool {
    close(a.x, b.x) && close(a.y, b.y) && close(a.z, b.z)
}

/// Local id of the point at `p`.
pub fn point_id(m: &Smesh, p: Point3) -> usize {
    (0..m.np())
        .find(|&i| same_point(&m.point(i), &p))
        .expect("point exists")
}

/// Position of `pid` in the polygon of face `fid`.
pub fn position_in_face(m: &Smesh, fid: usize, pid: usize) -> Option<usize> {
    m.fc[fid].iter().position(|&p| p == pid)
}
