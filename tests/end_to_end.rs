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

//! Carve two overlapping patches, make the first one conformal to the
//! boundary of the second, and locate the second on it.

mod common;

use common::*;
use smesh::{Point3, Smesh, Snap};

fn p(x: f64, y: f64) -> Point3 {
    Point3::new(x, y, 0.0)
}

/// Unit square split 2x2, with the boundary of a 0.75 grid registered as
/// centers of its boundary edges.
fn prepared_target() -> Smesh {
    let mut a = carve_all(&unit_grid(2));
    let splits = [
        ((0.5, 0.0), (1.0, 0.0), (0.75, 0.0)),
        ((1.0, 0.5), (1.0, 1.0), (1.0, 0.75)),
        ((0.5, 1.0), (1.0, 1.0), (0.75, 1.0)),
        ((0.0, 0.5), (0.0, 1.0), (0.0, 0.75)),
    ];
    for ((px, py), (qx, qy), (cx, cy)) in splits {
        let pid = point_id(&a, p(px, py));
        let qid = point_id(&a, p(qx, qy));
        let c = a.add_point(cx, cy, 0.0);
        a.register_edge_center(pid, qid, c).unwrap();
    }
    a
}

#[test]
fn test_boundary_points_become_vertices() {
    let lines = [0.0, 0.75, 1.0];
    let b = carve_all(&grid_from_lines(&lines, &lines));

    let mut a = prepared_target();
    let mut before = a.clone();
    before.build_locator().unwrap();
    let loc = before.locate_points(&[p(0.75, 0.0)]).unwrap().remove(0).unwrap();
    assert!(matches!(loc.snap, Snap::Edge(_)));

    a.conformize().unwrap();
    assert_eq!(a.np(), 13);
    assert_eq!(a.ne(), 16);
    assert_eq!(a.euler_characteristic(), 1);
    assert_eq!(a.boundary_edges().len(), 12);
    a.check_adjacency().unwrap();

    a.build_locator().unwrap();
    let locs = a.locate(&b).unwrap();
    assert_eq!(locs.len(), 9);

    for (pid, loc) in locs.iter().enumerate() {
        let q = b.point(pid);
        let on_boundary = [q.x, q.y].iter().any(|&c| c == 0.0 || c == 1.0);
        if on_boundary {
            let j = loc.v_idx().expect("boundary point lands on a vertex");
            let vid = a.fc[loc.fid][j];
            assert!(same_point(&a.point(vid), &q));
        } else {
            assert_eq!(loc.snap, Snap::Interior);
            assert_eq!(loc.fid, a.g2lf[&3]);
        }
        assert!(same_point(&loc.point(), &q));
    }

    let mut b = b;
    let before = b.points();
    let pids: Vec<usize> = (0..b.np()).collect();
    b.replace_by_projections(&pids, &locs).unwrap();
    assert_eq!(b.points(), before);
}
