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

mod common;

use common::*;
use smesh::{Smesh, SmeshError, UEdge};

fn quad() -> Smesh {
    carve_all(&unit_grid(1))
}

#[test]
fn test_no_centers_is_identity() {
    let mut m = carve_all(&unit_grid(3));
    assert!(m.get_edge_centers(0, 1).unwrap().is_empty());
    let before = m.fc.clone();
    let ne = m.ne();
    m.conformize().unwrap();
    assert_eq!(m.fc, before);
    assert_eq!(m.ne(), ne);
}

#[test]
fn test_boundary_midpoint() {
    let mut m = quad();
    let mid = m.add_point(0.5, 0.0, 0.0);
    m.register_edge_center(0, 1, mid).unwrap();
    assert_eq!(m.get_edge_centers(0, 1).unwrap(), vec![mid]);
    assert_eq!(m.get_edge_centers(1, 0).unwrap(), vec![mid]);

    m.conformize().unwrap();
    assert_eq!(m.fc[0], vec![0, mid, 1, 2, 3]);
    // the original connectivity is kept aside
    assert_eq!(m.f[0], vec![0, 1, 2, 3]);
    assert_eq!(m.ne(), 5);
    assert_eq!(m.euler_characteristic(), 1);
    assert!(m.find_edge(0, 1).is_none());
    assert!(m.find_edge(0, mid).is_some());
    assert!(m.find_edge(mid, 1).is_some());
    assert_eq!(m.p2f[mid].as_slice(), &[0]);
}

#[test]
fn test_shared_edge_is_split_in_both_faces() {
    let mut m = carve_all(&unit_grid(2));
    // edge (0.5, 0) - (0.5, 0.5) between faces 0 and 1
    let p = point_id(&m, smesh::Point3::new(0.5, 0.0, 0.0));
    let q = point_id(&m, smesh::Point3::new(0.5, 0.5, 0.0));
    let mid = m.add_point(0.5, 0.25, 0.0);
    m.register_edge_center(p, q, mid).unwrap();
    m.conformize().unwrap();

    for fid in [0, 1] {
        let pn = &m.fc[fid];
        let n = pn.len();
        assert_eq!(n, 5);
        let i = position_in_face(&m, fid, mid).expect("center spliced in");
        let prev = pn[(i + n - 1) % n];
        let next = pn[(i + 1) % n];
        assert_eq!(UEdge::new(prev, next), UEdge::new(p, q));
    }
    assert!(m.find_edge(p, q).is_none());
    for half in [m.find_edge(p, mid), m.find_edge(mid, q)] {
        let eid = half.expect("half edge exists");
        assert!(m.e2f[eid].iter().all(Option::is_some));
    }
    assert_eq!(m.euler_characteristic(), 1);
    assert!(m.check_adjacency().is_ok());
}

#[test]
fn test_nested_centers_keep_order() {
    let mut m = quad();
    let c = m.add_point(0.5, 0.0, 0.0);
    let l = m.add_point(0.25, 0.0, 0.0);
    let r = m.add_point(0.75, 0.0, 0.0);
    let ll = m.add_point(0.125, 0.0, 0.0);
    m.register_edge_center(0, 1, c).unwrap();
    m.register_edge_center(0, c, l).unwrap();
    m.register_edge_center(c, 1, r).unwrap();
    m.register_edge_center(l, 0, ll).unwrap();

    assert_eq!(m.get_edge_centers(0, 1).unwrap(), vec![ll, l, c, r]);
    assert_eq!(m.get_edge_centers(1, 0).unwrap(), vec![r, c, l, ll]);

    m.conformize().unwrap();
    assert_eq!(m.fc[0], vec![0, ll, l, c, r, 1, 2, 3]);
    assert_eq!(m.ne(), 8);
}

#[test]
fn test_cycle_is_reported_and_mesh_untouched() {
    let mut m = quad();
    let c = m.add_point(0.5, 0.0, 0.0);
    m.register_edge_center(0, 1, c).unwrap();
    // (0, c) split by 1 sends the walk back to (0, 1)
    m.register_edge_center(0, c, 1).unwrap();

    assert!(matches!(
        m.get_edge_centers(0, 1),
        Err(SmeshError::EdgeCenterCycle { p: 0, q: 1 })
    ));

    let fc = m.fc.clone();
    let e = m.e.clone();
    assert!(m.conformize().is_err());
    assert_eq!(m.fc, fc);
    assert_eq!(m.e, e);
}

#[test]
fn test_registration_rules() {
    let mut m = quad();
    let c = m.add_point(0.5, 0.0, 0.0);

    assert!(matches!(
        m.register_edge_center(0, 1, 99),
        Err(SmeshError::UnknownPoint { point: 99 })
    ));
    assert!(matches!(
        m.register_edge_center(0, 0, c),
        Err(SmeshError::InvalidEdgeCenter { .. })
    ));
    assert!(matches!(
        m.register_edge_center(0, 1, 1),
        Err(SmeshError::InvalidEdgeCenter { .. })
    ));
    // the diagonal is not an edge
    assert!(matches!(
        m.register_edge_center(0, 2, c),
        Err(SmeshError::InvalidEdgeCenter { .. })
    ));

    m.register_edge_center(1, 0, c).unwrap();
    m.register_edge_center(0, 1, c).unwrap();
    assert_eq!(m.ecenter.len(), 1);
    let other = m.add_point(0.4, 0.0, 0.0);
    assert!(m.register_edge_center(0, 1, other).is_err());

    // touching a center does not make a pair one of its halves
    assert!(matches!(
        m.register_edge_center(c, 2, other),
        Err(SmeshError::InvalidEdgeCenter { .. })
    ));
    assert!(matches!(
        m.register_edge_center(3, c, other),
        Err(SmeshError::InvalidEdgeCenter { .. })
    ));
    m.register_edge_center(c, 1, other).unwrap();
    assert_eq!(m.ecenter.len(), 2);
}

#[test]
fn test_unknown_center_rejected_before_splicing() {
    let mut m = quad();
    m.ecenter.insert(UEdge::new(0, 1), 17);
    let fc = m.fc.clone();
    assert!(matches!(
        m.conformize(),
        Err(SmeshError::UnknownPoint { point: 17 })
    ));
    assert_eq!(m.fc, fc);
}

#[test]
fn test_conformize_drops_stale_geometry() {
    let mut m = quad();
    m.build_locator().unwrap();
    assert!(m.grid.is_some());

    let c = m.add_point(0.5, 0.0, 0.0);
    assert!(m.grid.is_none());
    m.register_edge_center(0, 1, c).unwrap();
    m.build_locator().unwrap();
    m.conformize().unwrap();
    assert!(m.fcenters.is_empty());
    assert!(m.grid.is_none());
}
