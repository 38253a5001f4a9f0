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
use smesh::{Aabb, IMesh, Point3, Smesh, SmeshError, Vector3};

#[test]
fn test_aabb() {
    let bb: Aabb = [
        Point3::new(1.0, -1.0, 0.0),
        Point3::new(-2.0, 3.0, 0.5),
        Point3::new(0.0, 0.0, 0.0),
    ]
    .into_iter()
    .collect();
    assert_eq!(bb.min, Point3::new(-2.0, -1.0, 0.0));
    assert_eq!(bb.max, Point3::new(1.0, 3.0, 0.5));
    assert!(bb.contains(&Point3::new(0.0, 3.0, 0.25)));
    assert!(!bb.contains(&Point3::new(0.0, 3.1, 0.25)));

    let touching = Aabb::from_points(&Point3::new(1.0, 0.0, 0.0), &Point3::new(2.0, 1.0, 1.0));
    assert!(bb.intersects(&touching));
    let apart = Aabb::from_points(&Point3::new(1.5, 0.0, 0.0), &Point3::new(2.0, 1.0, 1.0));
    assert!(!bb.intersects(&apart));
    assert_eq!(bb.union(&apart).max.x, 2.0);

    assert!(Aabb::empty().is_empty());
    let p = bb.padded(0.5);
    assert_eq!(p.min.x, -3.5);
    assert_eq!(p.max.z, 0.75);
}

#[test]
fn test_face_centers_and_normals() {
    let mut m = carve_all(&unit_grid(2));
    m.make_fnormals();
    assert_eq!(m.fcenters.len(), 4);
    assert!(same_point(&m.fcenters[0], &Point3::new(0.25, 0.25, 0.0)));
    assert!(same_point(&m.fcenters[3], &Point3::new(0.75, 0.75, 0.0)));
    for n in &m.fnormals {
        assert_eq!(*n, Vector3::new(0.0, 0.0, 1.0));
    }

    m.make_pnormals();
    assert_eq!(m.pnormals.len(), m.np());
    assert!(m.pnormals.iter().all(|n| (n.z - 1.0).abs() < 1e-12));
}

#[test]
fn test_normal_follows_winding() {
    let pts = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
    ];
    let im = IMesh::new(&pts, vec![vec![0, 1, 2]]);
    let mut m = Smesh::from_faces(&im, &[0], true).unwrap();
    m.make_fnormals();
    assert!((m.fnormals[0].z + 1.0).abs() < 1e-12);
}

#[test]
fn test_tilted_face_normal() {
    let pts = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    let im = IMesh::new(&pts, vec![vec![0, 1, 2, 3]]);
    let mut m = Smesh::from_faces(&im, &[0], true).unwrap();
    m.make_fnormals();
    let s = std::f64::consts::FRAC_1_SQRT_2;
    let n = m.fnormals[0];
    assert!((n.x + s).abs() < 1e-12);
    assert!(n.y.abs() < 1e-12);
    assert!((n.z - s).abs() < 1e-12);
}

#[test]
fn test_projected_direction() {
    let mut m = carve_all(&unit_grid(1));
    let d = Vector3::new(1.0, 1.0, 1.0);
    assert!(matches!(
        m.get_unit_projected_direction(0, &d),
        Err(SmeshError::MissingGeometry { .. })
    ));
    m.make_fnormals();
    let p = m.get_unit_projected_direction(0, &d).unwrap();
    let s = std::f64::consts::FRAC_1_SQRT_2;
    assert!((p.x - s).abs() < 1e-12);
    assert!((p.y - s).abs() < 1e-12);
    assert_eq!(p.z, 0.0);
    assert!(matches!(
        m.get_unit_projected_direction(5, &d),
        Err(SmeshError::UnknownFace { face: 5 })
    ));
}

#[test]
fn test_min_distance() {
    let mut m = carve_all(&grid_from_lines(&[0.0, 0.3, 1.0], &[0.0, 0.5, 1.0]));
    assert_eq!(m.min_pdist, None);
    let d = m.compute_min_distance_between_points();
    assert!(close(d, 0.3));
    assert_eq!(m.min_pdist, Some(d));
    m.add_point(2.0, 2.0, 0.0);
    assert_eq!(m.min_pdist, None);
}
