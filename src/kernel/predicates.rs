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

use crate::geometry::{Point3, Vector3};
use crate::kernel::orientation::orient2d_sign;

/// Three-way sign of `x` with a dead zone of half-width `tol`.
pub fn sign(x: f64, tol: f64) -> i8 {
    if x > tol {
        1
    } else if x < -tol {
        -1
    } else {
        0
    }
}

/// Barycentric coordinates `(u, v, w)` of `p` with respect to `(a, b, c)`,
/// after projecting `p` onto the triangle's plane. `None` for a degenerate
/// triangle.
pub fn barycentric(p: &Point3, a: &Point3, b: &Point3, c: &Point3) -> Option<(f64, f64, f64)> {
    let v0 = a.vector_to(b);
    let v1 = a.vector_to(c);
    let v2 = a.vector_to(p);

    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d11 = v1.dot(&v1);
    let d20 = v2.dot(&v0);
    let d21 = v2.dot(&v1);

    let denom = d00 * d11 - d01 * d01;
    if !(denom > f64::EPSILON * d00 * d11) {
        return None; // degenerate triangle
    }

    let v = (d11 * d20 - d01 * d21) / denom; // coeff of B
    let w = (d00 * d21 - d01 * d20) / denom; // coeff of C
    let u = 1.0 - v - w; // coeff of A

    Some((u, v, w))
}

/// Point-in-triangle test. Returns the barycentric weights of `p` when no
/// weight is below `-tol`.
pub fn is_point_inside(
    p: &Point3,
    a: &Point3,
    b: &Point3,
    c: &Point3,
    tol: f64,
) -> Option<(f64, f64, f64)> {
    let (u, v, w) = barycentric(p, a, b, c)?;
    if u < -tol || v < -tol || w < -tol {
        return None;
    }
    Some((u, v, w))
}

fn cross2(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

/// Intersect the ray `o + t*d` with the segment `p + s*(q - p)`, both lying
/// in the plane of normal `n`.
///
/// Returns `(t, s)` with `t >= -tol` and `s` in `[0, 1]`. Parallel and
/// collinear configurations report no hit.
pub fn ray_edge_intersect(
    o: &Point3,
    d: &Vector3,
    p: &Point3,
    q: &Point3,
    n: &Vector3,
    tol: f64,
) -> Option<(f64, f64)> {
    let axis = n.dominant_axis();
    let o2 = o.drop_axis(axis);
    let tip = (o + d).drop_axis(axis);
    let p2 = p.drop_axis(axis);
    let q2 = q.drop_axis(axis);

    // p and q must straddle (or touch) the ray's supporting line
    let sp = orient2d_sign(&o2, &tip, &p2);
    let sq = orient2d_sign(&o2, &tip, &q2);
    if sp == sq {
        return None;
    }

    let (dx, dy) = (tip.x - o2.x, tip.y - o2.y);
    let (ex, ey) = (q2.x - p2.x, q2.y - p2.y);
    let (wx, wy) = (p2.x - o2.x, p2.y - o2.y);

    let denom = cross2(dx, dy, ex, ey);
    if denom == 0.0 {
        return None;
    }

    let t = cross2(wx, wy, ex, ey) / denom;
    let s = cross2(wx, wy, dx, dy) / denom;

    if t < -tol {
        return None;
    }
    Some((t, s.clamp(0.0, 1.0)))
}
