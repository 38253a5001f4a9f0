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

use crate::geometry::{Point2, Point3};
use crate::numeric::exact_rational::ExactRational;

/// Relative error bound of the float `orient2d` (Shewchuk's `ccwerrboundA`).
const ORIENT2D_ERRBOUND: f64 = (3.0 + 16.0 * f64::EPSILON) * f64::EPSILON;

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Signed volume of tetra (a,b,c,d): ((b-a) x (c-a)) . (d-a)
pub fn orient3d(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> f64 {
    let ab = a.vector_to(b);
    let ac = a.vector_to(c);
    let ad = a.vector_to(d);
    ab.cross(&ac).dot(&ad)
}

/// Sign of `orient2d`, exact for finite inputs.
///
/// The float determinant is trusted when it clears its error bound;
/// otherwise the determinant is re-evaluated over rationals.
pub fn orient2d_sign(a: &Point2, b: &Point2, c: &Point2) -> i8 {
    let detleft = (b.x - a.x) * (c.y - a.y);
    let detright = (b.y - a.y) * (c.x - a.x);
    let det = detleft - detright;
    let bound = ORIENT2D_ERRBOUND * (detleft.abs() + detright.abs());

    if det > bound {
        return 1;
    }
    if -det > bound {
        return -1;
    }
    orient2d_exact(a, b, c).unwrap_or(0)
}

fn orient2d_exact(a: &Point2, b: &Point2, c: &Point2) -> Option<i8> {
    let ax = ExactRational::from_f64(a.x)?;
    let ay = ExactRational::from_f64(a.y)?;
    let bx = ExactRational::from_f64(b.x)?;
    let by = ExactRational::from_f64(b.y)?;
    let cx = ExactRational::from_f64(c.x)?;
    let cy = ExactRational::from_f64(c.y)?;

    let left = &(&bx - &ax) * &(&cy - &ay);
    let right = &(&by - &ay) * &(&cx - &ax);
    Some((&left - &right).sign())
}
