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

use crate::geometry::point_3::Point3;

/// An axis-aligned bounding box in 3D.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb {
    pub fn new(min: Point3, max: Point3) -> Self {
        Aabb { min, max }
    }

    /// Inverted box that any `expand` call replaces.
    pub fn empty() -> Self {
        Aabb {
            min: Point3::new(f64::MAX, f64::MAX, f64::MAX),
            max: Point3::new(f64::MIN, f64::MIN, f64::MIN),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Build the smallest AABB containing two points.
    pub fn from_points(a: &Point3, b: &Point3) -> Self {
        let mut bb = Aabb::empty();
        bb.expand(a);
        bb.expand(b);
        bb
    }

    pub fn expand(&mut self, p: &Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        let mut out = *self;
        out.expand(&other.min);
        out.expand(&other.max);
        out
    }

    /// Does this AABB intersect `other`? Touching boxes intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        for i in 0..3 {
            if self.max[i] < other.min[i] || other.max[i] < self.min[i] {
                return false;
            }
        }
        true
    }

    pub fn contains(&self, p: &Point3) -> bool {
        (0..3).all(|i| self.min[i] <= p[i] && p[i] <= self.max[i])
    }

    /// Length along axis `i`.
    pub fn extent(&self, i: usize) -> f64 {
        self.max[i] - self.min[i]
    }

    /// Grow every axis by `rel` times its own extent on both sides.
    /// A flat axis stays flat.
    pub fn padded(&self, rel: f64) -> Aabb {
        let dx = self.extent(0) * rel;
        let dy = self.extent(1) * rel;
        let dz = self.extent(2) * rel;
        Aabb {
            min: Point3::new(self.min.x - dx, self.min.y - dy, self.min.z - dz),
            max: Point3::new(self.max.x + dx, self.max.y + dy, self.max.z + dz),
        }
    }
}

impl FromIterator<Point3> for Aabb {
    /// Tight box over an arbitrary point set.
    fn from_iter<I: IntoIterator<Item = Point3>>(pts: I) -> Self {
        let mut bb = Aabb::empty();
        for p in pts {
            bb.expand(&p);
        }
        bb
    }
}
