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

use std::ops::{Add, Index, IndexMut, Sub};

use crate::geometry::{point_2::Point2, vector_3::Vector3};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn as_vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn vector_to(&self, other: &Point3) -> Vector3 {
        Vector3::new(other.x - self.x, other.y - self.y, other.z - self.z)
    }

    pub fn distance_squared_to(&self, other: &Point3) -> f64 {
        self.vector_to(other).norm_squared()
    }

    pub fn distance_to(&self, other: &Point3) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    pub fn midpoint(&self, other: &Point3) -> Point3 {
        self.lerp(other, 0.5)
    }

    /// `(1 - t) * self + t * other`.
    pub fn lerp(&self, other: &Point3, t: f64) -> Point3 {
        Point3 {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
            z: self.z + t * (other.z - self.z),
        }
    }

    /// Arithmetic mean of `pts`; `None` when empty.
    pub fn centroid<I>(pts: I) -> Option<Point3>
    where
        I: IntoIterator<Item = Point3>,
    {
        let mut sum = Vector3::zero();
        let mut n = 0usize;
        for p in pts {
            sum = sum + p.as_vector();
            n += 1;
        }
        if n == 0 {
            return None;
        }
        let inv = 1.0 / n as f64;
        Some(Point3::new(sum.x * inv, sum.y * inv, sum.z * inv))
    }

    /// Drop coordinate `axis` and keep the other two in cyclic order, so a
    /// counter-clockwise loop seen from `+axis` stays counter-clockwise.
    pub fn drop_axis(&self, axis: usize) -> Point2 {
        match axis {
            0 => Point2::new(self.y, self.z),
            1 => Point2::new(self.z, self.x),
            _ => Point2::new(self.x, self.y),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Index<usize> for Point3 {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Point3 index out of range: {i}"),
        }
    }
}

impl IndexMut<usize> for Point3 {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Point3 index out of range: {i}"),
        }
    }
}

impl<'a, 'b> Sub<&'b Point3> for &'a Point3 {
    type Output = Vector3;
    fn sub(self, rhs: &'b Point3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Vector3;
    fn sub(self, rhs: Point3) -> Vector3 {
        &self - &rhs
    }
}

impl<'a, 'b> Add<&'b Vector3> for &'a Point3 {
    type Output = Point3;
    fn add(self, rhs: &'b Vector3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;
    fn add(self, rhs: Vector3) -> Point3 {
        &self + &rhs
    }
}
