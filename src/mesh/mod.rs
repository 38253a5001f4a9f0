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

pub mod basic_types;
pub mod canonical_edge;
pub mod conformize;
pub mod derived;
pub mod imesh;
pub mod locate;
pub mod smesh;
pub mod spatial_hash;
pub mod topology;

use crate::{config::SmeshConfig, geometry::Point3};

/// A mesh a surface mesh can be carved from: indexed points plus polygonal
/// faces over them, addressed by the source's own (global) ids.
pub trait SurfaceSource {
    fn num_points(&self) -> usize;
    fn point_at(&self, gp: usize) -> Option<Point3>;
    fn face_points(&self, gf: usize) -> Option<&[usize]>;
    fn config(&self) -> &SmeshConfig;
}
