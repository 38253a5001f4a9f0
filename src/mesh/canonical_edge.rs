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

/// Undirected edge key: `(p, q)` and `(q, p)` hash and compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UEdge {
    pub a: usize,
    pub b: usize,
}

impl UEdge {
    pub fn new(p: usize, q: usize) -> Self {
        if p < q { Self { a: p, b: q } } else { Self { a: q, b: p } }
    }
}

/// Edge as first met while walking a face, in that face's winding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub p: usize,
    pub q: usize,
}

impl Edge {
    pub fn new(p: usize, q: usize) -> Self {
        Self { p, q }
    }

    pub fn key(&self) -> UEdge {
        UEdge::new(self.p, self.q)
    }

    pub fn has_point(&self, pid: usize) -> bool {
        self.p == pid || self.q == pid
    }

    /// Endpoint across from `pid`, if `pid` is an endpoint.
    pub fn other(&self, pid: usize) -> Option<usize> {
        if self.p == pid {
            Some(self.q)
        } else if self.q == pid {
            Some(self.p)
        } else {
            None
        }
    }
}

impl From<Edge> for UEdge {
    fn from(e: Edge) -> UEdge {
        e.key()
    }
}
