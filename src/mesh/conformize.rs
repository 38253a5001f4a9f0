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

use tracing::debug;

use crate::{
    error::{SmeshError, SmeshResult},
    mesh::{canonical_edge::UEdge, smesh::Smesh, topology::EdgeTables},
};

enum Step {
    Split(usize, usize),
    Emit(usize),
}

impl Smesh {
    /// Points registered along the directed edge `p -> q`, in order from `p`
    /// to `q`, endpoints excluded.
    ///
    /// The edge-center map describes a binary subdivision tree; this is its
    /// in-order walk, done with an explicit stack.
    pub fn get_edge_centers(&self, p: usize, q: usize) -> SmeshResult<Vec<usize>> {
        let mut chain = Vec::new();
        if self.ecenter.is_empty() {
            return Ok(chain);
        }

        let mut stack = vec![Step::Split(p, q)];
        let mut splits = 0usize;

        while let Some(step) = stack.pop() {
            match step {
                Step::Emit(c) => chain.push(c),
                Step::Split(a, b) => {
                    let Some(&c) = self.ecenter.get(&UEdge::new(a, b)) else {
                        continue;
                    };
                    // a terminating subdivision uses every point at most once
                    splits += 1;
                    if splits > self.np() {
                        return Err(SmeshError::EdgeCenterCycle { p, q });
                    }
                    stack.push(Step::Split(c, b));
                    stack.push(Step::Emit(c));
                    stack.push(Step::Split(a, c));
                }
            }
        }

        Ok(chain)
    }

    /// Splice the registered edge-center chains into every face and rebuild
    /// the adjacency.
    ///
    /// Points referenced by `ecenter` must already exist. On error the mesh
    /// is left untouched.
    pub fn conformize(&mut self) -> SmeshResult<()> {
        if let Some(&c) = self.ecenter.values().find(|&&c| c >= self.np()) {
            return Err(SmeshError::UnknownPoint { point: c });
        }

        let mut new_fc = Vec::with_capacity(self.nf());
        let mut spliced = 0usize;

        for pn in &self.fc {
            let n = pn.len();
            let mut new_pn = Vec::with_capacity(n);
            for i in 0..n {
                let p = pn[i];
                let q = pn[(i + 1) % n];
                new_pn.push(p);
                let chain = self.get_edge_centers(p, q)?;
                spliced += chain.len();
                new_pn.extend(chain);
            }
            new_fc.push(new_pn);
        }

        let tables = EdgeTables::build(&new_fc, self.np(), self.config.check_euler)?;

        self.clear_conformal_data();
        self.fc = new_fc;
        self.install_edges(tables);
        self.make_point_faces();
        self.make_point_edges();

        debug!(spliced, nf = self.nf(), ne = self.ne(), "conformized surface mesh");
        Ok(())
    }
}
