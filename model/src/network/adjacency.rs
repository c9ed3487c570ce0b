// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::collections::VecDeque;
use std::fmt;

use crate::base_types::{CityCode, Weight};

/// A directed road from the owning city to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    target: CityCode,
    weight: Weight,
}

impl Edge {
    pub fn new(target: CityCode, weight: Weight) -> Edge {
        Edge { target, weight }
    }

    pub fn target(&self) -> CityCode {
        self.target
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// Outgoing edges of a single city. At most one edge per target; new edges are put in front,
/// so iteration yields the most recently inserted edge first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Adjacency {
    edges: VecDeque<Edge>,
}

impl Adjacency {
    pub fn contains(&self, target: CityCode) -> bool {
        self.edges.iter().any(|edge| edge.target == target)
    }

    /// Returns false (and leaves the list untouched) if an edge to the same target exists.
    pub fn insert(&mut self, edge: Edge) -> bool {
        if self.contains(edge.target) {
            return false;
        }
        self.edges.push_front(edge);
        true
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl fmt::Display for Adjacency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for edge in self.edges.iter() {
            writeln!(f, "\tAdj: {} - ({:.0})", edge.target, edge.weight)?;
        }
        Ok(())
    }
}
