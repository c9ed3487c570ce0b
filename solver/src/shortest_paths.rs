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

//! Single-source shortest paths (Dijkstra) over a cost matrix built from the roads.


use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use model::base_types::{CityCode, Distance};
use model::network::Network;
use rayon::prelude::*;
use tracing::debug;

use crate::error::SolverError;

/// Distances and predecessors for every city, indexed by city code.
/// Unreachable cities have distance `Infinity`; their predecessor entry is meaningless.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: CityCode,
    distances: Vec<Distance>,
    predecessors: Vec<CityCode>,
}

impl ShortestPaths {
    pub fn source(&self) -> CityCode {
        self.source
    }

    pub fn size(&self) -> usize {
        self.distances.len()
    }

    pub fn distance_to(&self, city: CityCode) -> Option<Distance> {
        self.distances.get(city.idx()).copied()
    }

    pub fn predecessor_of(&self, city: CityCode) -> Option<CityCode> {
        match self.distance_to(city) {
            Some(d) if d.is_finite() && city != self.source => {
                Some(self.predecessors[city.idx()])
            }
            _ => None,
        }
    }

    pub fn is_reachable(&self, city: CityCode) -> bool {
        self.distance_to(city).is_some_and(|d| d.is_finite())
    }

    /// The cities on a shortest path, source first. None if `city` cannot be reached.
    pub fn path_to(&self, city: CityCode) -> Option<Vec<CityCode>> {
        if !self.is_reachable(city) {
            return None;
        }
        let mut path = vec![city];
        let mut current = city;
        while current != self.source {
            current = self.predecessors[current.idx()];
            path.push(current);
            if path.len() > self.size() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

impl fmt::Display for ShortestPaths {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for idx in 0..self.size() {
            let city = CityCode::from_idx(idx);
            if city == self.source {
                continue;
            }
            match self.path_to(city) {
                Some(path) => {
                    writeln!(f, "Distance to {} = {}", city, self.distances[idx])?;
                    writeln!(f, "Path = {}", path.iter().rev().join(" <- "))?;
                }
                None => writeln!(f, "Distance to {} = unreachable", city)?,
            }
        }
        Ok(())
    }
}

/// Dijkstra from `source`.
///
/// All per-city storage is sized to the number of cities, so city codes must be dense
/// (`0..network.size()`). Among equally distant candidates the one with the smallest code is
/// settled first; `n - 2` settle rounds are run, the last remaining city needs none.
pub fn shortest_paths(network: &Network, source: CityCode) -> Result<ShortestPaths, SolverError> {
    let n = network.size();
    if n == 0 {
        return Err(SolverError::EmptyNetwork);
    }
    if !network.contains(source) {
        return Err(SolverError::UnknownCode(source));
    }

    let cost = cost_matrix(network)?;
    let s = source.idx();

    let mut distances = cost[s].clone();
    let mut predecessors = vec![source; n];
    let mut settled = vec![false; n];
    distances[s] = Distance::ZERO;
    settled[s] = true;

    for _ in 1..n.saturating_sub(1) {
        let next = (0..n)
            .filter(|&i| !settled[i] && distances[i].is_finite())
            .min_by(|&a, &b| {
                distances[a]
                    .partial_cmp(&distances[b])
                    .unwrap_or(Ordering::Equal)
            });
        let Some(next) = next else {
            break; // everything left is unreachable
        };
        settled[next] = true;

        for i in 0..n {
            if settled[i] {
                continue;
            }
            let candidate = distances[next] + cost[next][i];
            if candidate < distances[i] {
                distances[i] = candidate;
                predecessors[i] = CityCode::from_idx(next);
            }
        }
    }
    debug!(%source, cities = n, "shortest paths computed");

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}

pub fn shortest_paths_by_name(network: &Network, source: &str) -> Result<ShortestPaths, SolverError> {
    let code = network
        .code_of(source)
        .ok_or_else(|| SolverError::UnknownCity(source.to_string()))?;
    shortest_paths(network, code)
}

/// Shortest paths from every city, ordered by source code. The sources are processed in
/// parallel.
pub fn distance_matrix(network: &Network) -> Result<Vec<ShortestPaths>, SolverError> {
    (0..network.size())
        .into_par_iter()
        .map(|idx| shortest_paths(network, CityCode::from_idx(idx)))
        .collect()
}

fn cost_matrix(network: &Network) -> Result<Vec<Vec<Distance>>, SolverError> {
    let n = network.size();
    let index = |code: CityCode| {
        if code.idx() < n {
            Ok(code.idx())
        } else {
            Err(SolverError::CodeOutOfRange { code, size: n })
        }
    };

    let mut cost = vec![vec![Distance::Infinity; n]; n];
    for city in network.cities() {
        let origin = index(city.code())?;
        for edge in city.adjacency().iter() {
            cost[origin][index(edge.target())?] = Distance::from_weight(edge.weight());
        }
    }
    Ok(cost)
}
