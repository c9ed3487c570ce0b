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

//! Path counting and depth-first reachability.

#[cfg(test)]
mod tests;

use model::base_types::{CityCode, PathCount};
use model::network::Network;

use crate::error::SolverError;
use crate::visited::Visited;

/// Counts the paths from `src` to `dst` by following every road out of every city.
///
/// On acyclic input this enumerates every route, `count_paths(a, a) == 1`. Re-entering a city
/// that is already on the current path means the count is unbounded, which is reported as
/// `CycleDetected`; `count_simple_paths` gives a finite answer for such networks.
pub fn count_paths(
    network: &Network,
    src: CityCode,
    dst: CityCode,
) -> Result<PathCount, SolverError> {
    check_endpoints(network, src, dst)?;
    let mut on_path = Visited::default();
    count_paths_rec(network, src, dst, 0, &mut on_path)
}

fn count_paths_rec(
    network: &Network,
    current: CityCode,
    dst: CityCode,
    path_count: PathCount,
    on_path: &mut Visited,
) -> Result<PathCount, SolverError> {
    if current == dst {
        return Ok(path_count + 1);
    }
    if !on_path.visit(current) {
        return Err(SolverError::CycleDetected(current));
    }
    let mut path_count = path_count;
    for edge in network.edges_of(current) {
        path_count = count_paths_rec(network, edge.target(), dst, path_count, on_path)?;
    }
    on_path.leave(current);
    Ok(path_count)
}

pub fn count_paths_by_name(
    network: &Network,
    src: &str,
    dst: &str,
) -> Result<PathCount, SolverError> {
    let (src, dst) = resolve_names(network, src, dst)?;
    count_paths(network, src, dst)
}

/// Counts the paths from `src` to `dst` that visit no city twice. Equal to `count_paths`
/// on acyclic networks.
pub fn count_simple_paths(
    network: &Network,
    src: CityCode,
    dst: CityCode,
) -> Result<PathCount, SolverError> {
    check_endpoints(network, src, dst)?;
    let mut on_path = Visited::default();
    Ok(count_simple_paths_rec(network, src, dst, &mut on_path))
}

pub fn count_simple_paths_by_name(
    network: &Network,
    src: &str,
    dst: &str,
) -> Result<PathCount, SolverError> {
    let (src, dst) = resolve_names(network, src, dst)?;
    count_simple_paths(network, src, dst)
}

fn count_simple_paths_rec(
    network: &Network,
    current: CityCode,
    dst: CityCode,
    on_path: &mut Visited,
) -> PathCount {
    if current == dst {
        return 1;
    }
    on_path.visit(current);
    let mut count = 0;
    for edge in network.edges_of(current) {
        if !on_path.is_visited(edge.target()) {
            count += count_simple_paths_rec(network, edge.target(), dst, on_path);
        }
    }
    on_path.leave(current);
    count
}

/// Depth-first search from `origin`; true if `dest` is reachable.
///
/// Every road of a city is tried before giving up on it, and every city is entered at most
/// once, so the search terminates on cyclic networks.
pub fn depth_first_search(
    network: &Network,
    origin: CityCode,
    dest: CityCode,
) -> Result<bool, SolverError> {
    check_endpoints(network, origin, dest)?;
    let mut visited = Visited::default();
    Ok(depth_first_search_rec(network, origin, dest, &mut visited))
}

fn depth_first_search_rec(
    network: &Network,
    current: CityCode,
    dest: CityCode,
    visited: &mut Visited,
) -> bool {
    if current == dest {
        return true;
    }
    visited.visit(current);
    for edge in network.edges_of(current) {
        if !visited.is_visited(edge.target())
            && depth_first_search_rec(network, edge.target(), dest, visited)
        {
            return true;
        }
    }
    false
}

pub fn is_reachable_by_name(network: &Network, src: &str, dst: &str) -> Result<bool, SolverError> {
    let (src, dst) = resolve_names(network, src, dst)?;
    depth_first_search(network, src, dst)
}

fn check_endpoints(network: &Network, src: CityCode, dst: CityCode) -> Result<(), SolverError> {
    if network.is_empty() {
        return Err(SolverError::EmptyNetwork);
    }
    for code in [src, dst] {
        if !network.contains(code) {
            return Err(SolverError::UnknownCode(code));
        }
    }
    Ok(())
}

fn resolve_names(
    network: &Network,
    src: &str,
    dst: &str,
) -> Result<(CityCode, CityCode), SolverError> {
    let resolve = |name: &str| {
        if name.is_empty() {
            return Err(SolverError::EmptyArgument("city name"));
        }
        network
            .code_of(name)
            .ok_or_else(|| SolverError::UnknownCity(name.to_string()))
    };
    Ok((resolve(src)?, resolve(dst)?))
}
