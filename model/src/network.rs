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

pub mod adjacency;
pub mod city;

#[cfg(test)]
mod tests;

use adjacency::{Adjacency, Edge};
use city::City;
use tracing::debug;

use crate::base_types::{CityCode, Id, Weight};
use crate::error::NetworkError;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// The city-route graph: all cities with their outgoing roads.
///
/// Cities are stored by code; `codes_sorted_by_name` keeps them in ascending name order, which
/// is the order of every iteration over the network.
/// Codes are unique and handed out monotonically (`next_code` is always larger than every
/// code in use), names are unique.
#[derive(Debug, Clone, Default)]
pub struct Network {
    cities: HashMap<CityCode, City>,
    codes_sorted_by_name: Vec<CityCode>,
    next_code: Id,
}

// static functions
impl Network {
    pub fn new() -> Network {
        Network::default()
    }
}

// methods
impl Network {
    /// return the number of cities in the network.
    pub fn size(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.cities.values().map(|c| c.adjacency().len()).sum()
    }

    /// cities in ascending name order.
    pub fn cities(&self) -> impl Iterator<Item = &City> + '_ {
        self.codes_sorted_by_name
            .iter()
            .map(move |code| &self.cities[code])
    }

    /// codes in ascending name order of their cities.
    pub fn codes(&self) -> impl Iterator<Item = CityCode> + '_ {
        self.codes_sorted_by_name.iter().copied()
    }

    pub fn city(&self, code: CityCode) -> Option<&City> {
        self.cities.get(&code)
    }

    pub fn contains(&self, code: CityCode) -> bool {
        self.cities.contains_key(&code)
    }

    /// Scans the cities in name order and stops as soon as a larger name is seen.
    pub fn find_by_name(&self, name: &str) -> Option<&City> {
        for city in self.cities() {
            match city.name().cmp(name) {
                Ordering::Less => continue,
                Ordering::Equal => return Some(city),
                Ordering::Greater => return None,
            }
        }
        None
    }

    pub fn code_of(&self, name: &str) -> Option<CityCode> {
        self.find_by_name(name).map(|city| city.code())
    }

    pub fn adjacency(&self, code: CityCode) -> Option<&Adjacency> {
        self.city(code).map(|city| city.adjacency())
    }

    /// outgoing edges of the city; empty for unknown codes.
    pub fn edges_of(&self, code: CityCode) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency(code).into_iter().flat_map(|adj| adj.iter())
    }

    pub fn next_code(&self) -> CityCode {
        CityCode(self.next_code)
    }

    /// Creates a city with the next free code and inserts it.
    pub fn add_city(&mut self, name: &str) -> Result<CityCode, NetworkError> {
        let code = self.next_code();
        self.insert_city(City::new(code, name))?;
        Ok(code)
    }

    /// Inserts the city at its slot in name order.
    pub fn insert_city(&mut self, city: City) -> Result<(), NetworkError> {
        if city.name().is_empty() {
            return Err(NetworkError::EmptyName);
        }
        if self.cities.contains_key(&city.code()) {
            return Err(NetworkError::DuplicateCode(city.code()));
        }
        if self.find_by_name(city.name()).is_some() {
            return Err(NetworkError::DuplicateName(city.name().to_string()));
        }

        let slot = self
            .codes_sorted_by_name
            .partition_point(|code| self.cities[code].name() < city.name());
        self.codes_sorted_by_name.insert(slot, city.code());
        self.next_code = self.next_code.max(city.code().0 + 1);
        self.cities.insert(city.code(), city);
        Ok(())
    }

    /// Inserts a road between two cities given by name.
    /// Returns false and leaves the network unchanged if an endpoint is missing or the road
    /// already exists.
    pub fn connect_by_name(&mut self, origin: &str, destination: &str, weight: Weight) -> bool {
        match (self.code_of(origin), self.code_of(destination)) {
            (Some(o), Some(d)) => self.connect(o, d, weight),
            _ => {
                debug!(origin, destination, "road not inserted: unknown city");
                false
            }
        }
    }

    /// Inserts a road between two cities given by code.
    /// Returns false and leaves the network unchanged if an endpoint is missing or the road
    /// already exists.
    pub fn connect(&mut self, origin: CityCode, destination: CityCode, weight: Weight) -> bool {
        if !self.cities.contains_key(&destination) {
            debug!(%origin, %destination, "road not inserted: unknown destination");
            return false;
        }
        match self.cities.get_mut(&origin) {
            Some(city) => {
                let inserted = city.adjacency_mut().insert(Edge::new(destination, weight));
                if !inserted {
                    debug!(%origin, %destination, "road not inserted: already present");
                }
                inserted
            }
            None => {
                debug!(%origin, %destination, "road not inserted: unknown origin");
                false
            }
        }
    }

    /// Removes every city together with its roads; codes start at 0 again.
    pub fn clear(&mut self) {
        self.cities.clear();
        self.codes_sorted_by_name.clear();
        self.next_code = 0;
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for city in self.cities() {
            write!(f, "{}", city)?;
        }
        Ok(())
    }
}
