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

use model::base_types::CityCode;
use std::collections::HashSet;

/// Per-traversal record of the cities already entered. Every traversal owns a fresh one, so
/// independent queries never see each other's marks.
#[derive(Debug, Clone, Default)]
pub struct Visited {
    cities: HashSet<CityCode>,
}

impl Visited {
    /// returns true only the first time a city is visited.
    pub fn visit(&mut self, city: CityCode) -> bool {
        self.cities.insert(city)
    }

    pub fn is_visited(&self, city: CityCode) -> bool {
        self.cities.contains(&city)
    }

    pub fn leave(&mut self, city: CityCode) {
        self.cities.remove(&city);
    }

    pub fn reset(&mut self) {
        self.cities.clear();
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Visited;
    use model::base_types::CityCode;

    #[test]
    fn visit_returns_true_only_first_time() {
        let mut visited = Visited::default();

        assert!(visited.visit(CityCode(3)));
        assert!(!visited.visit(CityCode(3)));
        assert!(visited.is_visited(CityCode(3)));
        assert!(!visited.is_visited(CityCode(4)));

        visited.leave(CityCode(3));
        assert!(visited.visit(CityCode(3)));

        visited.reset();
        assert!(visited.is_empty());
    }
}
