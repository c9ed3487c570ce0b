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

use std::fmt;

use super::adjacency::Adjacency;
use crate::base_types::CityCode;

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    code: CityCode,
    name: String,
    adjacency: Adjacency,
}

impl City {
    /// A city without any outgoing road.
    pub fn new(code: CityCode, name: &str) -> City {
        City {
            code,
            name: String::from(name),
            adjacency: Adjacency::default(),
        }
    }

    pub fn code(&self) -> CityCode {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    pub(crate) fn adjacency_mut(&mut self) -> &mut Adjacency {
        &mut self.adjacency
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "V: {} - {}", self.code, self.name)?;
        write!(f, "{}", self.adjacency)
    }
}
