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

use derive_more::Display;
use derive_more::From;

pub mod distance;

pub use distance::Distance;

pub type Id = u32;

/// Code of a city. Codes are handed out sequentially starting at 0 and double as index into
/// the dense per-city arrays of the shortest path engine.
#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityCode(pub Id);

impl CityCode {
    pub fn idx(&self) -> usize {
        self.0 as usize
    }

    pub fn from_idx(idx: usize) -> CityCode {
        CityCode(idx as Id)
    }
}

pub type Weight = f32;
pub type Battery = u8;
pub type Cost = u32;
pub type VehicleCount = u32;
pub type PathCount = u64;
