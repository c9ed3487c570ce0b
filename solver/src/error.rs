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

use model::base_types::{Battery, CityCode, Weight};
use model::error::NetworkError;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SolverError {
    #[error("the network is empty")]
    EmptyNetwork,
    #[error("unknown city: {0}")]
    UnknownCity(String),
    #[error("unknown city code: {0}")]
    UnknownCode(CityCode),
    #[error("{0} must not be empty")]
    EmptyArgument(&'static str),
    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(Weight),
    #[error("capacity must be at least 1")]
    ZeroCapacity,
    #[error("recharge level {recharge_level} is below the battery threshold {battery_threshold}")]
    RechargeBelowThreshold {
        recharge_level: Battery,
        battery_threshold: Battery,
    },
    #[error("city {0} lies on a cycle reachable from the source; use simple path counting")]
    CycleDetected(CityCode),
    #[error("city code {code} does not fit into a network of {size} cities")]
    CodeOutOfRange { code: CityCode, size: usize },
    #[error(transparent)]
    Network(#[from] NetworkError),
}
