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

use std::path::PathBuf;

use crate::base_types::{Battery, VehicleCount};

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub collector: ConfigCollector,
    pub persistence: ConfigPersistence,
}

/// Parameters of the collection truck.
#[derive(Debug, Clone)]
pub struct ConfigCollector {
    pub start_city: Option<String>, // None: first city in name order
    pub capacity: VehicleCount,
    pub eligible_vehicle_type: String,
    pub battery_threshold: Battery, // vehicles strictly below are collected
    pub recharge_level: Battery,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigPersistence {
    pub graph_file: Option<PathBuf>,
}

impl Default for ConfigCollector {
    fn default() -> Self {
        ConfigCollector {
            start_city: None,
            capacity: 3,
            eligible_vehicle_type: String::from("trotinete"),
            battery_threshold: 50,
            recharge_level: 100,
        }
    }
}
