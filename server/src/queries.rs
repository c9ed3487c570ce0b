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

use model::base_types::{VehicleCount, Weight};
use serde::{Deserialize, Serialize};

/// The `queries` section of an instance document. Every part is optional.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Queries {
    pub shortest_paths_from: Option<String>,
    #[serde(default)]
    pub path_counts: Vec<CityPair>,
    #[serde(default)]
    pub reachability: Vec<CityPair>,
    #[serde(default)]
    pub radius_searches: Vec<RadiusQuery>,
    pub collect: Option<CollectQuery>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CityPair {
    pub from: String,
    pub to: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RadiusQuery {
    pub from: String,
    pub radius: Weight,
    pub vehicle_type: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CollectQuery {
    pub capacity: Option<VehicleCount>, // None: capacity of the parameters
}
