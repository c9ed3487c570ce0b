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


use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use crate::base_types::{Battery, CityCode, Cost, Id, VehicleCount, Weight};
use crate::config::{Config, ConfigCollector, ConfigPersistence};
use crate::error::NetworkError;
use crate::network::city::City;
use crate::network::Network;
use crate::vehicles::{Vehicle, Vehicles};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonCity {
    code: Option<Id>,
    name: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonRoad {
    origin: String,
    destination: String,
    distance: Weight,
    #[serde(default)]
    bidirectional: bool,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonVehicle {
    registration: String,
    vehicle_type: String,
    battery: Battery,
    #[serde(default)]
    cost: Cost,
    #[serde(default)]
    in_use: bool,
    location: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct JsonCollectorParameters {
    start_city: Option<String>,
    capacity: Option<VehicleCount>,
    eligible_vehicle_type: Option<String>,
    battery_threshold: Option<Battery>,
    recharge_level: Option<Battery>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct JsonPersistenceParameters {
    graph_file: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct JsonParameters {
    #[serde(default)]
    collector: JsonCollectorParameters,
    #[serde(default)]
    persistence: JsonPersistenceParameters,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInput {
    cities: Vec<JsonCity>,
    #[serde(default)]
    roads: Vec<JsonRoad>,
    #[serde(default)]
    vehicles: Vec<JsonVehicle>,
    #[serde(default)]
    parameters: JsonParameters,
}

/// Builds network, fleet and config from an instance document. Unknown top-level keys (for
/// example the queries of the drivers) are ignored.
pub fn load_fleet_instance_from_json(
    input_data: &serde_json::Value,
) -> Result<(Arc<Network>, Vehicles, Arc<Config>), NetworkError> {
    let json_input = JsonInput::deserialize(input_data)
        .map_err(|e| NetworkError::InvalidInstance(e.to_string()))?;
    let network = create_network(&json_input)?;
    let vehicles = create_vehicles(&json_input, &network);
    let config = create_config(&json_input);
    info!(
        cities = network.size(),
        roads = network.edge_count(),
        vehicles = vehicles.len(),
        "instance loaded"
    );
    Ok((Arc::new(network), vehicles, Arc::new(config)))
}

fn create_network(json_input: &JsonInput) -> Result<Network, NetworkError> {
    let mut network = Network::new();

    // cities without a code get the next free one, in input order
    for json_city in json_input.cities.iter() {
        let code = match json_city.code {
            Some(code) => CityCode(code),
            None => network.next_code(),
        };
        network.insert_city(City::new(code, &json_city.name))?;
    }

    for road in json_input.roads.iter() {
        if !network.connect_by_name(&road.origin, &road.destination, road.distance) {
            warn!(
                origin = road.origin.as_str(),
                destination = road.destination.as_str(),
                "road skipped (unknown city or duplicate)"
            );
        }
        if road.bidirectional
            && !network.connect_by_name(&road.destination, &road.origin, road.distance)
        {
            warn!(
                origin = road.destination.as_str(),
                destination = road.origin.as_str(),
                "reverse road skipped (unknown city or duplicate)"
            );
        }
    }
    Ok(network)
}

fn create_vehicles(json_input: &JsonInput, network: &Network) -> Vehicles {
    Vehicles::new(
        json_input
            .vehicles
            .iter()
            .map(|v| {
                if network.find_by_name(&v.location).is_none() {
                    warn!(
                        registration = v.registration.as_str(),
                        location = v.location.as_str(),
                        "vehicle located outside of the network"
                    );
                }
                Vehicle::new(
                    &v.registration,
                    &v.vehicle_type,
                    v.battery,
                    v.cost,
                    v.in_use,
                    &v.location,
                )
            })
            .collect(),
    )
}

fn create_config(json_input: &JsonInput) -> Config {
    let collector = &json_input.parameters.collector;
    let default = ConfigCollector::default();
    Config {
        collector: ConfigCollector {
            start_city: collector.start_city.clone(),
            capacity: collector.capacity.unwrap_or(default.capacity),
            eligible_vehicle_type: collector
                .eligible_vehicle_type
                .clone()
                .unwrap_or(default.eligible_vehicle_type),
            battery_threshold: collector
                .battery_threshold
                .unwrap_or(default.battery_threshold),
            recharge_level: collector.recharge_level.unwrap_or(default.recharge_level),
        },
        persistence: ConfigPersistence {
            graph_file: json_input
                .parameters
                .persistence
                .graph_file
                .as_ref()
                .map(PathBuf::from),
        },
    }
}
