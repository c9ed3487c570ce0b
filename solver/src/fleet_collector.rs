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

//! Greedy collection tour of a truck that picks up scooters with a low battery.


use std::fmt;
use std::sync::Arc;

use model::base_types::{CityCode, VehicleCount, Weight};
use model::config::{Config, ConfigCollector};
use model::network::Network;
use model::vehicles::{Vehicle, Vehicles};
use tracing::{debug, info};

use crate::error::SolverError;
use crate::visited::Visited;

#[derive(Debug, Clone, PartialEq)]
pub enum CollectorEvent {
    Collected {
        run: u32,
        city: CityCode,
        registration: String,
    },
    Moved {
        run: u32,
        from: CityCode,
        to: CityCode,
        distance: Weight,
    },
    /// Truck was full: back to the start, where the last loaded vehicle is recharged and
    /// unloaded; all cities count as unvisited again.
    ReturnedToStart { run: u32, recharged: String },
}

impl fmt::Display for CollectorEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CollectorEvent::Collected {
                run,
                city,
                registration,
            } => write!(f, "run {}: collected {} at {}", run, registration, city),
            CollectorEvent::Moved {
                run,
                from,
                to,
                distance,
            } => write!(f, "run {}: {} -> {} ({})", run, from, to, distance),
            CollectorEvent::ReturnedToStart { run, recharged } => {
                write!(f, "run {}: back at start, recharged {}", run, recharged)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    collected: Vec<String>, // most recent first once the walk is over
    events: Vec<CollectorEvent>,
    runs: u32,
    travelled: Weight,
}

impl Collection {
    /// registrations of all collected vehicles, most recently collected first. A vehicle
    /// appears once per pickup.
    pub fn collected(&self) -> &[String] {
        &self.collected
    }

    pub fn events(&self) -> &[CollectorEvent] {
        &self.events
    }

    /// number of runs started, including the last (possibly partial) one.
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// distance driven between cities; the returns to the start are not counted.
    pub fn travelled(&self) -> Weight {
        self.travelled
    }

    pub fn recharged(&self) -> impl Iterator<Item = &str> + '_ {
        self.events.iter().filter_map(|event| match event {
            CollectorEvent::ReturnedToStart { recharged, .. } => Some(recharged.as_str()),
            _ => None,
        })
    }
}

pub struct FleetCollector {
    network: Arc<Network>,
    config: Arc<Config>,
}

impl FleetCollector {
    pub fn initialize(network: Arc<Network>, config: Arc<Config>) -> FleetCollector {
        FleetCollector { network, config }
    }

    /// Collects with the capacity of the config.
    pub fn collect(&self, vehicles: &mut Vehicles) -> Result<Collection, SolverError> {
        self.collect_with_capacity(vehicles, self.config.collector.capacity)
    }

    /// Nearest-neighbor walk from the start city.
    ///
    /// In every not yet visited city all eligible vehicles located there are loaded (in list
    /// order) until the truck holds `capacity` vehicles. A full truck returns to the start:
    /// the last loaded vehicle is recharged and placed at the start city, the load is emptied
    /// and every city becomes unvisited again. Otherwise the truck takes the shortest road to
    /// an unvisited city (first such road on ties). The walk ends when no such road exists.
    ///
    /// Vehicles that were loaded but not recharged stay where they are and are loaded again
    /// in later runs. Every return must make one vehicle ineligible, so a recharge level
    /// below the battery threshold is rejected.
    pub fn collect_with_capacity(
        &self,
        vehicles: &mut Vehicles,
        capacity: VehicleCount,
    ) -> Result<Collection, SolverError> {
        if capacity == 0 {
            return Err(SolverError::ZeroCapacity);
        }
        let rules = &self.config.collector;
        if rules.recharge_level < rules.battery_threshold {
            return Err(SolverError::RechargeBelowThreshold {
                recharge_level: rules.recharge_level,
                battery_threshold: rules.battery_threshold,
            });
        }
        let start = self.start_city()?;
        let start_name = self.city_name(start)?.to_string();

        let mut collection = Collection {
            runs: 1,
            ..Default::default()
        };
        let mut visited = Visited::default();
        let mut load: VehicleCount = 0;
        let mut current = start;

        loop {
            if visited.visit(current) {
                let city_name = self.city_name(current)?;
                for vehicle in vehicles.iter() {
                    if load == capacity {
                        break;
                    }
                    if is_eligible(vehicle, city_name, rules) {
                        load += 1;
                        collection
                            .collected
                            .push(vehicle.registration().to_string());
                        collection.events.push(CollectorEvent::Collected {
                            run: collection.runs,
                            city: current,
                            registration: vehicle.registration().to_string(),
                        });
                        debug!(run = collection.runs, %current, vehicle = %vehicle, "collected");
                    }
                }
            }

            if load == capacity {
                // the most recently loaded vehicle gets recharged at the start
                let recharged = collection.collected.last().cloned().unwrap_or_default();
                if let Some(vehicle) = vehicles.get_mut(&recharged) {
                    vehicle.recharge(rules.recharge_level);
                    vehicle.relocate(&start_name);
                }
                collection.events.push(CollectorEvent::ReturnedToStart {
                    run: collection.runs,
                    recharged,
                });
                load = 0;
                collection.runs += 1;
                current = start;
                visited.reset();
                continue;
            }

            let nearest = self
                .network
                .edges_of(current)
                .filter(|edge| !visited.is_visited(edge.target()))
                .fold(None, |best: Option<(CityCode, Weight)>, edge| match best {
                    Some((_, weight)) if weight <= edge.weight() => best,
                    _ => Some((edge.target(), edge.weight())),
                });
            match nearest {
                Some((next, distance)) => {
                    collection.events.push(CollectorEvent::Moved {
                        run: collection.runs,
                        from: current,
                        to: next,
                        distance,
                    });
                    collection.travelled += distance;
                    current = next;
                }
                None => break,
            }
        }
        collection.collected.reverse();

        info!(
            runs = collection.runs,
            collected = collection.collected.len(),
            travelled = collection.travelled,
            "collection tour finished"
        );
        Ok(collection)
    }

    fn start_city(&self) -> Result<CityCode, SolverError> {
        match &self.config.collector.start_city {
            Some(name) => self
                .network
                .code_of(name)
                .ok_or_else(|| SolverError::UnknownCity(name.clone())),
            None => self.network.codes().next().ok_or(SolverError::EmptyNetwork),
        }
    }

    fn city_name(&self, code: CityCode) -> Result<&str, SolverError> {
        self.network
            .city(code)
            .map(|city| city.name())
            .ok_or(SolverError::UnknownCode(code))
    }
}

fn is_eligible(vehicle: &Vehicle, city_name: &str, rules: &ConfigCollector) -> bool {
    vehicle.vehicle_type() == rules.eligible_vehicle_type
        && vehicle.battery() < rules.battery_threshold
        && !vehicle.in_use()
        && vehicle.location() == city_name
}
