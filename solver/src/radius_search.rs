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


use model::base_types::{CityCode, Weight};
use model::network::Network;
use model::vehicles::{Vehicle, Vehicles};
use tracing::debug;

use crate::error::SolverError;
use crate::visited::Visited;

/// A vehicle found by a radius search, with the budget left on arrival at its city.
#[derive(Debug, Clone, PartialEq)]
pub struct Sighting {
    pub city: CityCode,
    pub registration: String,
    pub remaining_budget: Weight,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadiusReport {
    reached: Vec<(CityCode, Weight)>,
    sightings: Vec<Sighting>,
}

impl RadiusReport {
    /// cities in the order they were entered, with the remaining budget on arrival.
    pub fn reached(&self) -> &[(CityCode, Weight)] {
        &self.reached
    }

    pub fn reached_cities(&self) -> impl Iterator<Item = CityCode> + '_ {
        self.reached.iter().map(|(city, _)| *city)
    }

    pub fn sightings(&self) -> &[Sighting] {
        &self.sightings
    }

    pub fn registrations(&self) -> impl Iterator<Item = &str> + '_ {
        self.sightings.iter().map(|s| s.registration.as_str())
    }
}

/// Reports every vehicle of `vehicle_type` located in a city reachable from `start` with at
/// most `radius` of travel.
///
/// A city is entered once, through the first route the search finds to it; a later route
/// that would arrive with more budget left is not taken.
pub fn find_vehicles_in_radius(
    network: &Network,
    vehicles: &Vehicles,
    start: CityCode,
    radius: Weight,
    vehicle_type: &str,
) -> Result<RadiusReport, SolverError> {
    if radius.is_nan() || radius < 0.0 {
        return Err(SolverError::NegativeRadius(radius));
    }
    if vehicle_type.is_empty() {
        return Err(SolverError::EmptyArgument("vehicle type"));
    }
    if !network.contains(start) {
        return Err(SolverError::UnknownCode(start));
    }

    let mut visited = Visited::default();
    let mut report = RadiusReport::default();
    visit_within(
        network,
        vehicles,
        start,
        radius,
        vehicle_type,
        &mut visited,
        &mut report,
    )?;
    debug!(
        %start,
        radius,
        cities = report.reached.len(),
        vehicles = report.sightings.len(),
        "radius search done"
    );
    Ok(report)
}

fn visit_within(
    network: &Network,
    vehicles: &Vehicles,
    current: CityCode,
    remaining_budget: Weight,
    vehicle_type: &str,
    visited: &mut Visited,
    report: &mut RadiusReport,
) -> Result<(), SolverError> {
    visited.visit(current);
    let city = network
        .city(current)
        .ok_or(SolverError::UnknownCode(current))?;
    report.reached.push((current, remaining_budget));
    for vehicle in report_vehicles_at(vehicles, city.name(), vehicle_type)? {
        report.sightings.push(Sighting {
            city: current,
            registration: vehicle.registration().to_string(),
            remaining_budget,
        });
    }

    for edge in city.adjacency().iter() {
        if edge.weight() <= remaining_budget && !visited.is_visited(edge.target()) {
            visit_within(
                network,
                vehicles,
                edge.target(),
                remaining_budget - edge.weight(),
                vehicle_type,
                visited,
                report,
            )?;
        }
    }
    Ok(())
}

/// All vehicles at `location` of type `vehicle_type` (exact, case-sensitive match), in list
/// order.
pub fn report_vehicles_at<'a>(
    vehicles: &'a Vehicles,
    location: &str,
    vehicle_type: &str,
) -> Result<Vec<&'a Vehicle>, SolverError> {
    if location.is_empty() {
        return Err(SolverError::EmptyArgument("location"));
    }
    if vehicle_type.is_empty() {
        return Err(SolverError::EmptyArgument("vehicle type"));
    }
    Ok(vehicles
        .iter()
        .filter(|v| v.location() == location && v.vehicle_type() == vehicle_type)
        .collect())
}

pub fn find_vehicles_in_radius_by_name(
    network: &Network,
    vehicles: &Vehicles,
    start: &str,
    radius: Weight,
    vehicle_type: &str,
) -> Result<RadiusReport, SolverError> {
    let code = network
        .code_of(start)
        .ok_or_else(|| SolverError::UnknownCity(start.to_string()))?;
    find_vehicles_in_radius(network, vehicles, code, radius, vehicle_type)
}
