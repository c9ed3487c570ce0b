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

use crate::base_types::{Battery, Cost};
use std::fmt;
use std::iter::Iterator;

/// The fleet in list order. The order matters: the radius search and the fleet collector
/// scan the vehicles front to back.
#[derive(Debug, Clone, Default)]
pub struct Vehicles {
    vehicles: Vec<Vehicle>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    registration: String,
    vehicle_type: String,
    battery: Battery, // 0 - 100
    cost: Cost,
    in_use: bool,
    location: String, // name of a city
}

/////////////////////////////////////////////////////////////////////
///////////////////////////// Vehicles //////////////////////////////
/////////////////////////////////////////////////////////////////////

impl Vehicles {
    pub fn new(vehicles: Vec<Vehicle>) -> Vehicles {
        Vehicles { vehicles }
    }

    pub fn push(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.vehicles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Vehicle> + '_ {
        self.vehicles.iter_mut()
    }

    pub fn get(&self, registration: &str) -> Option<&Vehicle> {
        self.vehicles
            .iter()
            .find(|v| v.registration == registration)
    }

    pub fn get_mut(&mut self, registration: &str) -> Option<&mut Vehicle> {
        self.vehicles
            .iter_mut()
            .find(|v| v.registration == registration)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

/////////////////////////////////////////////////////////////////////
//////////////////////////////// vehicle ///////////////////////////////
/////////////////////////////////////////////////////////////////////

// static functions
impl Vehicle {
    pub fn new(
        registration: &str,
        vehicle_type: &str,
        battery: Battery,
        cost: Cost,
        in_use: bool,
        location: &str,
    ) -> Vehicle {
        Vehicle {
            registration: String::from(registration),
            vehicle_type: String::from(vehicle_type),
            battery: battery.min(100),
            cost,
            in_use,
            location: String::from(location),
        }
    }
}

// methods
impl Vehicle {
    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    pub fn battery(&self) -> Battery {
        self.battery
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn in_use(&self) -> bool {
        self.in_use
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn recharge(&mut self, level: Battery) {
        self.battery = level.min(100);
    }

    pub fn relocate(&mut self, location: &str) {
        self.location = String::from(location);
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "vehicle {} ({}; {}%; at {}{})",
            self.registration,
            self.vehicle_type,
            self.battery,
            self.location,
            if self.in_use { "; in use" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Vehicle, Vehicles};

    #[test]
    fn vehicles_keep_list_order_and_can_be_changed_in_place() {
        let mut vehicles = Vehicles::new(vec![
            Vehicle::new("AA-01", "trotinete", 20, 3, false, "Braga"),
            Vehicle::new("AA-02", "bicicleta", 120, 2, true, "Porto"),
        ]);
        vehicles.push(Vehicle::new("AA-03", "trotinete", 45, 3, false, "Fafe"));

        let registrations: Vec<&str> = vehicles.iter().map(|v| v.registration()).collect();
        assert_eq!(registrations, vec!["AA-01", "AA-02", "AA-03"]);
        assert_eq!(vehicles.get("AA-02").unwrap().battery(), 100);

        let vehicle = vehicles.get_mut("AA-01").unwrap();
        vehicle.recharge(100);
        vehicle.relocate("Porto");

        assert_eq!(vehicles.get("AA-01").unwrap().battery(), 100);
        assert_eq!(vehicles.get("AA-01").unwrap().location(), "Porto");
        assert!(vehicles.get("ZZ-99").is_none());
        assert_eq!(vehicles.len(), 3);
    }

    #[test]
    fn display_shows_the_state() {
        let vehicle = Vehicle::new("AA-02", "bicicleta", 70, 2, true, "Porto");
        assert_eq!(
            vehicle.to_string(),
            "vehicle AA-02 (bicicleta; 70%; at Porto; in use)"
        );
    }
}
