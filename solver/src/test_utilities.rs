use std::{fs::File, io::Read, sync::Arc};

use model::{
    base_types::CityCode, config::Config,
    json_serialisation::load_fleet_instance_from_json, network::Network, vehicles::Vehicles,
};

/// The Minho test instance:
///
/// ```text
///   Braga --35--> Porto --250--> Lisboa --270--> Barcelos
///     |             ^
///     15            60
///     v             |
///   Fafe -----------+
/// ```
pub struct TestData {
    pub network: Arc<Network>,
    pub vehicles: Vehicles,
    pub config: Arc<Config>,
    pub braga: CityCode,
    pub porto: CityCode,
    pub fafe: CityCode,
    pub lisboa: CityCode,
    pub barcelos: CityCode,
}

pub fn init_test_data() -> TestData {
    // load file from json
    let path = "resources/test_instance.json";

    let mut file = File::open(path).unwrap();
    let mut input_data = String::new();
    file.read_to_string(&mut input_data).unwrap();
    let input_data: serde_json::Value = serde_json::from_str(&input_data).unwrap();
    let (network, vehicles, config) = load_fleet_instance_from_json(&input_data).unwrap();
    TestData {
        braga: network.code_of("Braga").unwrap(),
        porto: network.code_of("Porto").unwrap(),
        fafe: network.code_of("Fafe").unwrap(),
        lisboa: network.code_of("Lisboa").unwrap(),
        barcelos: network.code_of("Barcelos").unwrap(),
        network,
        vehicles,
        config,
    }
}

/// Builds a network from `(origin, destination, weight)` triples; cities get their codes in
/// order of first appearance.
pub fn network_from_roads(roads: &[(&str, &str, f32)]) -> Network {
    let mut network = Network::new();
    for (origin, destination, weight) in roads {
        for name in [origin, destination] {
            if network.find_by_name(name).is_none() {
                network.add_city(name).unwrap();
            }
        }
        network.connect_by_name(origin, destination, *weight);
    }
    network
}
