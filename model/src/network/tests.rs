use crate::{
    base_types::CityCode,
    error::NetworkError,
    network::{adjacency::Edge, city::City, Network},
};

fn minho_network() -> Network {
    let mut network = Network::new();
    for name in ["Braga", "Porto", "Fafe", "Lisboa", "Barcelos"] {
        network.add_city(name).unwrap();
    }
    network
}

#[test]
fn cities_are_iterated_in_name_order() {
    // ARRANGE
    let mut network = Network::new();

    // ACT
    let porto = network.add_city("Porto").unwrap();
    let braga = network.add_city("Braga").unwrap();
    let fafe = network.add_city("Fafe").unwrap();

    // ASSERT
    let names: Vec<&str> = network.cities().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Braga", "Fafe", "Porto"]);
    assert_eq!(network.codes().collect::<Vec<_>>(), vec![braga, fafe, porto]);
    assert_eq!(porto, CityCode(0));
    assert_eq!(braga, CityCode(1));
    assert_eq!(fafe, CityCode(2));
    assert_eq!(network.size(), 3);
}

#[test]
fn lookup_by_name_and_code() {
    let network = minho_network();

    assert_eq!(network.find_by_name("Fafe").unwrap().code(), CityCode(2));
    assert_eq!(network.code_of("Barcelos"), Some(CityCode(4)));
    assert_eq!(network.city(CityCode(3)).unwrap().name(), "Lisboa");

    // smaller than every name, larger than every name, in between
    assert!(network.find_by_name("Aveiro").is_none());
    assert!(network.find_by_name("Viseu").is_none());
    assert!(network.find_by_name("Coimbra").is_none());
    assert!(network.city(CityCode(5)).is_none());
}

#[test]
fn duplicate_cities_are_rejected() {
    let mut network = minho_network();

    assert_eq!(
        network.add_city("Porto"),
        Err(NetworkError::DuplicateName(String::from("Porto")))
    );
    assert_eq!(
        network.insert_city(City::new(CityCode(1), "Guimaraes")),
        Err(NetworkError::DuplicateCode(CityCode(1)))
    );
    assert_eq!(network.add_city(""), Err(NetworkError::EmptyName));
    assert_eq!(network.size(), 5);
}

#[test]
fn codes_stay_monotonic_after_explicit_insertion() {
    let mut network = Network::new();
    network.insert_city(City::new(CityCode(7), "Guarda")).unwrap();

    let next = network.add_city("Aveiro").unwrap();

    assert_eq!(next, CityCode(8));
    assert_eq!(network.cities().next().unwrap().name(), "Aveiro");
}

#[test]
fn second_identical_road_is_rejected() {
    // ARRANGE
    let mut network = minho_network();

    // ACT
    let first = network.connect_by_name("Braga", "Porto", 35.0);
    let second = network.connect_by_name("Braga", "Porto", 40.0);
    let by_code = network.connect(CityCode(0), CityCode(1), 50.0);

    // ASSERT
    assert!(first);
    assert!(!second);
    assert!(!by_code);
    let adjacency = network.adjacency(CityCode(0)).unwrap();
    assert_eq!(adjacency.len(), 1);
    assert_eq!(
        adjacency.iter().next(),
        Some(&Edge::new(CityCode(1), 35.0))
    );
}

#[test]
fn roads_to_unknown_cities_are_ignored() {
    let mut network = minho_network();

    assert!(!network.connect_by_name("Braga", "Coimbra", 10.0));
    assert!(!network.connect_by_name("Coimbra", "Braga", 10.0));
    assert!(!network.connect(CityCode(0), CityCode(9), 10.0));
    assert!(!network.connect(CityCode(9), CityCode(0), 10.0));
    assert_eq!(network.edge_count(), 0);
}

#[test]
fn new_roads_are_put_in_front() {
    let mut network = minho_network();
    network.connect_by_name("Braga", "Porto", 35.0);
    network.connect_by_name("Braga", "Fafe", 15.0);

    let targets: Vec<CityCode> = network.edges_of(CityCode(0)).map(|e| e.target()).collect();

    assert_eq!(targets, vec![CityCode(2), CityCode(1)]);
    assert_eq!(network.edges_of(CityCode(42)).count(), 0);
}

#[test]
fn display_lists_cities_with_their_roads() {
    let mut network = Network::new();
    network.add_city("Porto").unwrap();
    network.add_city("Braga").unwrap();
    network.connect_by_name("Braga", "Porto", 35.0);

    assert_eq!(
        network.to_string(),
        "V: 1 - Braga\n\tAdj: 0 - (35)\nV: 0 - Porto\n"
    );
}

#[test]
fn clear_removes_everything() {
    let mut network = minho_network();
    network.connect_by_name("Braga", "Porto", 35.0);

    network.clear();

    assert!(network.is_empty());
    assert_eq!(network.edge_count(), 0);
    assert_eq!(network.add_city("Braga"), Ok(CityCode(0)));
}
