use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use crate::{
    base_types::CityCode,
    error::PersistenceError,
    network::Network,
    persistence::{load_network, save_network},
};

fn scratch_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "fleet_persistence_{}_{}",
        test_name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn edge_set(network: &Network) -> BTreeSet<(CityCode, CityCode, u32)> {
    network
        .cities()
        .flat_map(|city| {
            city.adjacency()
                .iter()
                .map(move |e| (city.code(), e.target(), e.weight().to_bits()))
        })
        .collect()
}

#[test]
fn saved_network_is_loaded_back() {
    // ARRANGE
    let dir = scratch_dir("round_trip");
    let graph_file = dir.join("graph.bin");
    let mut network = Network::new();
    for name in ["Braga", "Porto", "Fafe", "Lisboa", "Barcelos"] {
        network.add_city(name).unwrap();
    }
    network.connect_by_name("Braga", "Porto", 35.0);
    network.connect_by_name("Braga", "Fafe", 15.0);
    network.connect_by_name("Fafe", "Porto", 60.5);
    network.connect_by_name("Porto", "Lisboa", 250.0);
    network.connect_by_name("Lisboa", "Barcelos", 270.0);

    // ACT
    save_network(&network, &graph_file).unwrap();
    let loaded = load_network(&graph_file).unwrap();

    // ASSERT
    let cities = |n: &Network| -> Vec<(CityCode, String)> {
        n.cities().map(|c| (c.code(), c.name().to_string())).collect()
    };
    assert_eq!(cities(&loaded), cities(&network));
    assert_eq!(edge_set(&loaded), edge_set(&network));
    // adjacency lists keep their order
    assert_eq!(loaded.to_string(), network.to_string());
    assert_eq!(loaded.next_code(), CityCode(5));
    // Barcelos has no roads, its road file is empty
    assert_eq!(fs::read(dir.join("Barcelos")).unwrap().len(), 0);
    assert!(dir.join("Braga").is_file());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn records_have_a_fixed_size() {
    let dir = scratch_dir("record_size");
    let graph_file = dir.join("graph.bin");
    let mut network = Network::new();
    network.add_city("Braga").unwrap();
    network.add_city("Porto").unwrap();
    network.connect_by_name("Braga", "Porto", 35.0);

    save_network(&network, &graph_file).unwrap();

    let bytes = fs::read(&graph_file).unwrap();
    assert_eq!(bytes.len(), 2 * 24);
    assert_eq!(&bytes[0..4], &0i32.to_le_bytes());
    assert_eq!(&bytes[4..9], b"Braga");
    assert!(bytes[9..24].iter().all(|&b| b == 0));
    let roads = fs::read(dir.join("Braga")).unwrap();
    assert_eq!(roads.len(), 12);
    assert_eq!(&roads[8..12], &35.0f32.to_le_bytes());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn empty_network_is_not_saved() {
    let dir = scratch_dir("empty");

    let result = save_network(&Network::new(), &dir.join("graph.bin"));

    assert!(matches!(result, Err(PersistenceError::EmptyNetwork)));
    assert!(!dir.join("graph.bin").exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn long_names_do_not_fit() {
    let dir = scratch_dir("long_name");
    let mut network = Network::new();
    network.add_city("Vila Nova de Famalicao").unwrap();

    let result = save_network(&network, &dir.join("graph.bin"));

    assert!(matches!(result, Err(PersistenceError::NameTooLong(_, 20))));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_or_truncated_files_are_reported() {
    let dir = scratch_dir("corrupt");
    let graph_file = dir.join("graph.bin");

    assert!(matches!(
        load_network(&graph_file),
        Err(PersistenceError::Io { .. })
    ));

    fs::write(&graph_file, [0u8; 30]).unwrap();
    assert!(matches!(
        load_network(&graph_file),
        Err(PersistenceError::CorruptRecord { .. })
    ));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn saving_again_replaces_the_roads_of_an_earlier_save() {
    // ARRANGE
    let dir = scratch_dir("save_twice");
    let graph_file = dir.join("graph.bin");
    let mut network = Network::new();
    network.add_city("A").unwrap();
    network.add_city("B").unwrap();
    network.connect_by_name("A", "B", 7.0);
    save_network(&network, &graph_file).unwrap();

    let mut without_roads = Network::new();
    without_roads.add_city("A").unwrap();
    without_roads.add_city("B").unwrap();

    // ACT
    save_network(&without_roads, &graph_file).unwrap();
    let loaded = load_network(&graph_file).unwrap();

    // ASSERT
    assert_eq!(loaded.size(), 2);
    assert_eq!(loaded.edge_count(), 0);
    assert!(edge_set(&loaded).is_empty());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn city_named_like_the_graph_file_is_rejected() {
    let dir = scratch_dir("clash");
    let graph_file = dir.join("Braga");
    let mut network = Network::new();
    network.add_city("Braga").unwrap();
    network.add_city("Porto").unwrap();
    network.connect_by_name("Braga", "Porto", 35.0);

    let result = save_network(&network, &graph_file);

    assert!(matches!(
        result,
        Err(PersistenceError::ClashesWithGraphFile(name)) if name == "Braga"
    ));
    assert!(!graph_file.exists());
    fs::remove_dir_all(&dir).unwrap();
}
