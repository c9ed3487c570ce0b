use model::base_types::CityCode;
use model::network::Network;

use crate::{
    error::SolverError,
    test_utilities::{init_test_data, network_from_roads},
};

use super::{
    count_paths, count_paths_by_name, count_simple_paths, depth_first_search,
    is_reachable_by_name,
};

#[test]
fn count_paths_on_acyclic_network() {
    // ARRANGE
    let d = init_test_data();

    // ACT & ASSERT
    assert_eq!(count_paths(&d.network, d.braga, d.braga), Ok(1));
    // Braga -> Porto and Braga -> Fafe -> Porto
    assert_eq!(count_paths(&d.network, d.braga, d.porto), Ok(2));
    assert_eq!(count_paths(&d.network, d.braga, d.barcelos), Ok(2));
    assert_eq!(count_paths(&d.network, d.fafe, d.barcelos), Ok(1));
    assert_eq!(count_paths(&d.network, d.porto, d.braga), Ok(0));
    assert_eq!(count_paths_by_name(&d.network, "Braga", "Lisboa"), Ok(2));
}

#[test]
fn count_paths_with_independent_routes() {
    // three independent routes a -> b, one of them direct
    let network = network_from_roads(&[
        ("a", "x", 1.0),
        ("x", "b", 1.0),
        ("a", "y", 1.0),
        ("y", "b", 1.0),
        ("a", "b", 5.0),
    ]);
    let a = network.code_of("a").unwrap();
    let b = network.code_of("b").unwrap();

    assert_eq!(count_paths(&network, a, b), Ok(3));
    assert_eq!(count_simple_paths(&network, a, b), Ok(3));
}

#[test]
fn count_paths_reports_cycles() {
    // ARRANGE
    let network = network_from_roads(&[
        ("Braga", "Fafe", 15.0),
        ("Fafe", "Porto", 60.0),
        ("Porto", "Braga", 35.0),
        ("Porto", "Lisboa", 250.0),
    ]);
    let braga = network.code_of("Braga").unwrap();
    let lisboa = network.code_of("Lisboa").unwrap();

    // ACT
    let all_walks = count_paths(&network, braga, lisboa);
    let simple = count_simple_paths(&network, braga, lisboa);

    // ASSERT
    assert_eq!(all_walks, Err(SolverError::CycleDetected(braga)));
    assert_eq!(simple, Ok(1));
}

#[test]
fn cycle_through_destination_is_harmless() {
    let network = network_from_roads(&[("a", "b", 1.0), ("b", "a", 1.0)]);
    let a = network.code_of("a").unwrap();
    let b = network.code_of("b").unwrap();

    assert_eq!(count_paths(&network, a, b), Ok(1));
}

#[test]
fn unknown_endpoints_are_rejected() {
    let d = init_test_data();

    assert_eq!(
        count_paths(&d.network, d.braga, CityCode(17)),
        Err(SolverError::UnknownCode(CityCode(17)))
    );
    assert_eq!(
        count_paths_by_name(&d.network, "Braga", "Coimbra"),
        Err(SolverError::UnknownCity(String::from("Coimbra")))
    );
    assert_eq!(
        count_paths_by_name(&d.network, "", "Porto"),
        Err(SolverError::EmptyArgument("city name"))
    );
    assert_eq!(
        count_paths(&Network::new(), CityCode(0), CityCode(0)),
        Err(SolverError::EmptyNetwork)
    );
}

#[test]
fn depth_first_search_follows_roads() {
    let d = init_test_data();

    assert_eq!(depth_first_search(&d.network, d.braga, d.barcelos), Ok(true));
    assert_eq!(depth_first_search(&d.network, d.fafe, d.lisboa), Ok(true));
    assert_eq!(depth_first_search(&d.network, d.lisboa, d.lisboa), Ok(true));
    assert_eq!(depth_first_search(&d.network, d.barcelos, d.braga), Ok(false));
    assert_eq!(depth_first_search(&d.network, d.porto, d.fafe), Ok(false));
    assert_eq!(is_reachable_by_name(&d.network, "Braga", "Lisboa"), Ok(true));
}

#[test]
fn depth_first_search_backtracks_over_dead_ends_and_cycles() {
    // ARRANGE
    // the first road out of "a" leads into a dead end, the second into a cycle
    // whose first road points back to an already visited city
    let network = network_from_roads(&[
        ("a", "c", 1.0),
        ("c", "e", 1.0),
        ("e", "d", 1.0),
        ("e", "c", 1.0),
        ("a", "b", 1.0),
    ]);
    let a = network.code_of("a").unwrap();
    let b = network.code_of("b").unwrap();
    let d = network.code_of("d").unwrap();

    // ACT & ASSERT
    let c = network.code_of("c").unwrap();
    let e = network.code_of("e").unwrap();
    assert_eq!(network.edges_of(a).next().unwrap().target(), b);
    assert_eq!(network.edges_of(e).next().unwrap().target(), c);
    assert_eq!(depth_first_search(&network, a, d), Ok(true));
    assert_eq!(depth_first_search(&network, d, a), Ok(false));
    assert_eq!(depth_first_search(&network, b, d), Ok(false));
}
