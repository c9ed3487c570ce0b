use std::fs::File;
use std::io::Read;

use serde_json::json;

use model::json_serialisation::load_fleet_instance_from_json;

use super::{answer_queries, plan_instance, PlanError};

fn read_test_instance() -> serde_json::Value {
    let mut file = File::open("resources/test_instance.json").unwrap();
    let mut input_data = String::new();
    file.read_to_string(&mut input_data).unwrap();
    serde_json::from_str(&input_data).unwrap()
}

#[test]
fn plan_answers_all_queries() {
    // ARRANGE
    let input_data = read_test_instance();

    // ACT
    let output = plan_instance(&input_data).unwrap();

    // ASSERT
    assert_eq!(output["network"], json!({ "cities": 5, "roads": 5 }));

    let destinations = &output["shortestPaths"]["destinations"];
    assert_eq!(
        destinations[0],
        json!({
            "city": "Barcelos",
            "distance": 555.0,
            "path": ["Braga", "Porto", "Lisboa", "Barcelos"],
        })
    );
    assert_eq!(destinations[1]["distance"], json!(15.0));
    assert_eq!(destinations[3]["path"], json!(["Braga", "Porto"]));

    let path_counts = output["pathCounts"].as_array().unwrap();
    assert_eq!(path_counts[0]["count"], json!(2));
    assert_eq!(path_counts[0]["simplePaths"], json!(2));
    assert_eq!(path_counts[1]["count"], json!(2));
    assert!(path_counts[2].get("count").is_none());
    assert!(path_counts[2]["error"].as_str().unwrap().contains("Coimbra"));

    assert_eq!(output["reachability"][0]["reachable"], json!(false));
    assert_eq!(output["reachability"][1]["reachable"], json!(true));

    let radius_search = &output["radiusSearches"][0];
    assert_eq!(radius_search["reached"], json!(["Braga", "Fafe", "Porto"]));
    let found: Vec<&str> = radius_search["vehicles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["registration"].as_str().unwrap())
        .collect();
    assert_eq!(found, vec!["AA-01", "AA-02", "AA-06", "AA-03", "AA-07"]);
    assert_eq!(radius_search["vehicles"][3]["remainingBudget"], json!(15.0));
}

#[test]
fn collection_runs_after_the_searches() {
    let input_data = read_test_instance();

    let output = plan_instance(&input_data).unwrap();

    let collection = &output["collection"];
    assert_eq!(collection["runs"], json!(4));
    assert_eq!(
        collection["collected"],
        json!(["AA-01", "AA-04", "AA-01", "AA-03", "AA-01", "AA-02", "AA-01"])
    );
    assert_eq!(collection["recharged"], json!(["AA-02", "AA-03", "AA-04"]));
    assert_eq!(
        collection["events"][1],
        json!({ "run": 1, "type": "moved", "from": "Braga", "to": "Fafe", "distance": 15.0 })
    );

    // the radius search still saw AA-04 in Lisboa, the final fleet has it in Braga
    let aa04 = output["vehicles"]
        .as_array()
        .unwrap()
        .iter()
        .find(|v| v["registration"] == "AA-04")
        .unwrap();
    assert_eq!(aa04["location"], json!("Braga"));
    assert_eq!(aa04["battery"], json!(100));
    assert!(output["info"]["runningTime"].is_string());
}

#[test]
fn instance_without_queries_only_reports_network() {
    let input_data = json!({
        "cities": [{ "name": "Braga" }, { "name": "Porto" }],
        "roads": [{ "origin": "Braga", "destination": "Porto", "distance": 35, "bidirectional": true }],
    });

    let output = plan_instance(&input_data).unwrap();

    assert_eq!(output["network"], json!({ "cities": 2, "roads": 2 }));
    assert!(output.get("shortestPaths").is_none());
    assert!(output.get("collection").is_none());
    assert_eq!(output["pathCounts"], json!([]));
}

#[test]
fn malformed_documents_are_rejected() {
    let no_cities = json!({ "roads": [] });
    assert!(matches!(
        plan_instance(&no_cities),
        Err(PlanError::Instance(_))
    ));

    let bad_queries = json!({
        "cities": [{ "name": "Braga" }],
        "queries": { "pathCounts": 3 },
    });
    assert!(matches!(
        plan_instance(&bad_queries),
        Err(PlanError::InvalidQueries(_))
    ));
}

#[test]
fn queries_are_answered_on_a_loaded_instance() {
    // ARRANGE
    let input_data = read_test_instance();
    let (network, vehicles, config) = load_fleet_instance_from_json(&input_data).unwrap();

    // ACT
    let output = answer_queries(&input_data, network.clone(), vehicles, config).unwrap();

    // ASSERT
    assert_eq!(output["network"]["cities"], json!(network.size()));
    assert_eq!(output["pathCounts"][0]["count"], json!(2));
    assert_eq!(output["collection"]["runs"], json!(4));
}
