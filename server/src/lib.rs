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

pub mod queries;

#[cfg(test)]
mod tests;

use model::base_types::{CityCode, Distance};
use model::config::Config;
use model::error::NetworkError;
use model::json_serialisation::load_fleet_instance_from_json;
use model::network::Network;
use model::vehicles::Vehicles;
use queries::{CityPair, CollectQuery, Queries, RadiusQuery};
use serde::Deserialize;
use serde_json::json;
use solver::fleet_collector::{Collection, CollectorEvent};
use solver::path_analysis::{
    count_paths_by_name, count_simple_paths_by_name, is_reachable_by_name,
};
use solver::radius_search::find_vehicles_in_radius_by_name;
use solver::shortest_paths::shortest_paths_by_name;
use solver::FleetCollector;
use tracing::info;

use gethostname::gethostname;
use std::sync::Arc;
use std::time as stdtime;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error(transparent)]
    Instance(#[from] NetworkError),
    #[error("invalid queries: {0}")]
    InvalidQueries(#[from] serde_json::Error),
}

/// Loads the instance and answers all of its queries. A failing query is reported inside the
/// output; only an unreadable instance fails as a whole.
pub fn plan_instance(input_data: &serde_json::Value) -> Result<serde_json::Value, PlanError> {
    let (network, vehicles, config) = load_fleet_instance_from_json(input_data)?;
    answer_queries(input_data, network, vehicles, config)
}

/// Answers the `queries` section of `input_data` on an instance that is already loaded.
pub fn answer_queries(
    input_data: &serde_json::Value,
    network: Arc<Network>,
    mut vehicles: Vehicles,
    config: Arc<Config>,
) -> Result<serde_json::Value, PlanError> {
    let start_time = stdtime::Instant::now();
    let queries = match input_data.get("queries") {
        Some(queries) => Queries::deserialize(queries)?,
        None => Queries::default(),
    };
    info!(
        path_counts = queries.path_counts.len(),
        reachability = queries.reachability.len(),
        radius_searches = queries.radius_searches.len(),
        collect = queries.collect.is_some(),
        "queries parsed"
    );

    let mut output = json!({
        "network": {
            "cities": network.size(),
            "roads": network.edge_count(),
        },
    });

    if let Some(source) = &queries.shortest_paths_from {
        output["shortestPaths"] = shortest_paths_to_json(&network, source);
    }
    output["pathCounts"] = queries
        .path_counts
        .iter()
        .map(|pair| path_count_to_json(&network, pair))
        .collect();
    output["reachability"] = queries
        .reachability
        .iter()
        .map(|pair| reachability_to_json(&network, pair))
        .collect();
    output["radiusSearches"] = queries
        .radius_searches
        .iter()
        .map(|query| radius_search_to_json(&network, &vehicles, query))
        .collect();

    // the collection changes the fleet, so it runs last
    if let Some(collect) = &queries.collect {
        let collector = FleetCollector::initialize(network.clone(), config.clone());
        output["collection"] = collection_to_json(&network, &collector, &mut vehicles, collect);
    }
    output["vehicles"] = vehicles_to_json(&vehicles);

    let runtime_duration = start_time.elapsed();
    info!(
        elapsed_sec = runtime_duration.as_secs_f32(),
        "all queries answered"
    );
    output["info"] = info_to_json(runtime_duration);
    Ok(output)
}

fn shortest_paths_to_json(network: &Network, source: &str) -> serde_json::Value {
    match shortest_paths_by_name(network, source) {
        Ok(result) => {
            let destinations: Vec<serde_json::Value> = network
                .cities()
                .filter(|city| city.code() != result.source())
                .map(|city| {
                    json!({
                        "city": city.name(),
                        "distance": distance_to_json(result.distance_to(city.code())),
                        "path": result.path_to(city.code()).map(|path| names_of(network, &path)),
                    })
                })
                .collect();
            json!({ "source": source, "destinations": destinations })
        }
        Err(error) => json!({ "source": source, "error": error.to_string() }),
    }
}

fn path_count_to_json(network: &Network, pair: &CityPair) -> serde_json::Value {
    let mut entry = json!({ "from": pair.from, "to": pair.to });
    match count_paths_by_name(network, &pair.from, &pair.to) {
        Ok(count) => entry["count"] = json!(count),
        Err(error) => entry["error"] = json!(error.to_string()),
    }
    if let Ok(count) = count_simple_paths_by_name(network, &pair.from, &pair.to) {
        entry["simplePaths"] = json!(count);
    }
    entry
}

fn reachability_to_json(network: &Network, pair: &CityPair) -> serde_json::Value {
    let mut entry = json!({ "from": pair.from, "to": pair.to });
    match is_reachable_by_name(network, &pair.from, &pair.to) {
        Ok(reachable) => entry["reachable"] = json!(reachable),
        Err(error) => entry["error"] = json!(error.to_string()),
    }
    entry
}

fn radius_search_to_json(
    network: &Network,
    vehicles: &Vehicles,
    query: &RadiusQuery,
) -> serde_json::Value {
    let mut entry = json!({
        "from": query.from,
        "radius": query.radius,
        "vehicleType": query.vehicle_type,
    });
    match find_vehicles_in_radius_by_name(
        network,
        vehicles,
        &query.from,
        query.radius,
        &query.vehicle_type,
    ) {
        Ok(report) => {
            entry["reached"] = json!(names_of(
                network,
                &report.reached_cities().collect::<Vec<_>>()
            ));
            entry["vehicles"] = report
                .sightings()
                .iter()
                .map(|s| {
                    json!({
                        "registration": s.registration,
                        "location": name_of(network, s.city),
                        "remainingBudget": s.remaining_budget,
                    })
                })
                .collect();
        }
        Err(error) => entry["error"] = json!(error.to_string()),
    }
    entry
}

fn collection_to_json(
    network: &Network,
    collector: &FleetCollector,
    vehicles: &mut Vehicles,
    query: &CollectQuery,
) -> serde_json::Value {
    let result = match query.capacity {
        Some(capacity) => collector.collect_with_capacity(vehicles, capacity),
        None => collector.collect(vehicles),
    };
    match result {
        Ok(collection) => json!({
            "runs": collection.runs(),
            "travelled": collection.travelled(),
            "collected": collection.collected(),
            "recharged": collection.recharged().collect::<Vec<_>>(),
            "events": events_to_json(network, &collection),
        }),
        Err(error) => json!({ "error": error.to_string() }),
    }
}

fn events_to_json(network: &Network, collection: &Collection) -> Vec<serde_json::Value> {
    collection
        .events()
        .iter()
        .map(|event| match event {
            CollectorEvent::Collected {
                run,
                city,
                registration,
            } => json!({
                "run": run,
                "type": "collected",
                "city": name_of(network, *city),
                "vehicle": registration,
            }),
            CollectorEvent::Moved {
                run,
                from,
                to,
                distance,
            } => json!({
                "run": run,
                "type": "moved",
                "from": name_of(network, *from),
                "to": name_of(network, *to),
                "distance": distance,
            }),
            CollectorEvent::ReturnedToStart { run, recharged } => json!({
                "run": run,
                "type": "returnedToStart",
                "recharged": recharged,
            }),
        })
        .collect()
}

fn vehicles_to_json(vehicles: &Vehicles) -> serde_json::Value {
    vehicles
        .iter()
        .map(|v| {
            json!({
                "registration": v.registration(),
                "vehicleType": v.vehicle_type(),
                "battery": v.battery(),
                "inUse": v.in_use(),
                "location": v.location(),
            })
        })
        .collect()
}

pub fn info_to_json(runtime_duration: stdtime::Duration) -> serde_json::Value {
    json!({
        "runningTime": format!("{:0.2}sec", runtime_duration.as_secs_f32()),
        "numberOfThreads": rayon::current_num_threads(),
        "timestamp(UTC)": chrono::Utc::now().to_rfc3339(),
        "hostname": gethostname().into_string().unwrap_or("unknown".to_string()),
    })
}

fn distance_to_json(distance: Option<Distance>) -> serde_json::Value {
    match distance.and_then(|d| d.value()) {
        Some(value) => json!(value),
        None => serde_json::Value::Null,
    }
}

fn name_of(network: &Network, code: CityCode) -> String {
    network
        .city(code)
        .map(|city| city.name().to_string())
        .unwrap_or_else(|| code.to_string())
}

fn names_of(network: &Network, codes: &[CityCode]) -> Vec<String> {
    codes.iter().map(|code| name_of(network, *code)).collect()
}
