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


use model::error::{NetworkError, PersistenceError};
use model::json_serialisation::load_fleet_instance_from_json;
use model::persistence::{load_network, save_network};
use server::{answer_queries, PlanError};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Instance(#[from] NetworkError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Answers the queries of the instance. If the instance names a graph file, the network is
/// also written to it and read back.
pub fn run(input_data: serde_json::Value) -> Result<serde_json::Value, RunError> {
    let (network, vehicles, config) = load_fleet_instance_from_json(&input_data)?;
    let mut output = answer_queries(&input_data, network.clone(), vehicles, config.clone())?;

    if let Some(graph_file) = &config.persistence.graph_file {
        save_network(&network, graph_file)?;
        let reloaded = load_network(graph_file)?;
        let identical = reloaded.to_string() == network.to_string();
        info!(
            path = %graph_file.display(),
            identical,
            "network saved and reloaded"
        );
        output["persistence"] = serde_json::json!({
            "graphFile": graph_file.display().to_string(),
            "cities": reloaded.size(),
            "roads": reloaded.edge_count(),
            "identical": identical,
        });
    }
    Ok(output)
}
