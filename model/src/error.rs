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

use std::path::PathBuf;

use crate::base_types::CityCode;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum NetworkError {
    #[error("city name must not be empty")]
    EmptyName,
    #[error("a city named {0} already exists")]
    DuplicateName(String),
    #[error("city code {0} is already taken")]
    DuplicateCode(CityCode),
    #[error("unknown city: {0}")]
    UnknownCity(String),
    #[error("invalid instance: {0}")]
    InvalidInstance(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("the network is empty, nothing to save")]
    EmptyNetwork,
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("city name {0} does not fit into a record of {1} bytes")]
    NameTooLong(String, usize),
    #[error("city name {0} cannot be used as file name")]
    InvalidFileName(String),
    #[error("the road file of city {0} would overwrite the graph file")]
    ClashesWithGraphFile(String),
    #[error("corrupt record in {}: {reason}", .path.display())]
    CorruptRecord { path: PathBuf, reason: String },
    #[error(transparent)]
    Network(#[from] NetworkError),
}
