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

//! Binary storage of a network.
//!
//! The graph file holds one record per city, in name order:
//! `code: i32 | name: [u8; 20]` (little-endian, name NUL-padded).
//! Roads are stored per origin city in a file named after the city, located in the directory
//! of the graph file: `origin: i32 | destination: i32 | weight: f32`, oldest road first.
//! Cities without roads get an empty road file, so nothing of an earlier save survives.

#[cfg(test)]
mod tests;

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::base_types::{CityCode, Id, Weight};
use crate::error::PersistenceError;
use crate::network::city::City;
use crate::network::Network;

pub const NAME_BUFFER_LEN: usize = 20;
const CITY_RECORD_LEN: usize = 4 + NAME_BUFFER_LEN;
const ROAD_RECORD_LEN: usize = 4 + 4 + 4;

/// Writes the graph file and one road file per city.
pub fn save_network(network: &Network, graph_file: &Path) -> Result<(), PersistenceError> {
    if network.is_empty() {
        return Err(PersistenceError::EmptyNetwork);
    }
    // no file is touched unless every city can be stored
    for city in network.cities() {
        encode_city(city)?;
        if graph_file.file_name() == Some(OsStr::new(road_file_name(city.name())?)) {
            return Err(PersistenceError::ClashesWithGraphFile(
                city.name().to_string(),
            ));
        }
    }
    let directory = directory_of(graph_file);

    let mut writer = BufWriter::new(create_file(graph_file)?);
    for city in network.cities() {
        let record = encode_city(city)?;
        writer
            .write_all(&record)
            .map_err(|source| io_error(graph_file, source))?;
        save_roads(city, &directory.join(road_file_name(city.name())?))?;
    }
    writer
        .flush()
        .map_err(|source| io_error(graph_file, source))?;
    info!(
        cities = network.size(),
        roads = network.edge_count(),
        path = %graph_file.display(),
        "network saved"
    );
    Ok(())
}

fn save_roads(city: &City, path: &Path) -> Result<(), PersistenceError> {
    let mut writer = BufWriter::new(create_file(path)?);
    // reloading inserts at the front, so the oldest road is written first
    for edge in city.adjacency().iter().rev() {
        let mut record = [0u8; ROAD_RECORD_LEN];
        record[0..4].copy_from_slice(&encode_code(city.code()).to_le_bytes());
        record[4..8].copy_from_slice(&encode_code(edge.target()).to_le_bytes());
        record[8..12].copy_from_slice(&edge.weight().to_le_bytes());
        writer
            .write_all(&record)
            .map_err(|source| io_error(path, source))?;
    }
    writer.flush().map_err(|source| io_error(path, source))
}

/// Rebuilds a network from a graph file and the road files next to it.
pub fn load_network(graph_file: &Path) -> Result<Network, PersistenceError> {
    let bytes = fs::read(graph_file).map_err(|source| io_error(graph_file, source))?;
    if bytes.len() % CITY_RECORD_LEN != 0 {
        return Err(corrupt(graph_file, "file size is not a multiple of the record size"));
    }

    let mut network = Network::new();
    for record in bytes.chunks_exact(CITY_RECORD_LEN) {
        network.insert_city(decode_city(record, graph_file)?)?;
    }
    let roads = load_roads(&mut network, &directory_of(graph_file))?;
    info!(
        cities = network.size(),
        roads,
        path = %graph_file.display(),
        "network loaded"
    );
    Ok(network)
}

/// Reads the road file of every city found in `directory` and inserts the roads by code.
/// Missing files mean "no roads". Returns the number of inserted roads.
pub fn load_roads(network: &mut Network, directory: &Path) -> Result<usize, PersistenceError> {
    let names: Vec<String> = network.cities().map(|c| c.name().to_string()).collect();
    let mut inserted = 0;
    for name in names {
        let path = directory.join(road_file_name(&name)?);
        if !path.is_file() {
            debug!(city = name.as_str(), "no road file");
            continue;
        }
        let bytes = fs::read(&path).map_err(|source| io_error(&path, source))?;
        if bytes.len() % ROAD_RECORD_LEN != 0 {
            return Err(corrupt(&path, "file size is not a multiple of the record size"));
        }
        for record in bytes.chunks_exact(ROAD_RECORD_LEN) {
            let origin = decode_code(&record[0..4], &path)?;
            let destination = decode_code(&record[4..8], &path)?;
            let weight = Weight::from_le_bytes(to_array(&record[8..12]));
            if network.connect(origin, destination, weight) {
                inserted += 1;
            }
        }
    }
    Ok(inserted)
}

fn encode_city(city: &City) -> Result<[u8; CITY_RECORD_LEN], PersistenceError> {
    let name = city.name().as_bytes();
    // one byte stays reserved for the terminating NUL
    if name.len() >= NAME_BUFFER_LEN {
        return Err(PersistenceError::NameTooLong(
            city.name().to_string(),
            NAME_BUFFER_LEN,
        ));
    }
    let mut record = [0u8; CITY_RECORD_LEN];
    record[0..4].copy_from_slice(&encode_code(city.code()).to_le_bytes());
    record[4..4 + name.len()].copy_from_slice(name);
    Ok(record)
}

fn decode_city(record: &[u8], path: &Path) -> Result<City, PersistenceError> {
    let code = decode_code(&record[0..4], path)?;
    let buffer = &record[4..CITY_RECORD_LEN];
    let len = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
    let name = std::str::from_utf8(&buffer[..len])
        .map_err(|_| corrupt(path, "city name is not valid UTF-8"))?;
    Ok(City::new(code, name))
}

fn encode_code(code: CityCode) -> i32 {
    code.0 as i32
}

fn decode_code(bytes: &[u8], path: &Path) -> Result<CityCode, PersistenceError> {
    let raw = i32::from_le_bytes(to_array(bytes));
    Id::try_from(raw)
        .map(CityCode)
        .map_err(|_| corrupt(path, &format!("negative city code {}", raw)))
}

fn to_array(bytes: &[u8]) -> [u8; 4] {
    let mut array = [0u8; 4];
    array.copy_from_slice(bytes);
    array
}

fn road_file_name(city_name: &str) -> Result<&str, PersistenceError> {
    if city_name == "." || city_name == ".." || city_name.contains(['/', '\\']) {
        return Err(PersistenceError::InvalidFileName(city_name.to_string()));
    }
    Ok(city_name)
}

fn directory_of(graph_file: &Path) -> PathBuf {
    graph_file
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

fn create_file(path: &Path) -> Result<File, PersistenceError> {
    File::create(path).map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> PersistenceError {
    PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn corrupt(path: &Path, reason: &str) -> PersistenceError {
    PersistenceError::CorruptRecord {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
