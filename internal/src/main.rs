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

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <input_file>", args[0]);
        std::process::exit(1)
    }

    let path = &args[1];

    let input_data = match read_input(path) {
        Ok(input_data) => input_data,
        Err(err) => {
            error!(path = path.as_str(), %err, "could not read instance");
            std::process::exit(1)
        }
    };
    info!(path = path.as_str(), "---------- RUN ----------");

    let output = match internal::run(input_data) {
        Ok(output) => output,
        Err(err) => {
            error!(%err, "run failed");
            std::process::exit(1)
        }
    };

    // output path with sub-directory creation
    let output_dir_name = "output";
    if let Err(err) = write_output(path, output_dir_name, &output) {
        error!(%err, "could not write output");
        std::process::exit(1)
    }

    std::process::exit(0)
}

fn read_input(path: &str) -> io::Result<serde_json::Value> {
    let mut file = File::open(path)?;
    let mut input_data = String::new();
    file.read_to_string(&mut input_data)?;
    Ok(serde_json::from_str(&input_data)?)
}

fn write_output(
    input_path: &str,
    output_dir_name: &str,
    output: &serde_json::Value,
) -> io::Result<()> {
    let output_path = ensure_output_path(input_path, output_dir_name)?;
    let file = File::create(&output_path)?;
    serde_json::to_writer_pretty(file, output)?;
    info!(path = output_path.as_str(), "output written");
    Ok(())
}

fn ensure_output_path(input_path: &str, output_dir_name: &str) -> io::Result<String> {
    let file_name = Path::new(input_path)
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no file name"))?;
    let output_path = format!("{}/output_{}", output_dir_name, file_name);
    if let Some(parent_dir) = Path::new(&output_path).parent() {
        fs::create_dir_all(parent_dir)?;
    }
    Ok(output_path)
}
