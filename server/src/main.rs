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

use std::env;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Parse command line arguments to get the port number
    let args: Vec<String> = env::args().collect();
    let port: u16 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3000);

    let app = axum::Router::new()
        .fallback(axum::routing::get(|| async {
            "No route! Use /health or /plan."
        }))
        .route("/health", axum::routing::get(healthy))
        .route("/plan", axum::routing::post(plan))
        .layer(DefaultBodyLimit::disable());

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(port, %err, "could not bind");
            std::process::exit(1)
        }
    };
    info!(
        port,
        "server running (http://localhost:{}/health)", port
    );
    if let Err(err) = axum::serve(listener, app).await {
        error!(%err, "server stopped");
        std::process::exit(1)
    }
}

pub async fn healthy() -> &'static str {
    info!("healthy");
    "Healthy"
}

pub async fn plan(
    axum::extract::Json(input_data): axum::extract::Json<serde_json::Value>,
) -> (StatusCode, axum::response::Json<serde_json::Value>) {
    info!("new request");
    match server::plan_instance(&input_data) {
        Ok(output) => (StatusCode::OK, axum::response::Json(output)),
        Err(err) => {
            error!(%err, "request rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                axum::response::Json(serde_json::json!({ "error": err.to_string() })),
            )
        }
    }
}
