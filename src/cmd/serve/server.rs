// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env::current_dir;
use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::signal;

use crate::cmd::serve::api::list_handler;
use crate::cmd::serve::api::plan_handler;
use crate::cmd::serve::api::weeks_handler;
use crate::cmd::serve::state::ServerState;
use crate::error::Fallible;
use crate::error::fail;

pub struct ServerConfig {
    pub directory: Option<String>,
    pub host: String,
    pub port: u16,
}

pub async fn start_server(config: ServerConfig) -> Fallible<()> {
    let directory: PathBuf = resolve_directory(config.directory)?;
    let state = ServerState { directory };

    let app = Router::new();
    let app = app.route("/api/txtToJson", get(list_handler));
    let app = app.route("/api/txtToJson", post(plan_handler));
    let app = app.route("/api/weeks", post(weeks_handler));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("{}:{}", config.host, config.port);

    // Start the server with graceful shutdown on Ctrl+C.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn resolve_directory(directory: Option<String>) -> Fallible<PathBuf> {
    let directory: PathBuf = match directory {
        Some(directory) => PathBuf::from(directory),
        None => current_dir()?,
    };
    if !directory.is_dir() {
        return fail("directory does not exist.");
    }
    Ok(directory.canonicalize()?)
}

async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    log::debug!("Received Ctrl+C, shutting down gracefully");
}
