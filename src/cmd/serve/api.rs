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

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Deserialize;
use serde::Serialize;
use tokio::fs::read_to_string;
use treino_core::Day;
use treino_core::WeekOption;
use treino_core::parse_document;
use treino_core::week_options;

use crate::cmd::serve::state::ServerState;
use crate::source::list::list_sources;
use crate::source::load::SourceLoader;
use crate::source::load::SourceLoaderError;

#[derive(Deserialize)]
pub struct PlanRequest {
    filename: Option<String>,
}

#[derive(Serialize)]
pub struct FileList {
    files: Vec<String>,
}

#[derive(Serialize)]
pub struct PlanResponse {
    json: Vec<Day>,
}

#[derive(Serialize)]
pub struct WeeksResponse {
    weeks: Vec<WeekOption>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
pub enum ApiError {
    MissingFilename,
    NotFound,
    InvalidFilename,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingFilename => (StatusCode::BAD_REQUEST, "Missing filename".to_string()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "File not found".to_string()),
            ApiError::InvalidFilename => (StatusCode::BAD_REQUEST, "Invalid filename".to_string()),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub async fn list_handler(State(state): State<ServerState>) -> Result<Json<FileList>, ApiError> {
    let files = list_sources(&state.directory).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(FileList { files }))
}

pub async fn plan_handler(
    State(state): State<ServerState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    let days = load_plan(&state, request).await?;
    Ok(Json(PlanResponse { json: days }))
}

pub async fn weeks_handler(
    State(state): State<ServerState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<WeeksResponse>, ApiError> {
    let days = load_plan(&state, request).await?;
    Ok(Json(WeeksResponse {
        weeks: week_options(&days),
    }))
}

async fn load_plan(state: &ServerState, request: PlanRequest) -> Result<Vec<Day>, ApiError> {
    let filename = request.filename.ok_or(ApiError::MissingFilename)?;
    let loader = SourceLoader::new(state.directory.clone());
    let path = loader.validate(&filename).map_err(|e| {
        log::warn!("Rejected plan file name {filename:?}: {e:?}");
        match e {
            SourceLoaderError::Empty => ApiError::MissingFilename,
            SourceLoaderError::NotFound | SourceLoaderError::NotFile => ApiError::NotFound,
            SourceLoaderError::Absolute
            | SourceLoaderError::ParentComponent
            | SourceLoaderError::NotPlan
            | SourceLoaderError::SymbolicLink => ApiError::InvalidFilename,
        }
    })?;
    let text = read_to_string(&path)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to read {filename}: {e}")))?;
    let days = parse_document(&text);
    log::info!("Parsed {filename}: {} days", days.len());
    Ok(days)
}
