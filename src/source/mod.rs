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

pub mod list;
pub mod load;

use std::fs::read_to_string;
use std::path::Path;

use treino_core::Day;
use treino_core::parse_document;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;

/// Extension of plan source files.
const PLAN_EXTENSION: &str = "txt";

/// Read and parse a plan file.
pub fn read_plan(path: &Path) -> Fallible<Vec<Day>> {
    if !path.is_file() {
        return fail(format!("plan file does not exist: {}", path.display()));
    }
    let text = read_to_string(path)
        .map_err(|e| ErrorReport::new(format!("failed to read {}: {e}", path.display())))?;
    let days = parse_document(&text);
    log::debug!("Parsed {} days from {}", days.len(), path.display());
    Ok(days)
}
