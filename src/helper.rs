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

use std::fs::write;
use std::path::PathBuf;

use tempfile::tempdir;

use crate::error::Fallible;

pub const MIXED_PLAN: &str = include_str!("../crates/treino-core/fixtures/plano_misto.txt");

/// Create an empty temporary directory that outlives the test's handle.
pub fn create_tmp_directory() -> Fallible<PathBuf> {
    let dir = tempdir()?.keep();
    Ok(dir.canonicalize()?)
}

/// Create a temporary plans directory holding the mixed-format fixture plus
/// a file that is not a plan.
pub fn create_tmp_plans_directory() -> Fallible<PathBuf> {
    let dir = create_tmp_directory()?;
    write(dir.join("plano_misto.txt"), MIXED_PLAN)?;
    write(
        dir.join("vazio.txt"),
        "Sexta Feira-Descanso\nDia livre.\n",
    )?;
    write(dir.join("notas.md"), "# Notas\n")?;
    Ok(dir)
}
