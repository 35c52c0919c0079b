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

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use super::PLAN_EXTENSION;

/// Resolves plan names sent by HTTP clients to files inside the plans
/// directory. A name must stay within the directory and name a `.txt` plan.
pub struct SourceLoader {
    /// Absolute path to the plans directory.
    root: PathBuf,
}

#[derive(Debug, PartialEq)]
pub enum SourceLoaderError {
    /// Blank name.
    Empty,
    /// Absolute path.
    Absolute,
    /// The name climbs out of the plans directory with `..`.
    ParentComponent,
    /// Not a `.txt` plan.
    NotPlan,
    /// Symbolic link, even if its target is a plan inside the directory.
    SymbolicLink,
    NotFound,
    /// A directory, or some other non-regular file.
    NotFile,
}

impl SourceLoader {
    pub fn new(root: PathBuf) -> Self {
        assert!(root.is_absolute());
        Self { root }
    }

    /// Resolve `name` to the plan file it refers to. Nested names such as
    /// `ciclo2/plano.txt` are allowed.
    pub fn validate(&self, name: &str) -> Result<PathBuf, SourceLoaderError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SourceLoaderError::Empty);
        }
        let relative = Path::new(name);
        if relative.is_absolute() {
            return Err(SourceLoaderError::Absolute);
        }
        if relative.components().any(|c| c == Component::ParentDir) {
            return Err(SourceLoaderError::ParentComponent);
        }
        if relative.extension().and_then(|ext| ext.to_str()) != Some(PLAN_EXTENSION) {
            return Err(SourceLoaderError::NotPlan);
        }
        let path = self.root.join(relative);
        // `exists` follows links, so check for one first.
        if path.is_symlink() {
            return Err(SourceLoaderError::SymbolicLink);
        }
        if !path.exists() {
            return Err(SourceLoaderError::NotFound);
        }
        if !path.is_file() {
            return Err(SourceLoaderError::NotFile);
        }
        Ok(path)
    }
}
