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

use std::path::Path;

use walkdir::WalkDir;

use super::PLAN_EXTENSION;
use crate::error::Fallible;

/// Names of the plan files directly inside `directory`, sorted.
pub fn list_sources(directory: &Path) -> Fallible<Vec<String>> {
    let mut names = Vec::new();
    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(PLAN_EXTENSION) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use std::fs::create_dir;

    use super::*;
    use crate::helper::create_tmp_directory;
    use crate::helper::create_tmp_plans_directory;

    #[test]
    fn test_lists_plan_files() -> Fallible<()> {
        let dir = create_tmp_plans_directory()?;
        create_dir(dir.join("arquivo.txt"))?;
        assert_eq!(list_sources(&dir)?, vec!["plano_misto.txt", "vazio.txt"]);
        Ok(())
    }

    #[test]
    fn test_empty_directory() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        assert!(list_sources(&dir)?.is_empty());
        Ok(())
    }
}
