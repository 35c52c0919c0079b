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
use std::path::Path;
use std::path::PathBuf;

use crate::error::Fallible;
use crate::error::fail;
use crate::source::read_plan;

/// Convert a plan file to JSON. By default the output is written to
/// `<stem>.json` in the current directory.
pub fn convert_file(file: String, output: Option<String>) -> Fallible<()> {
    let input = PathBuf::from(&file);
    let output: PathBuf = match output {
        Some(output) => PathBuf::from(output),
        None => default_output(&input)?,
    };
    convert_plan(&input, &output)?;
    println!("Successfully parsed {} -> {}", file, output.display());
    Ok(())
}

/// Parse `input` and write its days to `output` as pretty-printed JSON.
/// Returns the number of days written.
pub fn convert_plan(input: &Path, output: &Path) -> Fallible<usize> {
    let days = read_plan(input)?;
    let json = serde_json::to_string_pretty(&days)?;
    write(output, json)?;
    Ok(days.len())
}

fn default_output(input: &Path) -> Fallible<PathBuf> {
    match input.file_stem() {
        Some(stem) => {
            let mut name = stem.to_os_string();
            name.push(".json");
            Ok(PathBuf::from(name))
        }
        None => fail(format!("cannot derive an output name from {}", input.display())),
    }
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use serde_json::Value;

    use super::*;
    use crate::helper::create_tmp_plans_directory;

    #[test]
    fn test_convert_plan() -> Fallible<()> {
        let dir = create_tmp_plans_directory()?;
        let output = dir.join("plano_misto.json");
        let count = convert_plan(&dir.join("plano_misto.txt"), &output)?;
        assert_eq!(count, 4);

        let json: Value = serde_json::from_str(&read_to_string(&output)?)?;
        let days = json.as_array().unwrap();
        assert_eq!(days.len(), 4);
        assert_eq!(days[0]["day"], "Segunda Feira-Treino A (Peito e Tríceps)");
        assert_eq!(days[0]["exercises"][0]["name"], "Supino Reto");
        assert_eq!(days[0]["exercises"][0]["details"], "Barra");
        assert_eq!(days[0]["exercises"][2]["details"], Value::Null);
        assert_eq!(days[1]["exercises"][1]["weeks"]["1e5"], "3x12 PE3");
        assert_eq!(days[3]["exercises"], Value::Array(vec![]));
        Ok(())
    }

    #[test]
    fn test_convert_missing_file() -> Fallible<()> {
        let dir = create_tmp_plans_directory()?;
        let result = convert_plan(&dir.join("nope.txt"), &dir.join("nope.json"));
        assert!(result.is_err());
        assert!(!dir.join("nope.json").exists());
        Ok(())
    }

    #[test]
    fn test_default_output() -> Fallible<()> {
        assert_eq!(
            default_output(Path::new("planos/plano_misto.txt"))?,
            PathBuf::from("plano_misto.json")
        );
        assert_eq!(
            default_output(Path::new("plano.v2.txt"))?,
            PathBuf::from("plano.v2.json")
        );
        Ok(())
    }
}
