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

use crate::patterns::LIST_MARKER;
use crate::patterns::take_parenthetical;

/// An exercise header split into its name and its parenthetical note.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ExerciseName {
    pub name: String,
    pub details: Option<String>,
}

/// Split a raw exercise header like `-Leg Press (Máquina)` into `Leg Press`
/// and `Máquina`.
///
/// Only the first parenthesized group is taken as the note; any later group
/// stays part of the name.
pub fn split_name(raw: &str) -> ExerciseName {
    let trimmed = raw.trim();
    let cleaned = trimmed.strip_prefix(LIST_MARKER).unwrap_or(trimmed).trim();
    match take_parenthetical(cleaned) {
        Some((name, details)) => {
            let details = details.trim();
            ExerciseName {
                name: name.trim().to_string(),
                details: if details.is_empty() {
                    None
                } else {
                    Some(details.to_string())
                },
            }
        }
        None => bare(cleaned),
    }
}

fn bare(name: &str) -> ExerciseName {
    ExerciseName {
        name: name.to_string(),
        details: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(raw: &str) -> (String, Option<String>) {
        let ExerciseName { name, details } = split_name(raw);
        (name, details)
    }

    #[test]
    fn test_with_details() {
        assert_eq!(
            split("-Leg Press (Máquina)"),
            ("Leg Press".to_string(), Some("Máquina".to_string()))
        );
    }

    #[test]
    fn test_without_details() {
        assert_eq!(split("-Agachamento"), ("Agachamento".to_string(), None));
    }

    #[test]
    fn test_without_marker() {
        assert_eq!(
            split("  Remada Curvada ( Barra W ) "),
            ("Remada Curvada".to_string(), Some("Barra W".to_string()))
        );
    }

    #[test]
    fn test_only_first_group_is_details() {
        assert_eq!(
            split("-Supino (Barra) inclinado (30 graus)"),
            (
                "Supino inclinado (30 graus)".to_string(),
                Some("Barra".to_string())
            )
        );
    }

    #[test]
    fn test_blank_group_is_absent() {
        assert_eq!(split("-Prancha (  )"), ("Prancha".to_string(), None));
    }

    #[test]
    fn test_only_one_marker_is_stripped() {
        assert_eq!(split("--Pulldown"), ("-Pulldown".to_string(), None));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split(""), (String::new(), None));
    }
}
