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

//! Parser for day blocks written as free-flowing text:
//!
//! ```text
//! Segunda Feira-Treino A
//! -Supino (Barra)
//! Semana 1e5 3x10 PE4
//! Semana 2e6 3x8 PE5
//! ```

use crate::parser::name::ExerciseName;
use crate::parser::name::split_name;
use crate::patterns::collapse_whitespace;
use crate::patterns::exercise_boundaries;
use crate::patterns::split_before;
use crate::patterns::take_week_marker;
use crate::patterns::week_marker_offsets;
use crate::types::day::Day;
use crate::types::exercise::Exercise;
use crate::types::week::WeekKey;
use crate::types::week::WeekPlan;

const UNTITLED: &str = "Untitled";

/// Parse a line-format day block. Exercises without any week instruction
/// are dropped, and a day left with no exercises is not returned.
pub fn parse_lines(block: &str) -> Option<Day> {
    let block = block.trim();
    let (title, content) = match block.split_once('\n') {
        Some((title, content)) => (title.trim(), content),
        None => (block, ""),
    };
    let title = if title.is_empty() { UNTITLED } else { title };

    let exercises: Vec<Exercise> = split_before(content, &exercise_boundaries(content))
        .into_iter()
        .filter(|chunk| !chunk.trim().is_empty())
        .filter_map(read_exercise)
        .collect();

    if exercises.is_empty() {
        log::debug!("Dropping day {title:?}: no exercises with week instructions.");
        None
    } else {
        Some(Day::new(title.to_string(), exercises))
    }
}

fn read_exercise(chunk: &str) -> Option<Exercise> {
    let chunk = chunk.trim();
    let (header, body) = chunk.split_once('\n').unwrap_or((chunk, ""));
    let ExerciseName { name, details } = split_name(header);

    let mut weeks = WeekPlan::new();
    for span in split_before(body, &week_marker_offsets(body)) {
        if let Some((key, instruction)) = read_week(span) {
            weeks.insert(key, instruction);
        }
    }

    if weeks.is_empty() {
        log::debug!("Dropping exercise {name:?}: no week instructions.");
        return None;
    }
    Some(Exercise::new(name, details, weeks))
}

/// Read one `Semana <n>e<m> ...` span. The marker must be on the span's
/// first line; the instruction is the rest of that line plus every line
/// after it.
fn read_week(span: &str) -> Option<(WeekKey, String)> {
    let span = span.trim();
    let (first, rest) = span.split_once('\n').unwrap_or((span, ""));
    let (key, remainder) = take_week_marker(first)?;
    let instruction = collapse_whitespace(&format!("{remainder} {rest}"));
    Some((WeekKey::new(key), instruction))
}
