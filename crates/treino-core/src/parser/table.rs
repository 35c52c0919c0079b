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

//! Parser for day blocks written as quoted, column-aligned tables:
//!
//! ```text
//! "Treino 1-","Semana 1e5","Semana 2e6"
//! "-Supino","3x10 PE4",""
//! ```
//!
//! A title row opens a day and declares the week columns; every exercise row
//! after it belongs to that day until the next title row.

use crate::parser::name::ExerciseName;
use crate::parser::name::split_name;
use crate::patterns::is_day_title;
use crate::patterns::is_exercise_cell;
use crate::patterns::quoted_cells;
use crate::types::day::Day;
use crate::types::exercise::Exercise;
use crate::types::week::WeekKey;
use crate::types::week::WeekPlan;

/// Parse every day in a table block. A day is emitted even when none of its
/// rows are exercises.
pub fn parse_table(block: &str) -> Vec<Day> {
    rows(block)
        .iter()
        .map(|row| Row::read(quoted_cells(row)))
        .fold(TableState::default(), TableState::step)
        .finish()
}

/// Group the physical lines of a block into logical rows. A row starts at a
/// line beginning with a quote, and continues onto the following lines while
/// one of its cells is still open. A line beginning with a quote always
/// starts a new row, so a stray quote costs at most its own row.
fn rows(block: &str) -> Vec<String> {
    let mut rows = Vec::new();
    let mut open: Option<String> = None;
    for line in block.lines() {
        let starts_row = line.trim_start().starts_with('"');
        let row = match open.take() {
            Some(pending) if starts_row => {
                rows.push(pending);
                line.to_string()
            }
            Some(mut pending) => {
                pending.push('\n');
                pending.push_str(line);
                pending
            }
            None if starts_row => line.to_string(),
            None => continue,
        };
        if has_open_quote(&row) {
            open = Some(row);
        } else {
            rows.push(row);
        }
    }
    if let Some(row) = open {
        rows.push(row);
    }
    rows
}

fn has_open_quote(row: &str) -> bool {
    row.matches('"').count() % 2 == 1
}

enum Row {
    /// A row whose first cell is a day title. The rest are week headers.
    DayTitle { title: String, headers: Vec<WeekKey> },
    /// A row whose first cell is an exercise header.
    Exercise { header: String, cells: Vec<String> },
    /// Captions, empty rows, anything else.
    Other,
}

impl Row {
    fn read(cells: Vec<String>) -> Self {
        let mut cells = cells.into_iter();
        let Some(first) = cells.next() else {
            return Row::Other;
        };
        if is_day_title(&first) {
            Row::DayTitle {
                title: first,
                headers: cells.map(|cell| WeekKey::from_header(&cell)).collect(),
            }
        } else if is_exercise_cell(&first) {
            Row::Exercise {
                header: first,
                cells: cells.collect(),
            }
        } else {
            Row::Other
        }
    }
}

/// A day whose rows are still being read.
struct OpenDay {
    title: String,
    exercises: Vec<Exercise>,
}

impl OpenDay {
    fn close(self) -> Day {
        Day::new(self.title, self.exercises)
    }
}

#[derive(Default)]
struct TableState {
    current_day: Option<OpenDay>,
    pending_headers: Vec<WeekKey>,
    days: Vec<Day>,
}

impl TableState {
    fn step(mut self, row: Row) -> Self {
        match row {
            Row::DayTitle { title, headers } => {
                if let Some(day) = self.current_day.take() {
                    self.days.push(day.close());
                }
                self.current_day = Some(OpenDay {
                    title,
                    exercises: Vec::new(),
                });
                self.pending_headers = headers;
            }
            Row::Exercise { header, cells } => {
                if let Some(day) = self.current_day.as_mut() {
                    day.exercises
                        .push(read_exercise(&header, cells, &self.pending_headers));
                }
            }
            Row::Other => {}
        }
        self
    }

    fn finish(mut self) -> Vec<Day> {
        if let Some(day) = self.current_day.take() {
            self.days.push(day.close());
        }
        self.days
    }
}

fn read_exercise(header: &str, cells: Vec<String>, headers: &[WeekKey]) -> Exercise {
    let ExerciseName { name, details } = split_name(header);
    let mut weeks = WeekPlan::new();
    // Cells past the last header are dropped by the zip.
    for (key, cell) in headers.iter().zip(cells) {
        let cell = cell.trim();
        if !cell.is_empty() {
            weeks.insert(key.clone(), cell);
        }
    }
    Exercise::new(name, details, weeks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_day() {
        let block = "Treino 1-\nThe following table:\n\"Treino 1-\",\"Semana 1e5\",\"Semana 2e6\"\n\"-Supino\",\"3x10 PE4\",\"\"\n";
        let days = parse_table(block);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].title(), "Treino 1-");
        let exercises = days[0].exercises();
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].name(), "Supino");
        assert_eq!(exercises[0].details(), None);
        let weeks: Vec<(&str, &str)> = exercises[0]
            .weeks()
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        assert_eq!(weeks, vec![("1e5", "3x10 PE4")]);
    }

    #[test]
    fn test_several_days_in_one_block() {
        let block = concat!(
            "The following table:\n",
            "\"Treino 1-Peito\",\"Semana 1e5\"\n",
            "\"-Supino (Barra)\",\"3x10\"\n",
            "Legenda: PE = percepção de esforço\n",
            "\"Treino 2-Costas\",\"Semana 1e5\",\"Semana 2e6\"\n",
            "\"-Remada\",\"3x12\",\"3x10 PE4\"\n",
            "\"-Pulldown\",\"\",\"4x8\"\n",
        );
        let days = parse_table(block);
        let titles: Vec<&str> = days.iter().map(Day::title).collect();
        assert_eq!(titles, vec!["Treino 1-Peito", "Treino 2-Costas"]);
        assert_eq!(days[0].exercises().len(), 1);
        assert_eq!(days[0].exercises()[0].details(), Some("Barra"));
        assert_eq!(days[1].exercises().len(), 2);
        assert_eq!(days[1].exercises()[0].weeks().get("2e6"), Some("3x10 PE4"));
        let pulldown = &days[1].exercises()[1];
        assert_eq!(pulldown.weeks().get("1e5"), None);
        assert_eq!(pulldown.weeks().get("2e6"), Some("4x8"));
    }

    #[test]
    fn test_multiline_cell() {
        let block = "\"Sábado-Extra\",\"Semana 1e5\"\n\"-Agachamento\",\"4x6\n   PE5\"\n";
        let days = parse_table(block);
        assert_eq!(days.len(), 1);
        assert_eq!(
            days[0].exercises()[0].weeks().get("1e5"),
            Some("4x6 PE5")
        );
    }

    #[test]
    fn test_stray_quote_stays_in_its_row() {
        let block = concat!(
            "\"Treino 1-\",\"Semana 1e5\"\n",
            "\"-Rosca 21\"s\",\"3x21\"\n",
            "\"-Supino\",\"3x10\"\n",
            "\"Treino 2-\",\"Semana 1e5\"\n",
            "\"-Remada\",\"3x12\"\n",
        );
        let days = parse_table(block);
        let titles: Vec<&str> = days.iter().map(Day::title).collect();
        assert_eq!(titles, vec!["Treino 1-", "Treino 2-"]);
        let names: Vec<&str> = days[0].exercises().iter().map(Exercise::name).collect();
        assert_eq!(names, vec!["Rosca 21", "Supino"]);
        assert_eq!(days[0].exercises()[1].weeks().get("1e5"), Some("3x10"));
        assert_eq!(days[1].exercises()[0].weeks().get("1e5"), Some("3x12"));
    }

    #[test]
    fn test_exercise_with_only_empty_cells_is_kept() {
        let block = "\"Treino 1-\",\"Semana 1e5\",\"Semana 2e6\"\n\"-Mobilidade\",\"\",\"  \"\n";
        let days = parse_table(block);
        assert_eq!(days[0].exercises().len(), 1);
        let mobilidade = &days[0].exercises()[0];
        assert_eq!(mobilidade.name(), "Mobilidade");
        assert!(mobilidade.weeks().is_empty());
    }

    #[test]
    fn test_empty_day_is_kept() {
        let days = parse_table("The following table:\n\"Treino 4-\",\"Semana 1e5\"\n");
        assert_eq!(days.len(), 1);
        assert!(days[0].exercises().is_empty());
    }

    #[test]
    fn test_exercise_without_day_is_ignored() {
        let days = parse_table("\"-Supino\",\"3x10\"\n\"Treino 1-\",\"Semana 1e5\"\n");
        assert_eq!(days.len(), 1);
        assert!(days[0].exercises().is_empty());
    }

    #[test]
    fn test_extra_cells_are_dropped() {
        let days = parse_table("\"Treino 1-\",\"Semana 1e5\"\n\"-Supino\",\"3x10\",\"3x8\"\n");
        let weeks = days[0].exercises()[0].weeks();
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks.get("1e5"), Some("3x10"));
    }

    #[test]
    fn test_no_rows() {
        assert!(parse_table("The following table:\nnothing here\n").is_empty());
    }
}
