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

use std::path::PathBuf;

use treino_core::Day;
use treino_core::Intensity;

use crate::error::Fallible;
use crate::source::read_plan;

/// Print a plan as indented text. With `week`, only that week group's
/// instructions are shown.
pub fn show_plan(file: String, week: Option<String>) -> Fallible<()> {
    let days = read_plan(&PathBuf::from(file))?;
    print!("{}", render_plan(&days, week.as_deref()));
    Ok(())
}

fn render_plan(days: &[Day], week: Option<&str>) -> String {
    let mut out = String::new();
    for day in days {
        out.push_str(&format!("{}\n", day.title()));
        if day.exercises().is_empty() {
            out.push_str("  (no exercises)\n");
        }
        for exercise in day.exercises() {
            let line = match exercise.details() {
                Some(details) => format!("  {} ({details})\n", exercise.name()),
                None => format!("  {}\n", exercise.name()),
            };
            out.push_str(&line);
            let instructions = exercise
                .weeks()
                .iter()
                .filter(|(key, _)| week.is_none_or(|week| key.as_str() == week));
            for (key, instruction) in instructions {
                let intensity = Intensity::of(instruction);
                out.push_str(&format!("    {}: {instruction} [{intensity}]\n", key.label()));
            }
        }
    }
    out
}
