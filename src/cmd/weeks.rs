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

use treino_core::WeekOption;
use treino_core::week_options;

use crate::error::Fallible;
use crate::source::read_plan;

/// Print the week groups used by a plan.
pub fn print_weeks(file: String) -> Fallible<()> {
    let days = read_plan(&PathBuf::from(file))?;
    let options = week_options(&days);
    if options.is_empty() {
        println!("No week groups found.");
        return Ok(());
    }
    print!("{}", render_weeks(&options));
    Ok(())
}

fn render_weeks(options: &[WeekOption]) -> String {
    options
        .iter()
        .map(|option| format!("{}. {} ({})\n", option.number, option.label, option.value))
        .collect()
}
