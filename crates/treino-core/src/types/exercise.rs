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

use serde::Deserialize;
use serde::Serialize;

use crate::types::week::WeekPlan;

/// One exercise of a training day.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name, without the list marker and the parenthetical note.
    name: String,
    /// The parenthetical note, e.g. the equipment to use.
    details: Option<String>,
    /// Instructions for each week group.
    weeks: WeekPlan,
}

impl Exercise {
    pub fn new(name: String, details: Option<String>, weeks: WeekPlan) -> Self {
        Self {
            name,
            details,
            weeks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn weeks(&self) -> &WeekPlan {
        &self.weeks
    }
}
