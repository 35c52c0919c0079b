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

use crate::types::exercise::Exercise;

/// A training day: its heading and its exercises, in source order.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Day {
    #[serde(rename = "day")]
    title: String,
    exercises: Vec<Exercise>,
}

impl Day {
    pub fn new(title: String, exercises: Vec<Exercise>) -> Self {
        Self { title, exercises }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::week::WeekPlan;

    #[test]
    fn test_wire_format() {
        let weeks: WeekPlan = [("1e5", "3x10 PE4")].into_iter().collect();
        let day = Day::new(
            "Treino 1-".to_string(),
            vec![
                Exercise::new("Supino".to_string(), None, weeks),
                Exercise::new(
                    "Leg Press".to_string(),
                    Some("Máquina".to_string()),
                    WeekPlan::new(),
                ),
            ],
        );
        let value = serde_json::to_value(&day).unwrap();
        assert_eq!(
            value,
            json!({
                "day": "Treino 1-",
                "exercises": [
                    { "name": "Supino", "details": null, "weeks": { "1e5": "3x10 PE4" } },
                    { "name": "Leg Press", "details": "Máquina", "weeks": {} }
                ]
            })
        );
        let back: Day = serde_json::from_value(value).unwrap();
        assert_eq!(back, day);
    }
}
