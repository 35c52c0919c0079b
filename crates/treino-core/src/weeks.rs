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

use crate::types::day::Day;
use crate::types::week::WeekKey;

/// One selectable week group, for display.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct WeekOption {
    /// The week key, e.g. `1e5`.
    pub value: WeekKey,
    /// E.g. `Semanas 1 e 5`.
    pub label: String,
    /// 1-based position in the sorted list.
    pub number: usize,
}

/// Every week key used by any exercise, deduplicated and ordered by the
/// key's leading number. Keys without a leading number go last, in order of
/// first appearance.
pub fn week_options(days: &[Day]) -> Vec<WeekOption> {
    let mut keys: Vec<&WeekKey> = Vec::new();
    for key in days
        .iter()
        .flat_map(Day::exercises)
        .flat_map(|exercise| exercise.weeks().keys())
    {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    // Stable, so ties keep first-appearance order.
    keys.sort_by_key(|key| key.leading_number().unwrap_or(u32::MAX));
    keys.into_iter()
        .enumerate()
        .map(|(idx, key)| WeekOption {
            value: key.clone(),
            label: key.label(),
            number: idx + 1,
        })
        .collect()
}
