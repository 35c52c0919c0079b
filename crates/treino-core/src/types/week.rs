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

use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use crate::patterns::strip_week_header;
use crate::patterns::week_key_numbers;

/// Identifies a pair of weeks sharing one instruction set, e.g. `1e5` for
/// weeks one and five of an eight week cycle.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekKey(String);

impl WeekKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Build a key from a table column header such as `Semana 1e5`.
    pub fn from_header(header: &str) -> Self {
        Self(strip_week_header(header))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two week numbers, when the key has the `<n>e<m>` form.
    pub fn weeks(&self) -> Option<(u32, u32)> {
        week_key_numbers(&self.0)
    }

    /// The integer at the start of the key, if any.
    pub fn leading_number(&self) -> Option<u32> {
        let digits: String = self.0.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }

    /// Human-readable label, e.g. `Semanas 1 e 5`.
    pub fn label(&self) -> String {
        match self.weeks() {
            Some((first, second)) => format!("Semanas {first} e {second}"),
            None => format!("Semanas {}", self.0),
        }
    }
}

impl Display for WeekKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WeekKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The per-week instructions of an exercise.
///
/// Keys are unique and iterate in insertion order. Serializes as a JSON
/// object whose members follow that order.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct WeekPlan {
    entries: Vec<(WeekKey, String)>,
}

impl WeekPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instruction. If the key is already present its text is
    /// replaced and it keeps its original position.
    pub fn insert(&mut self, key: WeekKey, instruction: impl Into<String>) {
        let instruction = instruction.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = instruction,
            None => self.entries.push((key, instruction)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &WeekKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WeekKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<WeekKey>, V: Into<String>> FromIterator<(K, V)> for WeekPlan {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut plan = WeekPlan::new();
        for (key, value) in iter {
            plan.insert(key.into(), value);
        }
        plan
    }
}

impl Serialize for WeekPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct WeekPlanVisitor;

impl<'de> Visitor<'de> for WeekPlanVisitor {
    type Value = WeekPlan;

    fn expecting(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "a map from week keys to instructions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut plan = WeekPlan::new();
        while let Some((key, value)) = access.next_entry::<WeekKey, String>()? {
            plan.insert(key, value);
        }
        Ok(plan)
    }
}

impl<'de> Deserialize<'de> for WeekPlan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(WeekPlanVisitor)
    }
}
