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

//! treino-core: turns plain text training plans into structured days.
//!
//! A plan is a loosely formatted document of training days. Each day is
//! written either as free text with `Semana <n>e<m>` markers or as a quoted
//! table with one column per week group. This library provides:
//! - Splitting a document into day blocks and parsing both sub-formats
//! - The `Day` / `Exercise` / `WeekPlan` data model (serde-compatible)
//! - Week option listing and perceived-exertion classification for display

pub mod intensity;
pub mod parser;
pub mod patterns;
pub mod types;
pub mod weeks;

// Re-exports for convenience
pub use intensity::Intensity;
pub use parser::name::{ExerciseName, split_name};
pub use parser::parse_document;
pub use types::day::Day;
pub use types::exercise::Exercise;
pub use types::week::{WeekKey, WeekPlan};
pub use weeks::{WeekOption, week_options};
