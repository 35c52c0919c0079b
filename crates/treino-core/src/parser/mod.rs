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

//! Splits a plan document into day blocks and routes each block to the
//! parser for its sub-format.

pub mod lines;
pub mod name;
pub mod table;

use crate::parser::lines::parse_lines;
use crate::parser::table::parse_table;
use crate::patterns::day_boundaries;
use crate::patterns::is_day_title;
use crate::patterns::is_table_block;
use crate::patterns::normalize_text;
use crate::patterns::split_before;
use crate::types::day::Day;

/// A day block, classified by sub-format.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Block<'a> {
    /// Quoted, column-aligned rows. May describe several days.
    Table(&'a str),
    /// Free text with exercise headers and inline week markers.
    Lines(&'a str),
}

impl<'a> Block<'a> {
    /// Classify a block. Returns `None` for blocks that are neither a table
    /// nor headed by a day title, such as a preamble before the first day.
    pub fn classify(text: &'a str) -> Option<Self> {
        if is_table_block(text) {
            Some(Block::Table(text))
        } else if is_day_title(text.trim_start()) {
            Some(Block::Lines(text))
        } else {
            None
        }
    }

    pub fn parse(self) -> Vec<Day> {
        match self {
            Block::Table(text) => parse_table(text),
            Block::Lines(text) => parse_lines(text).into_iter().collect(),
        }
    }
}

/// Split a document into blocks. Each block starts at a line beginning with
/// a day title (the first block also holds whatever precedes the first
/// title). Blank blocks are dropped.
pub fn split_blocks(text: &str) -> Vec<&str> {
    split_before(text, &day_boundaries(text))
        .into_iter()
        .filter(|block| !block.trim().is_empty())
        .collect()
}

/// Parse a whole plan document into its training days, in source order.
///
/// Parsing never fails: blocks and exercises that cannot be read are
/// skipped.
pub fn parse_document(text: &str) -> Vec<Day> {
    let text = normalize_text(text);
    let mut days = Vec::new();
    for block in split_blocks(&text) {
        match Block::classify(block) {
            Some(block) => days.extend(block.parse()),
            None => {
                let first_line = block.trim_start().lines().next().unwrap_or_default();
                log::debug!("Skipping unrecognized block starting with {first_line:?}.");
            }
        }
    }
    days
}
