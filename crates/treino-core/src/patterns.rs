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

//! Named pattern predicates and extractors shared by both sub-parsers.
//!
//! Every piece of surface syntax the parser recognizes lives here: the
//! day-title prefixes, the table marker, quoted table cells, exercise
//! boundaries and week markers.

use std::sync::LazyLock;

use regex::Regex;

/// Literal text that marks a block as a quoted table.
pub const TABLE_MARKER: &str = "The following table:";

/// The character that introduces an exercise line.
pub const LIST_MARKER: char = '-';

/// The word that introduces a week group, in both sub-formats.
pub const WEEK_WORD: &str = "Semana";

static DAY_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:Treino \d+-|Segunda Feira-|Terça Feira-|Quarta Feira-|Sexta Feira-|Sábado-)")
        .expect("static regex must compile")
});

static QUOTED_CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)""#).expect("static regex must compile"));

static EMBEDDED_NEWLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*").expect("static regex must compile"));

/// The week-key grammar, e.g. `1e5`. Shared by the inline marker, the table
/// header and key parsing.
const WEEK_KEY_PATTERN: &str = r"\d+e\d+";

// The regex crate has no lookahead, so the uppercase letter is matched and
// the boundary is taken from the start of the marker group. `\p{Lu}` covers
// every Unicode capital (Ç, É, Ó, also Greek or Cyrillic) but not symbols
// such as `×`.
static EXERCISE_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[^\S\n]*(-)\p{Lu}").expect("static regex must compile"));

static WEEK_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{WEEK_WORD}\s+({WEEK_KEY_PATTERN})")).expect("static regex must compile")
});

static WEEK_HEADER_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{WEEK_WORD}\s*")).expect("static regex must compile")
});

static WEEK_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{WEEK_KEY_PATTERN}$")).expect("static regex must compile")
});

static PARENTHETICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(([^)]+)\)").expect("static regex must compile"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex must compile"));

/// Does this text start with one of the recognized day-title prefixes?
pub fn is_day_title(text: &str) -> bool {
    DAY_TITLE_RE.is_match(text)
}

/// Does this block contain the table marker?
pub fn is_table_block(block: &str) -> bool {
    block.contains(TABLE_MARKER)
}

/// Does this table cell introduce an exercise?
pub fn is_exercise_cell(cell: &str) -> bool {
    cell.starts_with(LIST_MARKER)
}

/// Byte offsets of every line (other than the first) that starts with a
/// day-title prefix.
pub fn day_boundaries(text: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if offset > 0 && is_day_title(line) {
            offsets.push(offset);
        }
        offset += line.len();
    }
    offsets
}

/// Byte offsets of every list marker that starts a line and is directly
/// followed by an uppercase letter. A marker at offset zero is included.
pub fn exercise_boundaries(text: &str) -> Vec<usize> {
    EXERCISE_BOUNDARY_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.start())
        .collect()
}

/// Byte offsets of every `Semana <n>e<m>` marker.
pub fn week_marker_offsets(text: &str) -> Vec<usize> {
    WEEK_MARKER_RE.find_iter(text).map(|m| m.start()).collect()
}

/// Find the first week marker in a line. Returns the key token and the line
/// with that marker removed.
pub fn take_week_marker(line: &str) -> Option<(String, String)> {
    let caps = WEEK_MARKER_RE.captures(line)?;
    let whole = caps.get(0)?;
    let key = caps.get(1)?.as_str().to_string();
    let rest = format!("{}{}", &line[..whole.start()], &line[whole.end()..]);
    Some((key, rest))
}

/// Strip a leading `Semana` (and any whitespace after it) from a table
/// header cell.
pub fn strip_week_header(cell: &str) -> String {
    WEEK_HEADER_PREFIX_RE.replace(cell.trim(), "").trim().to_string()
}

/// Parse a strict week key of the form `<n>e<m>`.
pub fn week_key_numbers(key: &str) -> Option<(u32, u32)> {
    if !WEEK_KEY_RE.is_match(key) {
        return None;
    }
    let (first, second) = key.split_once('e')?;
    Some((first.parse().ok()?, second.parse().ok()?))
}

/// Every quoted span in a table row, with embedded newlines folded into a
/// single space and surrounding whitespace trimmed.
pub fn quoted_cells(row: &str) -> Vec<String> {
    QUOTED_CELL_RE
        .captures_iter(row)
        .filter_map(|caps| caps.get(1))
        .map(|m| EMBEDDED_NEWLINE_RE.replace_all(m.as_str(), " ").trim().to_string())
        .collect()
}

/// Find the first parenthesized group with a non-empty interior. Returns
/// the text with that group (and the whitespace before it) removed, and the
/// group's interior.
pub fn take_parenthetical(text: &str) -> Option<(String, &str)> {
    let caps = PARENTHETICAL_RE.captures(text)?;
    let whole = caps.get(0)?;
    let inner = caps.get(1)?.as_str();
    let rest = format!("{}{}", &text[..whole.start()], &text[whole.end()..]);
    Some((rest, inner))
}

/// Collapse every run of whitespace into a single space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Split `text` immediately before each of the given offsets, so that the
/// text at each offset becomes the start of a new piece. Offsets must be
/// ascending char boundaries.
pub fn split_before<'a>(text: &'a str, offsets: &[usize]) -> Vec<&'a str> {
    let mut pieces = Vec::with_capacity(offsets.len() + 1);
    let mut start = 0;
    for &offset in offsets {
        if offset > start {
            pieces.push(&text[start..offset]);
            start = offset;
        }
    }
    pieces.push(&text[start..]);
    pieces
}

/// Normalize line endings to `\n` and drop a leading byte order mark.
pub fn normalize_text(text: &str) -> String {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_titles() {
        assert!(is_day_title("Treino 1-"));
        assert!(is_day_title("Treino 12-Pernas"));
        assert!(is_day_title("Segunda Feira-Treino A"));
        assert!(is_day_title("Terça Feira-Costas"));
        assert!(is_day_title("Sábado-Extra"));
        assert!(!is_day_title("Treino A"));
        assert!(!is_day_title(" Segunda Feira-Treino A"));
        assert!(!is_day_title("Domingo-Descanso"));
    }

    #[test]
    fn test_day_boundaries_skip_first_line() {
        let text = "Segunda Feira-A\nfoo\nQuarta Feira-B\nbar\n";
        assert_eq!(day_boundaries(text), vec![20]);
        assert_eq!(&text[20..34], "Quarta Feira-B");
    }

    #[test]
    fn test_exercise_boundaries() {
        let text = "-Supino\nSemana 1e5 3x10\n  -Élevação\nfaça devagar -Não conta\n-remo";
        let offsets = exercise_boundaries(text);
        assert_eq!(offsets.len(), 2);
        assert_eq!(offsets[0], 0);
        assert!(text[offsets[1]..].starts_with("-Élevação"));
    }

    #[test]
    fn test_boundary_needs_an_uppercase_letter() {
        assert_eq!(exercise_boundaries("-Çadeira extensora"), vec![0]);
        assert_eq!(exercise_boundaries("-Ómega"), vec![0]);
        assert_eq!(exercise_boundaries("-Δέλτα"), vec![0]);
        assert!(exercise_boundaries("-×3 séries").is_empty());
        assert!(exercise_boundaries("-ção").is_empty());
        assert!(exercise_boundaries("-3x10").is_empty());
    }

    #[test]
    fn test_mid_sentence_hyphen_is_not_a_boundary() {
        assert!(exercise_boundaries("movimento lento - sem pressa\n- depois").is_empty());
    }

    #[test]
    fn test_take_week_marker() {
        let (key, rest) = take_week_marker("Semana 2e6 3x8 PE5").unwrap();
        assert_eq!(key, "2e6");
        assert_eq!(rest, " 3x8 PE5");
        assert!(take_week_marker("Semana 1 e 5").is_none());
    }

    #[test]
    fn test_strip_week_header() {
        assert_eq!(strip_week_header("Semana 1e5"), "1e5");
        assert_eq!(strip_week_header(" Semana   3e7 "), "3e7");
        assert_eq!(strip_week_header("1e5"), "1e5");
        assert_eq!(strip_week_header("Observações"), "Observações");
    }

    #[test]
    fn test_week_key_numbers() {
        assert_eq!(week_key_numbers("1e5"), Some((1, 5)));
        assert_eq!(week_key_numbers("12e16"), Some((12, 16)));
        assert_eq!(week_key_numbers("1 e 5"), None);
        assert_eq!(week_key_numbers("Obs"), None);
    }

    #[test]
    fn test_quoted_cells() {
        let row = "\"-Agachamento\",\"4x6\n  PE5\",\"\"";
        assert_eq!(quoted_cells(row), vec!["-Agachamento", "4x6 PE5", ""]);
        assert!(quoted_cells("no quotes here").is_empty());
    }

    #[test]
    fn test_split_before() {
        let text = "aaXbbXcc";
        assert_eq!(split_before(text, &[2, 5]), vec!["aa", "Xbb", "Xcc"]);
        assert_eq!(split_before(text, &[0]), vec!["aaXbbXcc"]);
        assert_eq!(split_before("", &[]), vec![""]);
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("\u{FEFF}a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_take_parenthetical() {
        let (rest, inner) = take_parenthetical("Supino (Barra) reto (x)").unwrap();
        assert_eq!(rest, "Supino reto (x)");
        assert_eq!(inner, "Barra");
        assert!(take_parenthetical("Supino ()").is_none());
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  3x10 \n PE4  "), "3x10 PE4");
    }
}
