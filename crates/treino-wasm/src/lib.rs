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

//! WASM bindings for treino - parses training plans in the browser.

use wasm_bindgen::prelude::*;
use web_sys::console;

use treino_core::Day;
use treino_core::Intensity;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console::log_1(&"treino WASM initialized".into());
}

/// Parse a plan document. Returns the days as a JSON array.
#[wasm_bindgen(js_name = parseDocument)]
pub fn parse_document(text: &str) -> Result<String, JsValue> {
    document_json(text).map_err(|e| JsValue::from_str(&format!("Failed to encode days: {}", e)))
}

/// Given the JSON produced by `parseDocument`, return the sorted week
/// options as a JSON array.
#[wasm_bindgen(js_name = weekOptions)]
pub fn week_options(days_json: &str) -> Result<String, JsValue> {
    week_options_json(days_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to read days JSON: {}", e)))
}

/// Describe the perceived-exertion level of an instruction.
#[wasm_bindgen]
pub fn intensity(instruction: &str) -> String {
    Intensity::of(instruction).description().to_string()
}

fn document_json(text: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string(&treino_core::parse_document(text))
}

fn week_options_json(days_json: &str) -> Result<String, serde_json::Error> {
    let days: Vec<Day> = serde_json::from_str(days_json)?;
    serde_json::to_string(&treino_core::week_options(&days))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_json() {
        let json = document_json("Treino 1-\n-Supino (Barra)\nSemana 1e5 3x10 PE4").unwrap();
        assert_eq!(
            json,
            r#"[{"day":"Treino 1-","exercises":[{"name":"Supino","details":"Barra","weeks":{"1e5":"3x10 PE4"}}]}]"#
        );
    }

    #[test]
    fn test_week_options_json() {
        let days = document_json("Treino 1-\n-Supino\nSemana 2e6 3x8\nSemana 1e5 3x10").unwrap();
        let json = week_options_json(&days).unwrap();
        assert_eq!(
            json,
            r#"[{"value":"1e5","label":"Semanas 1 e 5","number":1},{"value":"2e6","label":"Semanas 2 e 6","number":2}]"#
        );
    }

    #[test]
    fn test_week_options_rejects_bad_json() {
        assert!(week_options_json("not json").is_err());
    }

    #[test]
    fn test_intensity() {
        assert_eq!(intensity("4x6 PE5"), "Máximo (Falha parcial)");
    }
}
