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

use std::fmt::Display;
use std::fmt::Formatter;

/// Perceived-exertion level of an instruction, read from the `PE3`, `PE4`
/// and `PE5` markers embedded in its text.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Intensity {
    /// No marker.
    Light,
    /// `PE3`: one rep in reserve.
    Moderate,
    /// `PE4`: complete failure.
    Intense,
    /// `PE5`: partial failure.
    Maximum,
}

impl Intensity {
    /// The highest level whose marker appears in the text.
    pub fn of(text: &str) -> Self {
        if text.contains("PE5") {
            Intensity::Maximum
        } else if text.contains("PE4") {
            Intensity::Intense
        } else if text.contains("PE3") {
            Intensity::Moderate
        } else {
            Intensity::Light
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Intensity::Light => "Leve",
            Intensity::Moderate => "Moderado (1 rep na reserva)",
            Intensity::Intense => "Intenso (Falha completa)",
            Intensity::Maximum => "Máximo (Falha parcial)",
        }
    }
}

impl Display for Intensity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
