//! Physical and mathematical constants table.

use serde::Serialize;

use crate::error::{CalcError, CalcResult};

/// One row of the constants table.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Constant {
    pub name: &'static str,
    pub symbol: &'static str,
    pub value: f64,
    /// SI unit, or `""` for dimensionless values.
    pub unit: &'static str,
}

const CONSTANTS: &[Constant] = &[
    Constant {
        name: "pi",
        symbol: "π",
        value: std::f64::consts::PI,
        unit: "",
    },
    Constant {
        name: "e",
        symbol: "e",
        value: std::f64::consts::E,
        unit: "",
    },
    Constant {
        name: "golden-ratio",
        symbol: "φ",
        value: 1.618033988749895,
        unit: "",
    },
    Constant {
        name: "speed-of-light",
        symbol: "c",
        value: 299_792_458.0,
        unit: "m/s",
    },
    Constant {
        name: "gravity",
        symbol: "g",
        value: 9.80665,
        unit: "m/s²",
    },
    Constant {
        name: "avogadro",
        symbol: "Nₐ",
        value: 6.02214076e23,
        unit: "1/mol",
    },
    Constant {
        name: "planck",
        symbol: "h",
        value: 6.62607015e-34,
        unit: "J·s",
    },
    Constant {
        name: "boltzmann",
        symbol: "k",
        value: 1.380649e-23,
        unit: "J/K",
    },
    Constant {
        name: "elementary-charge",
        symbol: "q",
        value: 1.602176634e-19,
        unit: "C",
    },
];

/// All known constants, in table order.
pub fn all() -> &'static [Constant] {
    CONSTANTS
}

/// Look up a constant by name (case-insensitive).
pub fn lookup(name: &str) -> CalcResult<&'static Constant> {
    let needle = name.to_lowercase();
    CONSTANTS
        .iter()
        .find(|c| c.name == needle)
        .ok_or_else(|| CalcError::UnknownFunction(name.to_string()))
}
