//! Unit conversion tables.
//!
//! Pure lookup-and-compute helpers, independent of the calculator state
//! machine. Length and mass convert through a base unit (meter, gram);
//! temperature uses affine formulas through Celsius.

use crate::error::{CalcError, CalcResult};

/// Length units and their factor to meters.
const LENGTH_UNITS: &[(&str, f64)] = &[
    ("mm", 0.001),
    ("cm", 0.01),
    ("m", 1.0),
    ("km", 1000.0),
    ("in", 0.0254),
    ("ft", 0.3048),
    ("yd", 0.9144),
    ("mi", 1609.344),
];

/// Mass units and their factor to grams.
const MASS_UNITS: &[(&str, f64)] = &[
    ("mg", 0.001),
    ("g", 1.0),
    ("kg", 1000.0),
    ("t", 1_000_000.0),
    ("oz", 28.349523125),
    ("lb", 453.59237),
];

const TEMPERATURE_UNITS: &[&str] = &["c", "f", "k"];

/// Convert `value` between two units of the same category.
///
/// Unit names are matched case-insensitively. A name no table knows, or
/// a pair from different categories, yields [`CalcError::UnknownUnit`].
pub fn convert(value: f64, from: &str, to: &str) -> CalcResult<f64> {
    let from = from.to_lowercase();
    let to = to.to_lowercase();

    if let (Some(f), Some(t)) = (factor(LENGTH_UNITS, &from), factor(LENGTH_UNITS, &to)) {
        return Ok(value * f / t);
    }
    if let (Some(f), Some(t)) = (factor(MASS_UNITS, &from), factor(MASS_UNITS, &to)) {
        return Ok(value * f / t);
    }
    if TEMPERATURE_UNITS.contains(&from.as_str()) && TEMPERATURE_UNITS.contains(&to.as_str()) {
        return Ok(from_celsius(to_celsius(value, &from), &to));
    }

    // One of the names is unknown, or the categories do not match.
    let unknown = if !is_known(&from) { from } else { to };
    Err(CalcError::UnknownUnit(unknown))
}

fn factor(table: &[(&str, f64)], unit: &str) -> Option<f64> {
    table
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, factor)| *factor)
}

fn is_known(unit: &str) -> bool {
    factor(LENGTH_UNITS, unit).is_some()
        || factor(MASS_UNITS, unit).is_some()
        || TEMPERATURE_UNITS.contains(&unit)
}

fn to_celsius(value: f64, unit: &str) -> f64 {
    match unit {
        "f" => (value - 32.0) * 5.0 / 9.0,
        "k" => value - 273.15,
        _ => value,
    }
}

fn from_celsius(celsius: f64, unit: &str) -> f64 {
    match unit {
        "f" => celsius * 9.0 / 5.0 + 32.0,
        "k" => celsius + 273.15,
        _ => celsius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversion() {
        assert_eq!(convert(1.0, "km", "m").unwrap(), 1000.0);
        assert!((convert(12.0, "in", "ft").unwrap() - 1.0).abs() < 1e-12);
        assert!((convert(1.0, "mi", "km").unwrap() - 1.609344).abs() < 1e-12);
    }

    #[test]
    fn test_mass_conversion() {
        assert_eq!(convert(2.0, "kg", "g").unwrap(), 2000.0);
        assert_eq!(convert(16.0, "oz", "lb").unwrap(), 1.0);
    }

    #[test]
    fn test_temperature_conversion() {
        assert_eq!(convert(0.0, "C", "F").unwrap(), 32.0);
        assert_eq!(convert(100.0, "c", "k").unwrap(), 373.15);
        assert_eq!(convert(212.0, "f", "c").unwrap(), 100.0);
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            convert(1.0, "furlong", "m"),
            Err(CalcError::UnknownUnit("furlong".to_string()))
        );
    }

    #[test]
    fn test_category_mismatch_rejected() {
        // Both names are known, but meters are not grams
        assert_eq!(
            convert(1.0, "m", "kg"),
            Err(CalcError::UnknownUnit("kg".to_string()))
        );
    }
}
