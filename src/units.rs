//! Display unit conversion for nutrient amounts.
//!
//! All stored amounts are ml per gallon; conversion happens only at display
//! time and is pure arithmetic rounded to two decimal places.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

// Conversion factors
const ML_PER_GALLON: f64 = 3785.41; // 1 US gallon = 3785.41 ml
const ML_PER_5L: f64 = 5000.0;
const ML_PER_LITER: f64 = 1000.0;

/// Supported display units. Closed set; the stored base unit is `ml/gal`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    /// Milliliters per US gallon (the base unit)
    #[default]
    #[serde(rename = "ml/gal")]
    MlPerGal,
    /// Milliliters per 5 liters
    #[serde(rename = "ml/5L")]
    MlPer5L,
    /// Milliliters per liter
    #[serde(rename = "ml/L")]
    MlPerL,
}

impl Unit {
    /// Short quantity label for rendering next to an amount.
    #[must_use]
    pub fn label(self) -> &'static str {
        "ml"
    }

    /// Full unit description for pickers and tooltips.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Unit::MlPerGal => "per Gallon",
            Unit::MlPer5L => "per 5 Liters",
            Unit::MlPerL => "per Liter",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Unit::MlPerGal => "ml/gal",
            Unit::MlPer5L => "ml/5L",
            Unit::MlPerL => "ml/L",
        };
        f.write_str(s)
    }
}

impl FromStr for Unit {
    type Err = Error;

    /// Parses a unit label. This is the one place an unknown unit can appear
    /// (hand-edited settings or configuration text); everywhere else the
    /// closed enum makes bad units unrepresentable.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ml/gal" => Ok(Unit::MlPerGal),
            "ml/5L" => Ok(Unit::MlPer5L),
            "ml/L" => Ok(Unit::MlPerL),
            other => Err(Error::InvalidUnit(other.to_string())),
        }
    }
}

/// Converts an amount from the ml/gal base unit to `target_unit`, rounded to
/// two decimal places.
#[must_use]
pub fn convert(ml_per_gal: f64, target_unit: Unit) -> f64 {
    match target_unit {
        Unit::MlPerGal => round2(ml_per_gal),
        Unit::MlPer5L => round2(ml_per_gal * (ML_PER_5L / ML_PER_GALLON)),
        Unit::MlPerL => round2(ml_per_gal * (ML_PER_LITER / ML_PER_GALLON)),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn base_unit_is_identity_with_rounding() {
        assert_eq!(convert(1.9, Unit::MlPerGal), 1.9);
        assert_eq!(convert(3.456, Unit::MlPerGal), 3.46);
        assert_eq!(convert(0.0, Unit::MlPerGal), 0.0);
    }

    #[test]
    fn converts_to_five_liters() {
        // 100 ml/gal * (5000 / 3785.41) = 132.086..., rounded to 2 places
        assert_eq!(convert(100.0, Unit::MlPer5L), 132.09);
        assert_eq!(convert(0.0, Unit::MlPer5L), 0.0);
    }

    #[test]
    fn converts_to_liters() {
        // 100 ml/gal * (1000 / 3785.41) = 26.417...
        assert_eq!(convert(100.0, Unit::MlPerL), 26.42);
    }

    #[test]
    fn parses_known_labels_and_rejects_unknown() {
        assert_eq!("ml/gal".parse::<Unit>().ok(), Some(Unit::MlPerGal));
        assert_eq!("ml/5L".parse::<Unit>().ok(), Some(Unit::MlPer5L));
        assert_eq!("ml/L".parse::<Unit>().ok(), Some(Unit::MlPerL));
        assert!(matches!(
            "oz/gal".parse::<Unit>(),
            Err(Error::InvalidUnit(label)) if label == "oz/gal"
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for unit in [Unit::MlPerGal, Unit::MlPer5L, Unit::MlPerL] {
            assert_eq!(unit.to_string().parse::<Unit>().ok(), Some(unit));
            assert_eq!(unit.label(), "ml");
        }
        assert_eq!(Unit::MlPerGal.description(), "per Gallon");
        assert_eq!(Unit::MlPer5L.description(), "per 5 Liters");
        assert_eq!(Unit::MlPerL.description(), "per Liter");
    }

    #[test]
    fn unit_serializes_to_its_label() {
        #![allow(clippy::unwrap_used)]
        assert_eq!(serde_json::to_string(&Unit::MlPer5L).unwrap(), "\"ml/5L\"");
        let unit: Unit = serde_json::from_str("\"ml/L\"").unwrap();
        assert_eq!(unit, Unit::MlPerL);
    }
}
