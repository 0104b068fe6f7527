//! Settings entity - The singleton app settings record.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::units::Unit;

/// User-facing settings: which preset is active and how amounts display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Id of the selected preset, built-in or custom
    pub selected_preset_id: String,
    /// Display unit for nutrient amounts
    pub unit: Unit,
}

impl Default for AppSettings {
    /// Medium feed in ml/gal, the out-of-the-box configuration.
    fn default() -> Self {
        Self {
            selected_preset_id: catalog::DEFAULT_PRESET_ID.to_string(),
            unit: Unit::default(),
        }
    }
}
