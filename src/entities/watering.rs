//! Watering entity - The record that a week's dose was administered.
//!
//! The nutrient amounts, phase, and stage label are snapshots copied from the
//! plan at the moment of watering, so later plan edits never rewrite history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::schedule::{NutrientValues, Phase};

/// One watering event. The ledger keeps at most one per week number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WateringRecord {
    /// Week number the watering applies to
    pub week: u32,
    /// When the watering was recorded
    pub timestamp: DateTime<Utc>,
    /// Snapshot of the amounts applied, in ml per gallon
    pub nutrients: NutrientValues,
    /// Snapshot of the week's growth phase
    pub phase: Phase,
    /// Snapshot of the week's stage label
    pub growth_stage: String,
}
