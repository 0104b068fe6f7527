//! Read-repair of watering records written by earlier releases.
//!
//! Records that predate nutrient tracking carry only `week` and `timestamp`.
//! They are upgraded in memory on every read; the repaired shape is only
//! written back on the ledger's next save.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::entities::{NutrientValues, Phase, WateringRecord};

/// Stage label used when a legacy record never captured one.
pub(crate) const UNKNOWN_STAGE: &str = "Unknown";

/// A watering record as it may appear in storage, with the fields newer
/// releases added left optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredWateringRecord {
    pub week: u32,
    pub timestamp: DateTime<Utc>,
    pub nutrients: Option<NutrientValues>,
    pub phase: Option<Phase>,
    pub growth_stage: Option<String>,
}

/// Upgrades a stored record to the current shape. Already-current records
/// pass through unchanged, so applying this twice equals applying it once.
pub(crate) fn repair_watering_record(stored: StoredWateringRecord) -> WateringRecord {
    WateringRecord {
        week: stored.week,
        timestamp: stored.timestamp,
        nutrients: stored.nutrients.unwrap_or_default(),
        phase: stored.phase.unwrap_or(Phase::Vegetation),
        growth_stage: stored.growth_stage.unwrap_or_else(|| UNKNOWN_STAGE.to_string()),
    }
}
