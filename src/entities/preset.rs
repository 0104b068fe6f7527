//! Preset entity - A named feeding plan: an ordered, non-empty week sequence.
//!
//! Built-in presets come from [`crate::catalog`] and are immutable; custom
//! presets are user-owned, persisted through the gateway, and carry a
//! generated `custom-` prefixed id.

use serde::{Deserialize, Serialize};

use super::schedule::WeekEntry;

/// Feeding intensity tier of a preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetKind {
    /// Lower concentration for sensitive plants
    Light,
    /// Balanced levels for most plants (the default selection)
    Medium,
    /// Higher concentration for vigorous growth
    Aggressive,
    /// User-defined schedule
    Custom,
}

/// A feeding plan: ordered week entries plus identity and display metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedingPreset {
    /// Unique id; built-ins use fixed ids, customs a generated `custom-` id
    pub id: String,
    /// Human-readable name shown in preset pickers
    pub name: String,
    /// Intensity tier, `custom` for user-defined plans
    #[serde(rename = "type")]
    pub kind: PresetKind,
    /// Week entries in week order, never empty
    pub schedule: Vec<WeekEntry>,
}

impl FeedingPreset {
    /// Number of weeks in this plan.
    #[must_use]
    pub fn total_weeks(&self) -> u32 {
        u32::try_from(self.schedule.len()).unwrap_or(u32::MAX)
    }

    /// Looks up a week entry by its 1-based week number.
    ///
    /// `None` is an expected result for out-of-range week numbers; callers
    /// render nothing rather than failing.
    #[must_use]
    pub fn week(&self, week_number: u32) -> Option<&WeekEntry> {
        self.schedule.iter().find(|w| w.week == week_number)
    }

    /// Whether this is a user-defined preset.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.kind == PresetKind::Custom
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::sample_plan;
    use crate::entities::Phase;

    #[test]
    fn week_lookup_by_number() {
        let plan = sample_plan("custom-1", "Test", &[Phase::Vegetation, Phase::Flowering]);
        assert_eq!(plan.total_weeks(), 2);
        assert_eq!(plan.week(2).unwrap().phase, Phase::Flowering);
        assert!(plan.week(3).is_none());
        assert!(plan.week(0).is_none());
    }

    #[test]
    fn kind_serializes_as_type_field() {
        let plan = sample_plan("custom-1", "Test", &[Phase::Vegetation]);
        let json: serde_json::Value = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["type"], "custom");
        assert_eq!(json["id"], "custom-1");
    }
}
