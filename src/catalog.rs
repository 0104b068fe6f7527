//! Built-in feeding presets, from the published GH Flora Series feed charts.
//!
//! All nutrient values are in ml/gal (the base unit) and converted at display
//! time. Three tiers ship built in:
//! - Light Feed: lower nutrient concentration for sensitive plants
//! - Medium Feed: balanced nutrient levels for most plants (recommended)
//! - Aggressive Feed: higher nutrient concentration for vigorous growth
//!
//! Built-ins are immutable; no operation in this crate mutates them.

use std::sync::LazyLock;

use crate::entities::{FeedingPreset, NutrientValues, Phase, PresetKind, WeekEntry};

/// Id of the built-in light feed preset.
pub const LIGHT_PRESET_ID: &str = "light";
/// Id of the built-in medium feed preset.
pub const MEDIUM_PRESET_ID: &str = "medium";
/// Id of the built-in aggressive feed preset.
pub const AGGRESSIVE_PRESET_ID: &str = "aggressive";
/// Preset selected when no settings exist or a selection dangles.
pub const DEFAULT_PRESET_ID: &str = MEDIUM_PRESET_ID;

fn entry(
    week: u32,
    phase: Phase,
    phase_week: u32,
    growth_stage: &str,
    base: [f64; 3],
    cal_mag: Option<f64>,
    floralicious: Option<f64>,
    kool_bloom: Option<f64>,
) -> WeekEntry {
    WeekEntry {
        week,
        phase,
        phase_week,
        growth_stage: growth_stage.to_string(),
        nutrients: NutrientValues {
            primary: base[0],
            secondary: base[1],
            tertiary: base[2],
            cal_mag,
            floralicious,
            kool_bloom,
        },
    }
}

#[rustfmt::skip]
fn light_feed_schedule() -> Vec<WeekEntry> {
    use Phase::{Flowering, Flush, Vegetation};
    vec![
        // Vegetation (18H photoperiod), weeks 1-4
        entry(1, Vegetation, 1, "Seedling/Clone", [1.7, 1.7, 1.7], None, Some(1.0), None),
        entry(2, Vegetation, 2, "Early Growth", [2.7, 3.8, 1.9], Some(1.9), Some(1.0), None),
        entry(3, Vegetation, 3, "Early Growth", [3.8, 5.3, 2.7], Some(1.9), Some(1.0), None),
        entry(4, Vegetation, 4, "Late Growth", [4.9, 6.1, 3.4], Some(1.9), Some(1.0), None),
        // Flowering (12H photoperiod), weeks 5-12
        entry(5, Flowering, 1, "Early Flowering", [3.8, 4.7, 4.7], Some(1.9), Some(1.0), Some(1.0)),
        entry(6, Flowering, 2, "Early Flowering", [3.8, 4.7, 4.7], Some(1.9), Some(1.0), Some(1.0)),
        entry(7, Flowering, 3, "Mid Flowering", [3.4, 2.7, 6.1], Some(1.9), Some(1.0), Some(1.8)),
        entry(8, Flowering, 4, "Mid Flowering", [3.4, 2.7, 6.1], Some(1.9), Some(1.0), Some(1.8)),
        entry(9, Flowering, 5, "Mid Flowering", [3.4, 2.7, 6.1], Some(1.9), Some(1.0), Some(1.8)),
        entry(10, Flowering, 6, "Late Flowering", [2.8, 2.8, 3.0], Some(1.0), Some(1.0), Some(1.0)),
        entry(11, Flowering, 7, "Late Flowering", [2.8, 2.8, 3.0], Some(1.0), Some(1.0), Some(1.0)),
        entry(12, Flowering, 8, "Ripen", [2.1, 2.1, 3.2], None, None, None),
        // Flush, week 13: plain water
        entry(13, Flush, 9, "Flush", [0.0, 0.0, 0.0], None, None, None),
    ]
}

#[rustfmt::skip]
fn medium_feed_schedule() -> Vec<WeekEntry> {
    use Phase::{Flowering, Flush, Vegetation};
    vec![
        entry(1, Vegetation, 1, "Seedling/Clone", [1.9, 1.9, 1.9], Some(1.9), Some(1.0), None),
        entry(2, Vegetation, 2, "Early Growth", [3.0, 4.5, 2.3], Some(1.9), Some(1.0), None),
        entry(3, Vegetation, 3, "Early Growth", [4.5, 6.1, 3.0], Some(1.9), Some(1.0), None),
        entry(4, Vegetation, 4, "Late Growth", [5.7, 6.6, 4.2], Some(1.9), Some(1.0), None),
        entry(5, Flowering, 1, "Early Flowering", [4.2, 5.3, 5.3], Some(1.9), Some(1.0), Some(1.0)),
        entry(6, Flowering, 2, "Early Flowering", [4.2, 5.3, 5.3], Some(1.9), Some(1.0), Some(1.0)),
        entry(7, Flowering, 3, "Mid Flowering", [3.8, 2.8, 6.8], Some(1.9), Some(1.0), Some(2.0)),
        entry(8, Flowering, 4, "Mid Flowering", [3.8, 2.8, 6.8], Some(1.9), Some(1.0), Some(2.0)),
        entry(9, Flowering, 5, "Mid Flowering", [3.8, 2.8, 6.8], Some(1.9), Some(1.0), Some(2.0)),
        entry(10, Flowering, 6, "Late Flowering", [3.0, 3.0, 3.4], Some(1.0), Some(1.0), Some(1.0)),
        entry(11, Flowering, 7, "Late Flowering", [3.0, 3.0, 3.4], Some(1.0), Some(1.0), Some(1.0)),
        entry(12, Flowering, 8, "Ripen", [2.5, 2.5, 3.6], None, None, None),
        entry(13, Flush, 9, "Flush", [0.0, 0.0, 0.0], None, None, None),
    ]
}

#[rustfmt::skip]
fn aggressive_feed_schedule() -> Vec<WeekEntry> {
    use Phase::{Flowering, Flush, Vegetation};
    vec![
        entry(1, Vegetation, 1, "Seedling/Clone", [2.5, 2.5, 2.5], Some(2.0), Some(1.0), None),
        entry(2, Vegetation, 2, "Early Growth", [3.8, 5.7, 2.8], Some(2.0), Some(1.0), None),
        entry(3, Vegetation, 3, "Early Growth", [5.7, 7.6, 3.8], Some(2.0), Some(1.0), None),
        entry(4, Vegetation, 4, "Late Growth", [7.6, 8.5, 4.7], Some(2.0), Some(2.0), None),
        entry(5, Flowering, 1, "Early Flowering", [5.7, 6.6, 6.6], Some(2.0), Some(2.0), Some(1.0)),
        entry(6, Flowering, 2, "Early Flowering", [5.7, 6.6, 6.6], Some(2.0), Some(2.0), Some(1.0)),
        entry(7, Flowering, 3, "Mid Flowering", [4.7, 3.8, 8.5], Some(2.0), Some(2.0), Some(2.0)),
        entry(8, Flowering, 4, "Mid Flowering", [4.7, 3.8, 8.5], Some(2.0), Some(2.0), Some(2.0)),
        entry(9, Flowering, 5, "Mid Flowering", [4.7, 3.8, 8.5], Some(2.0), Some(2.0), Some(2.0)),
        entry(10, Flowering, 6, "Late Flowering", [3.8, 3.8, 4.2], Some(2.0), Some(2.0), Some(1.0)),
        entry(11, Flowering, 7, "Late Flowering", [3.8, 3.8, 4.2], Some(2.0), Some(2.0), Some(1.0)),
        entry(12, Flowering, 8, "Ripen", [2.8, 2.8, 4.5], None, None, None),
        entry(13, Flush, 9, "Flush", [0.0, 0.0, 0.0], None, None, None),
    ]
}

static PRESETS: LazyLock<Vec<FeedingPreset>> = LazyLock::new(|| {
    vec![
        FeedingPreset {
            id: LIGHT_PRESET_ID.to_string(),
            name: "Light Feed".to_string(),
            kind: PresetKind::Light,
            schedule: light_feed_schedule(),
        },
        FeedingPreset {
            id: MEDIUM_PRESET_ID.to_string(),
            name: "Medium Feed".to_string(),
            kind: PresetKind::Medium,
            schedule: medium_feed_schedule(),
        },
        FeedingPreset {
            id: AGGRESSIVE_PRESET_ID.to_string(),
            name: "Aggressive Feed".to_string(),
            kind: PresetKind::Aggressive,
            schedule: aggressive_feed_schedule(),
        },
    ]
});

/// All built-in presets, in display order (light, medium, aggressive).
#[must_use]
pub fn presets() -> &'static [FeedingPreset] {
    &PRESETS
}

/// Looks up a built-in preset by id.
#[must_use]
pub fn preset_by_id(id: &str) -> Option<&'static FeedingPreset> {
    presets().iter().find(|p| p.id == id)
}

/// The medium built-in, used as the default selection and as the template
/// for new custom presets.
#[must_use]
pub fn default_preset() -> &'static FeedingPreset {
    preset_by_id(DEFAULT_PRESET_ID).unwrap_or(&presets()[0])
}
