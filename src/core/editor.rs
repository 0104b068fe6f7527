//! Plan editing - week list mutations and the invariants they preserve.
//!
//! Week numbers stay contiguous from 1, a plan never becomes empty, and a
//! vegetation week never follows a flowering one. These operations work on a
//! plan in memory; persisting the result is the caller's move (see
//! [`crate::core::presets::save_custom_preset`]).

use crate::entities::{FeedingPreset, Nutrient, NutrientValues, Phase, WeekEntry};
use crate::errors::{Error, Result};

/// Stage label given to a freshly added week.
const NEW_STAGE: &str = "New Stage";

/// Appends a week to the end of the plan, continuing the last week's phase
/// with a zero dose.
pub fn add_week(plan: &mut FeedingPreset) {
    let (phase, phase_week) = plan
        .schedule
        .last()
        .map_or((Phase::Vegetation, 1), |last| (last.phase, last.phase_week + 1));

    let week = u32::try_from(plan.schedule.len()).unwrap_or(u32::MAX).saturating_add(1);
    plan.schedule.push(WeekEntry {
        week,
        phase,
        phase_week,
        growth_stage: NEW_STAGE.to_string(),
        nutrients: NutrientValues::default(),
    });
}

/// Removes the given week and renumbers the remainder contiguously from 1.
///
/// Fails with [`Error::LastWeek`] when `week_number` is the plan's only
/// week, leaving the plan unchanged. Removing a week number that does not
/// exist is a no-op.
pub fn remove_week(plan: &mut FeedingPreset, week_number: u32) -> Result<()> {
    if plan.schedule.len() <= 1 {
        return Err(Error::LastWeek);
    }
    plan.schedule.retain(|w| w.week != week_number);
    for (index, entry) in plan.schedule.iter_mut().enumerate() {
        entry.week = u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1);
    }
    Ok(())
}

/// Sets the phase of one week.
///
/// Setting `Flowering` cascades forward: every later vegetation week flips
/// to flowering, since a plant cannot re-enter vegetative growth. Setting
/// `Vegetation` performs no backward rewrite; gate it on
/// [`can_select_vegetation`] in the presentation layer.
pub fn set_phase(plan: &mut FeedingPreset, week_number: u32, phase: Phase) {
    let Some(index) = plan.schedule.iter().position(|w| w.week == week_number) else {
        return;
    };
    plan.schedule[index].phase = phase;

    if phase == Phase::Flowering {
        for entry in &mut plan.schedule[index + 1..] {
            if entry.phase == Phase::Vegetation {
                entry.phase = Phase::Flowering;
            }
        }
    }
}

/// Whether `week_number` may be set to vegetation: true only when no
/// strictly earlier week is flowering.
#[must_use]
pub fn can_select_vegetation(plan: &FeedingPreset, week_number: u32) -> bool {
    !plan
        .schedule
        .iter()
        .any(|w| w.week < week_number && w.phase == Phase::Flowering)
}

/// Sets the stage label of one week. Unknown week numbers are a no-op.
pub fn set_growth_stage(plan: &mut FeedingPreset, week_number: u32, growth_stage: &str) {
    if let Some(entry) = plan.schedule.iter_mut().find(|w| w.week == week_number) {
        entry.growth_stage = growth_stage.to_string();
    }
}

/// Sets one nutrient amount of one week. Unknown week numbers are a no-op.
pub fn set_nutrient(plan: &mut FeedingPreset, week_number: u32, nutrient: Nutrient, amount: f64) {
    if let Some(entry) = plan.schedule.iter_mut().find(|w| w.week == week_number) {
        entry.nutrients.set_amount(nutrient, amount);
    }
}
