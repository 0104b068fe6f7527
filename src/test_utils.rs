//! Shared test utilities for `FloraFeed`.
//!
//! Helpers for building in-memory stores and small plans with sensible
//! defaults, so individual tests only spell out what they assert on.

use tracing_subscriber::EnvFilter;

use crate::entities::{FeedingPreset, NutrientValues, Phase, PresetKind, WeekEntry};

/// Installs a tracing subscriber that cooperates with `cargo test` output.
/// Safe to call from every test; later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init();
}

/// Builds one schedule week with a zero dose.
#[must_use]
pub fn sample_week(week: u32, phase: Phase, phase_week: u32) -> WeekEntry {
    WeekEntry {
        week,
        phase,
        phase_week,
        growth_stage: format!("Stage {week}"),
        nutrients: NutrientValues::default(),
    }
}

/// Builds a custom plan whose weeks follow the given phases in order.
/// Phase week counters restart whenever the phase changes.
#[must_use]
pub fn sample_plan(id: &str, name: &str, phases: &[Phase]) -> FeedingPreset {
    let mut schedule = Vec::with_capacity(phases.len());
    let mut previous: Option<Phase> = None;
    let mut phase_week = 0;
    for (index, &phase) in phases.iter().enumerate() {
        phase_week = if previous == Some(phase) { phase_week + 1 } else { 1 };
        previous = Some(phase);
        schedule.push(sample_week(index as u32 + 1, phase, phase_week));
    }

    FeedingPreset {
        id: id.to_string(),
        name: name.to_string(),
        kind: PresetKind::Custom,
        schedule,
    }
}
