//! Schedule lifecycle and temporal derivation.
//!
//! The active week is a pure function of the start date, the wall clock, and
//! the active plan's length. It is recomputed on every query rather than
//! cached, so repeated calls naturally reflect elapsed time.

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::db::KvStore;
use crate::entities::ScheduleStart;
use crate::errors::Result;
use crate::storage;

const MS_PER_DAY: i64 = 86_400_000;

/// Inclusive 7-day calendar window covered by one schedule week.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekDateRange {
    /// First day of the week
    pub start: DateTime<Utc>,
    /// Last day of the week, six days after `start`
    pub end: DateTime<Utc>,
}

/// Records the schedule start date, beginning week 1.
pub fn setup_schedule(store: &mut dyn KvStore, start_date: DateTime<Utc>) -> Result<()> {
    info!("Starting schedule at {}", start_date);
    storage::save_schedule_start(store, &ScheduleStart { start_date })
}

/// Returns the active schedule start, `None` when none has been set up.
pub fn schedule_start(store: &dyn KvStore) -> Result<Option<ScheduleStart>> {
    storage::load_schedule_start(store)
}

/// Clears the schedule start and the whole watering ledger together, so no
/// watering record can outlive the start date it refers to.
pub fn reset_schedule(store: &mut dyn KvStore) -> Result<()> {
    info!("Resetting schedule and watering history");
    storage::clear_watering_records(store)?;
    storage::clear_schedule_start(store)
}

/// Computes the active week number from the start date and the wall clock,
/// clamped to `[1, max_weeks]`. `max_weeks` must be the active plan's true
/// week count.
#[must_use]
pub fn current_week(start_date: DateTime<Utc>, max_weeks: u32) -> u32 {
    current_week_at(start_date, Utc::now(), max_weeks)
}

/// [`current_week`] with an explicit clock, for deterministic callers.
///
/// Elapsed days use the absolute difference, so a future-dated start clamps
/// to week 1 the same way day zero does instead of going negative.
#[must_use]
pub fn current_week_at(start_date: DateTime<Utc>, now: DateTime<Utc>, max_weeks: u32) -> u32 {
    let diff_ms = (now - start_date).num_milliseconds().abs();
    let elapsed_days = ceil_div(diff_ms, MS_PER_DAY);
    let week_number = ceil_div(elapsed_days, 7);
    let clamped = week_number.clamp(1, i64::from(max_weeks.max(1)));
    u32::try_from(clamped).unwrap_or(1)
}

/// Returns the calendar window of the given 1-based week number.
#[must_use]
pub fn week_date_range(start_date: DateTime<Utc>, week_number: u32) -> WeekDateRange {
    let offset_days = i64::from(week_number.saturating_sub(1)) * 7;
    let start = start_date + Duration::days(offset_days);
    WeekDateRange {
        start,
        end: start + Duration::days(6),
    }
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    (numerator + denominator - 1) / denominator
}
