//! Persistence gateway - The four persisted records and their round-trips.
//!
//! Each record lives under its own fixed key and round-trips through JSON.
//! Reads are deliberately forgiving: an absent or unparseable record degrades
//! to a well-defined default (logged, never surfaced), so corruption is only
//! ever observed as "no data yet". Writes fully overwrite their record; merge
//! logic, where it exists, belongs to the caller.

mod migrate;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::db::KvStore;
use crate::entities::{AppSettings, FeedingPreset, ScheduleStart, WateringRecord};
use crate::errors::{Error, Result};

/// Key holding the [`ScheduleStart`] record.
pub const SCHEDULE_KEY: &str = "gh-flora-schedule";
/// Key holding the watering record list.
pub const WATERING_KEY: &str = "gh-flora-watering";
/// Key holding the custom preset list.
pub const CUSTOM_PRESETS_KEY: &str = "gh-flora-custom-presets";
/// Key holding the [`AppSettings`] record.
pub const SETTINGS_KEY: &str = "gh-flora-settings";

/// Reads and decodes one record, treating parse failures as absence.
fn read_record<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!("Discarding unreadable record under '{}': {}", key, err);
            Ok(None)
        }
    }
}

/// Encodes and writes one record, fully overwriting the previous value.
fn write_record<T: Serialize>(store: &mut dyn KvStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)
        .map_err(|err| Error::Storage(format!("Failed to encode record '{key}': {err}")))?;
    store.set(key, &raw)
}

/// Returns the schedule start, or `None` when no schedule is set up (or the
/// record is unreadable).
pub fn load_schedule_start(store: &dyn KvStore) -> Result<Option<ScheduleStart>> {
    read_record(store, SCHEDULE_KEY)
}

/// Persists the schedule start record.
pub fn save_schedule_start(store: &mut dyn KvStore, start: &ScheduleStart) -> Result<()> {
    write_record(store, SCHEDULE_KEY, start)
}

/// Removes the schedule start record.
pub fn clear_schedule_start(store: &mut dyn KvStore) -> Result<()> {
    store.remove(SCHEDULE_KEY)
}

/// Returns all watering records, upgraded to the current shape.
///
/// The upgrade happens on every read and only in memory; the repaired
/// records reach the store again on the next
/// [`save_watering_records`] call.
pub fn load_watering_records(store: &dyn KvStore) -> Result<Vec<WateringRecord>> {
    let stored: Vec<migrate::StoredWateringRecord> =
        read_record(store, WATERING_KEY)?.unwrap_or_default();
    Ok(stored.into_iter().map(migrate::repair_watering_record).collect())
}

/// Overwrites the watering record list.
pub fn save_watering_records(store: &mut dyn KvStore, records: &[WateringRecord]) -> Result<()> {
    write_record(store, WATERING_KEY, &records)
}

/// Removes the entire watering record list.
pub fn clear_watering_records(store: &mut dyn KvStore) -> Result<()> {
    store.remove(WATERING_KEY)
}

/// Returns all custom presets, empty when none are stored.
///
/// Legacy phase labels (`grow`, `bloom`) are rewritten to the current ones
/// during deserialization, so callers only ever see current labels.
pub fn load_custom_presets(store: &dyn KvStore) -> Result<Vec<FeedingPreset>> {
    Ok(read_record(store, CUSTOM_PRESETS_KEY)?.unwrap_or_default())
}

/// Overwrites the custom preset list.
pub fn save_custom_presets(store: &mut dyn KvStore, presets: &[FeedingPreset]) -> Result<()> {
    write_record(store, CUSTOM_PRESETS_KEY, &presets)
}

/// Returns the app settings, falling back to the defaults (medium preset,
/// ml/gal) when absent or unreadable.
pub fn load_settings(store: &dyn KvStore) -> Result<AppSettings> {
    Ok(read_record(store, SETTINGS_KEY)?.unwrap_or_default())
}

/// Persists the app settings record.
pub fn save_settings(store: &mut dyn KvStore, settings: &AppSettings) -> Result<()> {
    write_record(store, SETTINGS_KEY, settings)
}
