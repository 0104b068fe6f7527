//! Settings operations and active-preset resolution.

use tracing::info;

use crate::catalog;
use crate::db::KvStore;
use crate::entities::{AppSettings, FeedingPreset};
use crate::errors::Result;
use crate::storage;
use crate::units::Unit;

/// Returns the stored settings, or the defaults when none exist.
pub fn settings(store: &dyn KvStore) -> Result<AppSettings> {
    storage::load_settings(store)
}

/// Persists the full settings record.
pub fn save_settings(store: &mut dyn KvStore, settings: &AppSettings) -> Result<()> {
    storage::save_settings(store, settings)
}

/// Selects a preset by id, keeping the rest of the settings unchanged.
pub fn update_selected_preset(store: &mut dyn KvStore, preset_id: &str) -> Result<()> {
    let mut current = storage::load_settings(store)?;
    current.selected_preset_id = preset_id.to_string();
    storage::save_settings(store, &current)?;
    info!("Selected preset '{}'", preset_id);
    Ok(())
}

/// Changes the display unit, keeping the rest of the settings unchanged.
pub fn update_unit(store: &mut dyn KvStore, unit: Unit) -> Result<()> {
    let mut current = storage::load_settings(store)?;
    current.unit = unit;
    storage::save_settings(store, &current)?;
    info!("Display unit set to {}", unit);
    Ok(())
}

/// Resolves the selected preset against the built-ins and the stored custom
/// presets.
///
/// A selection that matches nothing (for example after the selected custom
/// preset was deleted) falls back to the medium built-in, so a dangling
/// `selected_preset_id` never reaches the presentation layer.
pub fn active_preset(store: &dyn KvStore) -> Result<FeedingPreset> {
    let current = storage::load_settings(store)?;

    if let Some(preset) = catalog::preset_by_id(&current.selected_preset_id) {
        return Ok(preset.clone());
    }
    let customs = storage::load_custom_presets(store)?;
    Ok(customs
        .into_iter()
        .find(|p| p.id == current.selected_preset_id)
        .unwrap_or_else(|| catalog::default_preset().clone()))
}
