//! Custom preset management - create, save, delete, import, export.
//!
//! Custom presets are the only mutable plans. They are persisted as one list
//! under a single record; every operation here reads the list, transforms it,
//! and writes it back whole.

use chrono::Utc;
use tracing::info;

use crate::catalog;
use crate::db::KvStore;
use crate::entities::{FeedingPreset, PresetKind};
use crate::errors::{Error, Result};
use crate::storage;

/// Returns all stored custom presets.
pub fn custom_presets(store: &dyn KvStore) -> Result<Vec<FeedingPreset>> {
    storage::load_custom_presets(store)
}

/// Builds a new custom preset seeded from the medium built-in's weeks, with
/// a generated id and a placeholder name.
///
/// The preset is not persisted until [`save_custom_preset`] is called, so an
/// abandoned editor session leaves no trace.
#[must_use]
pub fn new_custom_preset() -> FeedingPreset {
    FeedingPreset {
        id: format!("custom-{}", Utc::now().timestamp_millis()),
        name: "New Custom Preset".to_string(),
        kind: PresetKind::Custom,
        schedule: catalog::default_preset().schedule.clone(),
    }
}

/// Saves a custom preset, replacing any stored preset with the same id.
pub fn save_custom_preset(store: &mut dyn KvStore, preset: &FeedingPreset) -> Result<()> {
    let mut presets = storage::load_custom_presets(store)?;
    match presets.iter_mut().find(|p| p.id == preset.id) {
        Some(existing) => *existing = preset.clone(),
        None => presets.push(preset.clone()),
    }
    storage::save_custom_presets(store, &presets)?;
    info!("Saved custom preset '{}'", preset.id);
    Ok(())
}

/// Deletes a custom preset by id.
///
/// If the deleted preset was the selected one, the caller must reselect a
/// fallback; [`crate::core::settings::active_preset`] already resolves a
/// dangling selection to the medium built-in.
pub fn delete_custom_preset(store: &mut dyn KvStore, id: &str) -> Result<()> {
    let mut presets = storage::load_custom_presets(store)?;
    presets.retain(|p| p.id != id);
    storage::save_custom_presets(store, &presets)?;
    info!("Deleted custom preset '{}'", id);
    Ok(())
}

/// Serializes presets for offline backup. The output is exactly what
/// [`import_presets`] accepts.
pub fn export_presets(presets: &[FeedingPreset]) -> Result<String> {
    serde_json::to_string_pretty(presets)
        .map_err(|err| Error::Storage(format!("Failed to encode preset export: {err}")))
}

/// Imports presets from a JSON document, merging by id: entries matching an
/// existing custom preset replace it in place, new ids are appended, and
/// unmentioned existing presets are kept.
///
/// Parse-then-commit: malformed input fails with [`Error::ImportParse`] and
/// leaves storage untouched. Returns the merged list.
pub fn import_presets(store: &mut dyn KvStore, json: &str) -> Result<Vec<FeedingPreset>> {
    let incoming: Vec<FeedingPreset> = serde_json::from_str(json).map_err(Error::ImportParse)?;

    let mut merged = storage::load_custom_presets(store)?;
    for preset in incoming {
        match merged.iter_mut().find(|p| p.id == preset.id) {
            Some(existing) => *existing = preset,
            None => merged.push(preset),
        }
    }
    storage::save_custom_presets(store, &merged)?;
    info!("Imported presets, {} now stored", merged.len());
    Ok(merged)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::db::MemoryStore;
    use crate::entities::Phase;
    use crate::test_utils::{init_test_tracing, sample_plan};

    #[test]
    fn new_preset_copies_the_medium_template() {
        let preset = new_custom_preset();
        assert!(preset.id.starts_with("custom-"));
        assert_eq!(preset.name, "New Custom Preset");
        assert_eq!(preset.kind, PresetKind::Custom);
        assert_eq!(preset.schedule, catalog::default_preset().schedule);
    }

    #[test]
    fn new_preset_is_not_persisted_until_saved() -> Result<()> {
        let mut store = MemoryStore::new();
        let preset = new_custom_preset();
        assert!(custom_presets(&store)?.is_empty());

        save_custom_preset(&mut store, &preset)?;
        assert_eq!(custom_presets(&store)?, vec![preset]);
        Ok(())
    }

    #[test]
    fn save_upserts_by_id() -> Result<()> {
        let mut store = MemoryStore::new();
        let mut preset = sample_plan("custom-1", "First", &[Phase::Vegetation]);
        save_custom_preset(&mut store, &preset)?;

        preset.name = "Renamed".to_string();
        save_custom_preset(&mut store, &preset)?;

        let stored = custom_presets(&store)?;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Renamed");
        Ok(())
    }

    #[test]
    fn delete_removes_by_id() -> Result<()> {
        let mut store = MemoryStore::new();
        save_custom_preset(&mut store, &sample_plan("custom-1", "A", &[Phase::Vegetation]))?;
        save_custom_preset(&mut store, &sample_plan("custom-2", "B", &[Phase::Vegetation]))?;

        delete_custom_preset(&mut store, "custom-1")?;
        let stored = custom_presets(&store)?;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, "custom-2");

        // Deleting an unknown id is a no-op
        delete_custom_preset(&mut store, "custom-9")?;
        assert_eq!(custom_presets(&store)?.len(), 1);
        Ok(())
    }

    #[test]
    fn import_merges_by_id_preserving_order() -> Result<()> {
        init_test_tracing();
        let mut store = MemoryStore::new();
        save_custom_preset(&mut store, &sample_plan("a", "Old", &[Phase::Vegetation]))?;
        save_custom_preset(&mut store, &sample_plan("b", "Keep", &[Phase::Vegetation]))?;

        let replacement = sample_plan("a", "X", &[Phase::Vegetation, Phase::Flowering]);
        let json = export_presets(std::slice::from_ref(&replacement))?;
        let merged = import_presets(&mut store, &json)?;

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].id, "a");
        assert_eq!(merged[0].name, "X", "matched entry replaced in place");
        assert_eq!(merged[1].id, "b");
        assert_eq!(merged[1].name, "Keep", "unmentioned entry untouched");
        assert_eq!(custom_presets(&store)?, merged);
        Ok(())
    }

    #[test]
    fn import_appends_new_ids() -> Result<()> {
        let mut store = MemoryStore::new();
        save_custom_preset(&mut store, &sample_plan("a", "A", &[Phase::Vegetation]))?;

        let json = export_presets(&[sample_plan("c", "C", &[Phase::Flush])])?;
        let merged = import_presets(&mut store, &json)?;
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].id, "c");
        Ok(())
    }

    #[test]
    fn malformed_import_fails_without_touching_storage() -> Result<()> {
        init_test_tracing();
        let mut store = MemoryStore::new();
        let existing = sample_plan("a", "A", &[Phase::Vegetation]);
        save_custom_preset(&mut store, &existing)?;

        let result = import_presets(&mut store, "{\"definitely\": \"not a preset list\"");
        assert!(matches!(result, Err(Error::ImportParse(_))));
        assert_eq!(custom_presets(&store)?, vec![existing]);
        Ok(())
    }

    #[test]
    fn export_round_trips_through_import() -> Result<()> {
        let mut source = MemoryStore::new();
        let plans = vec![
            sample_plan("custom-1", "Plan A", &[Phase::Vegetation, Phase::Flowering]),
            sample_plan("custom-2", "Plan B", &[Phase::Flush]),
        ];
        for plan in &plans {
            save_custom_preset(&mut source, plan)?;
        }

        let exported = export_presets(&custom_presets(&source)?)?;
        let mut target = MemoryStore::new();
        let imported = import_presets(&mut target, &exported)?;
        assert_eq!(imported, plans);
        Ok(())
    }
}
