//! Watering ledger - at most one watering record per week number.
//!
//! Recording copies the week's nutrient amounts, phase, and stage label at
//! call time, so a later plan edit never changes what history says was
//! applied.

use chrono::Utc;
use tracing::info;

use crate::db::KvStore;
use crate::entities::{NutrientValues, Phase, WateringRecord};
use crate::errors::Result;
use crate::storage;

/// Records a watering for `week`, replacing any existing record for that
/// week. Returns the stored record.
pub fn mark_watered(
    store: &mut dyn KvStore,
    week: u32,
    nutrients: NutrientValues,
    phase: Phase,
    growth_stage: &str,
) -> Result<WateringRecord> {
    let record = WateringRecord {
        week,
        timestamp: Utc::now(),
        nutrients,
        phase,
        growth_stage: growth_stage.to_string(),
    };

    let mut records = storage::load_watering_records(store)?;
    // Upsert: drop any prior record for this week before appending
    records.retain(|r| r.week != week);
    records.push(record.clone());
    storage::save_watering_records(store, &records)?;

    info!("Marked week {} as watered", week);
    Ok(record)
}

/// Returns the watering record for `week`, if one exists.
pub fn watering_record(store: &dyn KvStore, week: u32) -> Result<Option<WateringRecord>> {
    let records = storage::load_watering_records(store)?;
    Ok(records.into_iter().find(|r| r.week == week))
}

/// Removes the watering record for `week`. Removing an unwatered week is a
/// no-op, not an error.
pub fn unmark_watered(store: &mut dyn KvStore, week: u32) -> Result<()> {
    let mut records = storage::load_watering_records(store)?;
    records.retain(|r| r.week != week);
    storage::save_watering_records(store, &records)?;
    info!("Unmarked week {} as watered", week);
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::db::MemoryStore;
    use crate::test_utils::init_test_tracing;

    fn dose(primary: f64) -> NutrientValues {
        NutrientValues {
            primary,
            secondary: 1.0,
            tertiary: 1.0,
            ..NutrientValues::default()
        }
    }

    #[test]
    fn recording_twice_keeps_one_record_with_latest_data() -> Result<()> {
        init_test_tracing();
        let mut store = MemoryStore::new();

        mark_watered(&mut store, 3, dose(1.0), Phase::Vegetation, "Early Growth")?;
        mark_watered(&mut store, 3, dose(2.5), Phase::Vegetation, "Early Growth")?;

        let records = storage::load_watering_records(&store)?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].week, 3);
        assert_eq!(records[0].nutrients.primary, 2.5, "second call's data wins");
        Ok(())
    }

    #[test]
    fn records_are_independent_per_week() -> Result<()> {
        let mut store = MemoryStore::new();

        mark_watered(&mut store, 1, dose(1.0), Phase::Vegetation, "Seedling/Clone")?;
        mark_watered(&mut store, 2, dose(2.0), Phase::Vegetation, "Early Growth")?;

        assert_eq!(watering_record(&store, 1)?.unwrap().nutrients.primary, 1.0);
        assert_eq!(watering_record(&store, 2)?.unwrap().nutrients.primary, 2.0);
        assert!(watering_record(&store, 3)?.is_none());
        Ok(())
    }

    #[test]
    fn record_is_a_snapshot_of_the_dose() -> Result<()> {
        let mut store = MemoryStore::new();
        let mut nutrients = dose(4.2);
        mark_watered(&mut store, 5, nutrients.clone(), Phase::Flowering, "Early Flowering")?;

        // Editing the plan's values afterwards must not rewrite history
        nutrients.primary = 9.9;
        let record = watering_record(&store, 5)?.unwrap();
        assert_eq!(record.nutrients.primary, 4.2);
        assert_eq!(record.phase, Phase::Flowering);
        assert_eq!(record.growth_stage, "Early Flowering");
        Ok(())
    }

    #[test]
    fn unmark_removes_only_that_week() -> Result<()> {
        let mut store = MemoryStore::new();
        mark_watered(&mut store, 1, dose(1.0), Phase::Vegetation, "Seedling/Clone")?;
        mark_watered(&mut store, 2, dose(2.0), Phase::Vegetation, "Early Growth")?;

        unmark_watered(&mut store, 1)?;
        assert!(watering_record(&store, 1)?.is_none());
        assert!(watering_record(&store, 2)?.is_some());

        // Unmarking an unwatered week is a no-op
        unmark_watered(&mut store, 7)?;
        assert_eq!(storage::load_watering_records(&store)?.len(), 1);
        Ok(())
    }
}
