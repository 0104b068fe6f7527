//! Schedule entities - The rows of a feeding plan and the schedule start marker.
//!
//! Each week of a plan carries its growth phase, a descriptive stage label,
//! and the nutrient amounts to dose that week. Amounts are always stored in
//! the base unit (ml per gallon) and converted at display time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Growth phase of the plant, driving the nutrient mix for a week.
///
/// Stored data written by earlier releases may still carry the labels
/// `grow` and `bloom`; those deserialize through `LegacyPhase` and are
/// upgraded on every read, so in-memory values only ever use the current
/// three variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "LegacyPhase")]
pub enum Phase {
    /// Vegetative growth (18H photoperiod)
    Vegetation,
    /// Flowering (12H photoperiod)
    Flowering,
    /// Final plain-water flush, no nutrients dosed
    Flush,
}

/// Phase labels as they may appear in persisted records, including the
/// retired `grow`/`bloom` spelling. Closed set: adding a label here forces
/// the upgrade match below to handle it.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LegacyPhase {
    Grow,
    Bloom,
    Vegetation,
    Flowering,
    Flush,
}

impl From<LegacyPhase> for Phase {
    fn from(phase: LegacyPhase) -> Self {
        match phase {
            LegacyPhase::Grow | LegacyPhase::Vegetation => Phase::Vegetation,
            LegacyPhase::Bloom | LegacyPhase::Flowering => Phase::Flowering,
            LegacyPhase::Flush => Phase::Flush,
        }
    }
}

/// Identifies one nutrient column of the schedule, for editor updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nutrient {
    /// Required micro-nutrient base (historically `FloraMicro`)
    Primary,
    /// Required growth base (historically `FloraGro`)
    Secondary,
    /// Required bloom base (historically `FloraBloom`)
    Tertiary,
    /// Optional calcium/magnesium supplement
    CalMag,
    /// Optional organic bloom enhancer
    Floralicious,
    /// Optional flowering booster
    KoolBloom,
}

/// Nutrient amounts for one week, in ml per gallon.
///
/// The three base nutrients are always present; the supplements are only
/// present in weeks where they are dosed. The default value is an all-zero
/// dose with no supplements, which is what a flush week and a freshly added
/// editor week both use.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientValues {
    /// Required micro-nutrient base amount
    pub primary: f64,
    /// Required growth base amount
    pub secondary: f64,
    /// Required bloom base amount
    pub tertiary: f64,
    /// Calcium/magnesium supplement, if dosed this week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cal_mag: Option<f64>,
    /// Organic bloom enhancer, if dosed this week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floralicious: Option<f64>,
    /// Flowering booster, if dosed this week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kool_bloom: Option<f64>,
}

impl NutrientValues {
    /// Returns the amount for one nutrient, `None` when a supplement is not
    /// dosed this week.
    #[must_use]
    pub fn amount(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Primary => Some(self.primary),
            Nutrient::Secondary => Some(self.secondary),
            Nutrient::Tertiary => Some(self.tertiary),
            Nutrient::CalMag => self.cal_mag,
            Nutrient::Floralicious => self.floralicious,
            Nutrient::KoolBloom => self.kool_bloom,
        }
    }

    /// Sets the amount for one nutrient. Setting a supplement to zero or a
    /// negative value removes it, keeping "present means dosed" true.
    pub fn set_amount(&mut self, nutrient: Nutrient, amount: f64) {
        let amount = amount.max(0.0);
        let supplement = (amount > 0.0).then_some(amount);
        match nutrient {
            Nutrient::Primary => self.primary = amount,
            Nutrient::Secondary => self.secondary = amount,
            Nutrient::Tertiary => self.tertiary = amount,
            Nutrient::CalMag => self.cal_mag = supplement,
            Nutrient::Floralicious => self.floralicious = supplement,
            Nutrient::KoolBloom => self.kool_bloom = supplement,
        }
    }
}

/// One row of a feeding plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekEntry {
    /// 1-based week number, unique and contiguous within a plan
    pub week: u32,
    /// Growth phase for this week
    pub phase: Phase,
    /// Week index within the phase, 1-based
    pub phase_week: u32,
    /// Free-form stage label (e.g. "Early Growth", "Ripen")
    pub growth_stage: String,
    /// Nutrient amounts for the week, flattened into the same record
    #[serde(flatten)]
    pub nutrients: NutrientValues,
}

/// Singleton marker that a schedule is running: the day it started.
///
/// Absence of this record means no schedule has been set up yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStart {
    /// Instant the user started the schedule
    pub start_date: DateTime<Utc>,
}
