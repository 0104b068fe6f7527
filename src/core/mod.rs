//! Core business logic - framework-agnostic schedule, watering, and preset
//! operations. Every function here takes the key-value store explicitly;
//! nothing holds ambient state, and "now" is sampled fresh per call.

pub mod editor;
pub mod presets;
pub mod schedule;
pub mod settings;
pub mod watering;
