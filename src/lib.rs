//! `FloraFeed` - A feeding-schedule tracker for the GH Flora Series nutrient regimen
//!
//! This crate provides the complete data core for tracking a week-by-week
//! hydroponic feeding plan: the built-in and custom preset schedules, the
//! derivation of the active week from a start date, the per-week watering
//! ledger, and the unit conversion applied to nutrient amounts at display
//! time. All state lives in a small key-value store behind the [`db::KvStore`]
//! trait; presentation layers hold derived copies only.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Built-in feeding preset tables and lookups
pub mod catalog;
/// Storage location configuration (config.toml and environment)
pub mod config;
/// Core business logic - schedule derivation, watering ledger, preset management
pub mod core;
/// Key-value store trait and its SQLite / in-memory implementations
pub mod db;
/// Plain data model shared by catalog, storage, and core
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Persistence gateway - the four persisted records and their migrations
pub mod storage;
/// Display unit conversion for nutrient amounts
pub mod units;

#[cfg(test)]
pub mod test_utils;
