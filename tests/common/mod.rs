//! Common test infrastructure
//!
//! This module provides the fixtures needed for end-to-end ingestion tests:
//! temporary trees of catalog and session log files, plus a warehouse store
//! on a temporary database file. Tests should only import from this module.

mod constants;
mod fixtures;

// Public API - this is what tests import
pub use constants::*;
#[allow(unused_imports)]
pub use fixtures::{
    catalog_record, next_song_line, non_play_line, write_record_file, TestWarehouse,
};
