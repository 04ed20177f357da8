//! Jukebox Warehouse Library
//!
//! Batch ETL that loads music catalog files and session event logs into a
//! star-schema SQLite warehouse. This library exposes the internal modules
//! for testing and potential reuse.

pub mod config;
pub mod pipeline;
pub mod records;
pub mod transform;
pub mod warehouse;

// Re-export commonly used types for convenience
pub use pipeline::{ingest_catalog, ingest_events, IngestReport};
pub use warehouse::WarehouseStore;
