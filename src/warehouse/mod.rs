//! Star-schema warehouse on SQLite.
//!
//! `WarehouseStore` owns the single connection for a run; `FileBatch` wraps
//! one transaction and is the unit of work for one source file.

mod models;
mod schema;
mod store;

pub use models::{ArtistRow, SongRow, SongplayRow, TimeRow, UserRow};
pub use schema::{WAREHOUSE_SCHEMA_SQL, WAREHOUSE_SCHEMA_VERSION};
pub use store::{FileBatch, WarehouseStore};
