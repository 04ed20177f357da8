//! Pure transformations from decoded records to warehouse rows.

mod catalog;
mod events;
mod time;

pub use catalog::transform_catalog;
pub use events::{transform_events, EventRows, SongplayCandidate};
pub use time::decompose_timestamp;

use thiserror::Error;

/// Errors that can occur while shaping records into rows.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("catalog entry is missing required field '{field}'")]
    IncompleteCatalogEntry { field: &'static str },

    #[error("play event is missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("timestamp {0} is not representable as a UTC datetime")]
    UnrepresentableTimestamp(i64),
}
