//! Raw record decoding for the two source file kinds.
//!
//! Catalog files hold one self-describing JSON object per file; session log
//! files hold one JSON object per line. Both decode into all-optional structs
//! so that required-field policy is applied by the transformers, not here: a
//! partial record with `page != "NextSong"` is legitimate input and gets
//! dropped by the event filter downstream.

mod catalog;
mod events;

pub use catalog::{read_catalog_file, CatalogRecord};
pub use events::{read_event_file, PlayEvent};

use thiserror::Error;

/// Errors that can occur while decoding a record file.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record{}: {reason}", .line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Malformed { line: Option<usize>, reason: String },
}
