use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Extension of the record files the pipeline recognizes.
const RECORD_FILE_EXTENSION: &str = "json";

/// Find every record file under `root`, in a stable order.
///
/// Traversal is depth-first with entries sorted by file name, so discovery
/// order is deterministic across runs. An empty or missing tree yields an
/// empty list, not an error; unreadable entries are logged and skipped.
pub fn find_record_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry
            .path()
            .extension()
            .is_some_and(|ext| ext == RECORD_FILE_EXTENSION)
        {
            files.push(entry.into_path());
        }
    }
    files
}
