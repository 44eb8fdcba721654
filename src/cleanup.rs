//! Best-effort removal of transient extraction directories
//!
//! Every failure here is printed and skipped; cleanup never aborts a run.

use std::fs;
use std::path::Path;

/// Recursively delete the contents of `path`, leaving `path` itself in place.
/// Files or subdirectories that refuse to go (permissions, still non-empty)
/// are reported and left behind.
pub fn clean_dir(path: &Path) {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            println!("Failed to read directory {}: {e}", path.display());
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                println!("Failed to read entry in {}: {e}", path.display());
                continue;
            }
        };
        let child = entry.path();
        if child.is_dir() {
            clean_dir(&child);
            remove_dir_best_effort(&child);
        } else if let Err(e) = fs::remove_file(&child) {
            println!("Permission denied or failed to delete: {} ({e})", child.display());
        }
    }
}

/// Attempt to remove an (ideally empty) directory, reporting failure instead
/// of returning it.
pub fn remove_dir_best_effort(path: &Path) {
    if let Err(e) = fs::remove_dir(path) {
        println!("Directory not empty or other error: {} ({e})", path.display());
    }
}
