//! ZIP extraction for resource-pack archives

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Extract every entry of a ZIP archive into `dest`.
///
/// Entries whose names would escape `dest` are skipped. Returns the number of
/// files written. A missing or corrupt archive is an error and propagates.
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<usize> {
    println!("Extracting {} to {}", archive_path.display(), dest.display());

    let file = fs::File::open(archive_path)
        .with_context(|| format!("Failed to open archive: {}", archive_path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("Invalid or corrupt ZIP: {}", archive_path.display()))?;

    let mut count = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .with_context(|| format!("Failed to read entry {i} of {}", archive_path.display()))?;

        // Skip entries with unsafe paths (absolute or parent-escaping)
        let entry_path = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => continue,
        };
        let output_path = dest.join(&entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path)
                .with_context(|| format!("Failed to create dir: {}", output_path.display()))?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create parent: {}", parent.display()))?;
            }
            let mut outfile = fs::File::create(&output_path)
                .with_context(|| format!("Failed to create file: {}", output_path.display()))?;
            io::copy(&mut entry, &mut outfile)
                .with_context(|| format!("Failed to write file: {}", output_path.display()))?;
            count += 1;
        }
    }

    println!("Extraction of {} complete", archive_path.display());
    Ok(count)
}
