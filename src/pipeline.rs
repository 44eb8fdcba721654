//! The combine pipeline: extract each archive, fold its model JSON into the
//! accumulator, clean up, and write one combined document per item type.

use crate::archive::extract_archive;
use crate::cleanup::{clean_dir, remove_dir_best_effort};
use crate::error::CombineError;
use crate::merge::DeepMerger;
use crate::types::{CombineConfig, PassSummary};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Runs item-type passes over a set of resource-pack archives
pub struct PackCombiner {
    config: CombineConfig,
    merger: DeepMerger,
}

impl PackCombiner {
    pub fn new(config: CombineConfig) -> Self {
        let merger = DeepMerger::new(config.overwrite_keys.clone());
        PackCombiner { config, merger }
    }

    /// Combine the model JSON for every requested item type across `archives`,
    /// writing `combined_<type>.json` files under `output_dir`.
    ///
    /// Archives are processed in input order, so later archives override
    /// scalars and append to cumulative lists. An archive without the model
    /// file for the current type is skipped with a diagnostic; a corrupt
    /// archive or malformed JSON aborts the run.
    pub fn combine(
        &self,
        archives: &[PathBuf],
        item_types: &[String],
        output_dir: &Path,
    ) -> Result<Vec<PassSummary>> {
        if output_dir.is_file() {
            return Err(CombineError::OutputPathIsFile(output_dir.to_path_buf()).into());
        }
        fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output directory: {}", output_dir.display())
        })?;

        let mut summaries = Vec::with_capacity(item_types.len());
        for item_type in item_types {
            summaries.push(self.combine_one_type(archives, item_type, output_dir)?);
        }
        Ok(summaries)
    }

    /// One pass: accumulate `<model_dir>/<type>.json` across all archives.
    fn combine_one_type(
        &self,
        archives: &[PathBuf],
        item_type: &str,
        output_dir: &Path,
    ) -> Result<PassSummary> {
        let mut combined = Map::new();
        let mut merged = 0;
        let mut skipped = 0;

        fs::create_dir_all(&self.config.work_dir).with_context(|| {
            format!("Failed to create work directory: {}", self.config.work_dir.display())
        })?;
        println!("Temporary directory created at {}", self.config.work_dir.display());

        for archive in archives {
            println!("Processing ZIP file: {}", archive.display());
            let stem = archive
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "archive".to_string());
            let extract_path = self.config.work_dir.join(&stem);

            // Clear any stale extraction left by an earlier pass
            if extract_path.exists() {
                clean_dir(&extract_path);
                remove_dir_best_effort(&extract_path);
            }
            fs::create_dir_all(&extract_path).with_context(|| {
                format!("Failed to create extract path: {}", extract_path.display())
            })?;
            println!("Extract path created at {}", extract_path.display());

            extract_archive(archive, &extract_path)?;

            let model_path = extract_path
                .join(&self.config.model_dir)
                .join(format!("{item_type}.json"));
            let outcome = if model_path.exists() {
                println!("Found {}", model_path.display());
                Some(self.merge_model_file(&model_path, &mut combined))
            } else {
                println!("{item_type}.json not found in {}", archive.display());
                None
            };

            // Best-effort cleanup happens whether or not the merge succeeded
            clean_dir(&extract_path);
            remove_dir_best_effort(&extract_path);

            match outcome {
                Some(result) => {
                    result?;
                    merged += 1;
                }
                None => skipped += 1,
            }
        }

        let output = output_dir.join(format!("combined_{item_type}.json"));
        write_combined(&output, combined)?;
        println!("Combined JSON file created at {}", output.display());

        Ok(PassSummary {
            item_type: item_type.to_string(),
            merged,
            skipped,
            output,
        })
    }

    fn merge_model_file(&self, model_path: &Path, combined: &mut Map<String, Value>) -> Result<()> {
        let text = fs::read_to_string(model_path)
            .with_context(|| format!("Failed to read {}", model_path.display()))?;
        let document: Value = serde_json::from_str(&text)
            .with_context(|| format!("Malformed JSON in {}", model_path.display()))?;
        match document {
            Value::Object(map) => {
                self.merger.merge(combined, map);
                Ok(())
            }
            _ => Err(CombineError::ModelNotAnObject(model_path.to_path_buf()).into()),
        }
    }
}

/// Write an object-rooted document with 4-space indentation.
fn write_combined(path: &Path, document: Map<String, Value>) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    Value::Object(document)
        .serialize(&mut ser)
        .with_context(|| format!("Failed to serialize combined document to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))
}
