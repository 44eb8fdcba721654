use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// List-valued keys that are replaced wholesale instead of appended when two
/// documents both carry them. These are fixed-length transform vectors where
/// concatenation is meaningless.
pub static DEFAULT_OVERWRITE_KEYS: Lazy<HashSet<String>> = Lazy::new(|| {
    ["rotation", "translation", "scale"]
        .iter()
        .map(|s| s.to_string())
        .collect()
});

/// Relative path inside an extracted pack where item models live.
pub const DEFAULT_MODEL_DIR: &str = "assets/minecraft/models/item";

/// Configuration for a combine run
#[derive(Debug, Clone)]
pub struct CombineConfig {
    /// List keys with replace semantics; all other colliding lists append
    pub overwrite_keys: HashSet<String>,

    /// Directory archives are extracted under, one subdirectory per archive.
    /// Passed explicitly so concurrent test runs don't collide.
    pub work_dir: PathBuf,

    /// Relative directory of the model JSON inside an extracted archive
    pub model_dir: PathBuf,
}

impl Default for CombineConfig {
    fn default() -> Self {
        CombineConfig {
            overwrite_keys: DEFAULT_OVERWRITE_KEYS.clone(),
            work_dir: std::env::temp_dir().join("packmelt-extract"),
            model_dir: PathBuf::from(DEFAULT_MODEL_DIR),
        }
    }
}

/// Outcome of one item-type pass - how many archives contributed, how many
/// lacked the model file, and where the combined document was written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassSummary {
    pub item_type: String,
    pub merged: usize,
    pub skipped: usize,
    pub output: PathBuf,
}
