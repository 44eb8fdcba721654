//! # Packmelt - Resource Pack Model Combiner
//!
//! Merges the item-model JSON files carried by multiple resource-pack ZIP
//! archives into one combined document per item type.
//!
//! ## Modules
//!
//! - **merge**: Deep merge of JSON documents (append lists, overwrite
//!   transform vectors)
//! - **archive**: ZIP extraction
//! - **cleanup**: Best-effort removal of transient extraction directories
//! - **pipeline**: The per-item-type combine pass and output writer
//!
//! ## Quick Start
//!
//! ```rust
//! use packmelt::{DeepMerger, DEFAULT_OVERWRITE_KEYS};
//! use serde_json::{json, Map, Value};
//!
//! let merger = DeepMerger::new(DEFAULT_OVERWRITE_KEYS.clone());
//! let mut combined = Map::new();
//!
//! for pack in [
//!     json!({"textures": {"layer0": "a"}, "overrides": [{"predicate": {"x": 1}}]}),
//!     json!({"textures": {"layer0": "b"}, "overrides": [{"predicate": {"x": 2}}]}),
//! ] {
//!     if let Value::Object(map) = pack {
//!         merger.merge(&mut combined, map);
//!     }
//! }
//!
//! // Later packs win for scalars, lists accumulate
//! assert_eq!(combined["textures"]["layer0"], json!("b"));
//! assert_eq!(combined["overrides"].as_array().unwrap().len(), 2);
//! ```

use anyhow::Result;
use std::path::{Path, PathBuf};

pub mod archive;
pub mod cleanup;
pub mod error;
pub mod merge;
pub mod pipeline;
pub mod types;

// Re-export commonly used types for convenience
pub use error::CombineError;
pub use merge::DeepMerger;
pub use pipeline::PackCombiner;
pub use types::{CombineConfig, PassSummary, DEFAULT_MODEL_DIR, DEFAULT_OVERWRITE_KEYS};

/// Main entry point: combine the model JSON for each item type across a set
/// of resource-pack archives
pub fn combine_packs(
    archives: &[PathBuf],
    item_types: &[String],
    output_dir: &Path,
    config: CombineConfig,
) -> Result<Vec<PassSummary>> {
    PackCombiner::new(config).combine(archives, item_types, output_dir)
}
