//! Deep merging of JSON model documents
//!
//! Later documents win for scalars and nested leaves; colliding lists append,
//! except for the configured overwrite keys (transform vectors) where the
//! incoming list replaces the existing one outright.

use serde_json::map::Entry;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// The core merger that folds one JSON document into an accumulator
pub struct DeepMerger {
    overwrite_keys: HashSet<String>,
}

impl DeepMerger {
    pub fn new(overwrite_keys: HashSet<String>) -> Self {
        DeepMerger { overwrite_keys }
    }

    /// Merge `src` into `dest` in place.
    ///
    /// - both mappings: recurse
    /// - both sequences: replace for overwrite keys, append otherwise
    /// - anything else (absent key, type mismatch, scalar): the source value
    ///   overwrites the destination slot
    pub fn merge(&self, dest: &mut Map<String, Value>, src: Map<String, Value>) {
        for (key, incoming) in src {
            match dest.entry(key) {
                Entry::Occupied(mut slot) => {
                    let replace_list = self.overwrite_keys.contains(slot.key().as_str());
                    self.merge_slot(slot.get_mut(), incoming, replace_list);
                }
                Entry::Vacant(slot) => {
                    slot.insert(incoming);
                }
            }
        }
    }

    fn merge_slot(&self, existing: &mut Value, incoming: Value, replace_list: bool) {
        match (existing, incoming) {
            (Value::Object(dest), Value::Object(src)) => self.merge(dest, src),
            (Value::Array(dest), Value::Array(src)) => {
                if replace_list {
                    *dest = src;
                } else {
                    dest.extend(src);
                }
            }
            // Type mismatch or scalar: permissive overwrite, matching the
            // documented policy.
            (slot, incoming) => *slot = incoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_OVERWRITE_KEYS;
    use serde_json::json;

    fn merger() -> DeepMerger {
        DeepMerger::new(DEFAULT_OVERWRITE_KEYS.clone())
    }

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture is not an object: {other}"),
        }
    }

    #[test]
    fn non_conflicting_keys_form_a_union() {
        let mut dest = obj(json!({"parent": "item/generated", "a": 1}));
        merger().merge(&mut dest, obj(json!({"b": 2, "c": {"d": 3}})));

        assert_eq!(dest["parent"], json!("item/generated"));
        assert_eq!(dest["a"], json!(1));
        assert_eq!(dest["b"], json!(2));
        assert_eq!(dest["c"], json!({"d": 3}));
        assert_eq!(dest.len(), 4);
    }

    #[test]
    fn nested_mappings_merge_recursively() {
        let mut dest = obj(json!({"textures": {"layer0": "a", "particle": "p"}}));
        merger().merge(&mut dest, obj(json!({"textures": {"layer0": "b"}})));

        assert_eq!(dest["textures"]["layer0"], json!("b"));
        assert_eq!(dest["textures"]["particle"], json!("p"));
    }

    #[test]
    fn overwrite_keys_replace_regardless_of_length() {
        let mut dest = obj(json!({
            "display": {
                "thirdperson_righthand": {
                    "rotation": [0, 0, 0, 0, 0],
                    "scale": [1.0]
                }
            }
        }));
        merger().merge(
            &mut dest,
            obj(json!({
                "display": {
                    "thirdperson_righthand": {
                        "rotation": [10, 20, 30],
                        "scale": [0.5, 0.5, 0.5]
                    }
                }
            })),
        );

        let hand = &dest["display"]["thirdperson_righthand"];
        assert_eq!(hand["rotation"], json!([10, 20, 30]));
        assert_eq!(hand["scale"], json!([0.5, 0.5, 0.5]));
    }

    #[test]
    fn other_lists_append_in_order() {
        let mut dest = obj(json!({"overrides": [{"predicate": {"x": 1}}]}));
        merger().merge(
            &mut dest,
            obj(json!({"overrides": [{"predicate": {"x": 2}}, {"predicate": {"x": 3}}]})),
        );

        assert_eq!(
            dest["overrides"],
            json!([
                {"predicate": {"x": 1}},
                {"predicate": {"x": 2}},
                {"predicate": {"x": 3}}
            ])
        );
    }

    #[test]
    fn appendable_lists_are_not_idempotent() {
        let merger = merger();
        let src = obj(json!({"overrides": [{"predicate": {"pulling": 1}}]}));
        let mut dest = Map::new();

        merger.merge(&mut dest, src.clone());
        merger.merge(&mut dest, src);

        // Merging the same source twice doubles the entries.
        assert_eq!(dest["overrides"].as_array().unwrap().len(), 2);
        assert_eq!(
            dest["overrides"],
            json!([{"predicate": {"pulling": 1}}, {"predicate": {"pulling": 1}}])
        );
    }

    #[test]
    fn later_scalars_win() {
        let mut dest = obj(json!({"parent": "item/generated"}));
        merger().merge(&mut dest, obj(json!({"parent": "item/handheld"})));
        assert_eq!(dest["parent"], json!("item/handheld"));
    }

    #[test]
    fn type_mismatch_is_a_silent_overwrite() {
        let mut dest = obj(json!({"gui_light": "front", "elements": 7}));
        merger().merge(&mut dest, obj(json!({"gui_light": [1, 2], "elements": [{"from": [0]}]})));

        assert_eq!(dest["gui_light"], json!([1, 2]));
        assert_eq!(dest["elements"], json!([{"from": [0]}]));
    }

    #[test]
    fn overwrite_set_is_configurable() {
        let custom: HashSet<String> = ["overrides".to_string()].into_iter().collect();
        let merger = DeepMerger::new(custom);

        let mut dest = obj(json!({"overrides": [1], "rotation": [0]}));
        merger.merge(&mut dest, obj(json!({"overrides": [2], "rotation": [9]})));

        // With a custom set, overrides replaces and rotation appends.
        assert_eq!(dest["overrides"], json!([2]));
        assert_eq!(dest["rotation"], json!([0, 9]));
    }
}
