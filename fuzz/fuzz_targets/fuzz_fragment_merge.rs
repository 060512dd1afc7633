//! Fuzz target for fragment merging.
//!
//! Goal: merging fragments should **never panic**, and the merge must stay
//! right-biased: every key of the right-hand fragment ends up with the
//! right-hand value.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use std::collections::HashMap;
use veneer_types::Fragment;

/// Structured input: two key/value lists to build the fragments from.
#[derive(Arbitrary, Debug)]
struct MergeInput {
    left: Vec<(String, i64)>,
    right: Vec<(String, i64)>,
}

fuzz_target!(|input: MergeInput| {
    // Limit input size to avoid OOM and keep fuzzing fast
    if input.left.len() > 64 || input.right.len() > 64 {
        return;
    }

    let mut left = Fragment::new();
    for (key, value) in &input.left {
        left.insert(key.clone(), Value::from(*value));
    }

    let mut right = Fragment::new();
    for (key, value) in &input.right {
        right.insert(key.clone(), Value::from(*value));
    }

    // The last occurrence of a key within `right` is authoritative, both for
    // insertion into the fragment and for the merged result.
    let mut expected: HashMap<&String, i64> = HashMap::new();
    for (key, value) in &input.right {
        expected.insert(key, *value);
    }

    left.merge(right);

    for (key, value) in &expected {
        assert_eq!(left.get(key.as_str()), Some(&Value::from(*value)));
    }
});
