/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use super::*;
use pretty_assertions::assert_eq;
use rpds::{HashTrieMap, RedBlackTreeMap};
use std::collections::HashMap;

fn assert_identity_entries<M: TraversableMap<u32, u32>>(dataset: &Dataset<M>, size: usize) {
    assert_eq!(dataset.len(), size);

    let mut seen = vec![false; size];

    dataset.map().fold_entries((), |(), k, v| {
        assert_eq!(k, v);
        assert!(!seen[*k as usize], "key {} visited twice", k);
        seen[*k as usize] = true;
    });

    assert!(seen.into_iter().all(|s| s));
}

#[test]
fn test_new_is_empty() {
    let mut map = HashMap::new();
    map.insert(1000, 3);

    let dataset = Dataset::new(map, 10);

    assert!(dataset.is_empty());
    assert!(!dataset.is_populated());
    assert_eq!(dataset.capacity(), 10);
}

#[test]
fn test_reset() {
    for size in [0, 1, 2, 17, 1_000] {
        let mut dataset = Dataset::new(HashMap::new(), size);

        dataset.reset();

        assert!(dataset.is_populated());
        assert_identity_entries(&dataset, size);
    }
}

#[test]
fn test_reset_alternate_maps() {
    let trie = Dataset::populated(HashTrieMap::new(), 500);
    let tree = Dataset::populated(RedBlackTreeMap::new(), 500);

    assert_identity_entries(&trie, 500);
    assert_identity_entries(&tree, 500);
}

#[test]
fn test_reset_is_idempotent() {
    let mut once = Dataset::new(HashMap::new(), 100);
    let mut twice = Dataset::new(HashMap::new(), 100);

    once.reset();
    twice.reset();
    twice.reset();

    assert_eq!(once.map(), twice.map());
}

#[test]
fn test_reset_discards_foreign_entries() {
    let mut dataset = Dataset::populated(RedBlackTreeMap::new(), 10);
    let mut map = dataset.map().clone();

    map.insert_mut(99, 1);
    map.insert_mut(3, 42);

    dataset = Dataset::new(map, 10);
    dataset.reset();

    assert_identity_entries(&dataset, 10);
}

#[test]
fn test_reset_of_empty_dataset() {
    let mut dataset = Dataset::populated(HashMap::new(), 0);

    dataset.reset();

    assert!(dataset.is_empty());
    assert!(dataset.is_populated());
}

#[test]
fn test_size_is_truncated() {
    let dataset = Dataset::new(HashMap::new(), usize::MAX);

    assert_eq!(dataset.capacity(), MAX_DATASET_SIZE);
}
