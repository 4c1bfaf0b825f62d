/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The capability every map under test has to provide.
//!
//! The benchmarks only ever need to fill a map and walk all of its entries, so that is all this
//! trait exposes.  Implementations exist for the standard library [`HashMap`] and for the
//! persistent maps of [`rpds`], generic over their [`SharedPointerKind`].

use archery::SharedPointerKind;
use core::hash::{BuildHasher, Hash};
use rpds::{HashTrieMap, RedBlackTreeMap};
use std::collections::HashMap;

/// A map that can be cleared, filled one entry at a time and fully traversed.
pub trait TraversableMap<K, V> {
    /// Removes every entry.
    fn clear(&mut self);

    /// Inserts `value` under `key`, replacing any previous value.
    fn put(&mut self, key: K, value: V);

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Visits every entry exactly once, threading the accumulator through `f`.
    ///
    /// The visiting order is whatever the underlying map iterates in.
    fn fold_entries<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &K, &V) -> A;
}

impl<K, V, S> TraversableMap<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn clear(&mut self) {
        HashMap::clear(self);
    }

    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn fold_entries<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &K, &V) -> A,
    {
        self.iter().fold(init, |acc, (k, v)| f(acc, k, v))
    }
}

impl<K, V, P, H> TraversableMap<K, V> for HashTrieMap<K, V, P, H>
where
    K: Eq + Hash,
    H: BuildHasher + Clone + Default,
    P: SharedPointerKind,
{
    fn clear(&mut self) {
        *self = HashTrieMap::default();
    }

    fn put(&mut self, key: K, value: V) {
        self.insert_mut(key, value);
    }

    fn size(&self) -> usize {
        HashTrieMap::size(self)
    }

    fn fold_entries<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &K, &V) -> A,
    {
        self.iter().fold(init, |acc, (k, v)| f(acc, k, v))
    }
}

impl<K, V, P> TraversableMap<K, V> for RedBlackTreeMap<K, V, P>
where
    K: Ord,
    P: SharedPointerKind,
{
    fn clear(&mut self) {
        *self = RedBlackTreeMap::default();
    }

    fn put(&mut self, key: K, value: V) {
        self.insert_mut(key, value);
    }

    fn size(&self) -> usize {
        RedBlackTreeMap::size(self)
    }

    fn fold_entries<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &K, &V) -> A,
    {
        self.iter().fold(init, |acc, (k, v)| f(acc, k, v))
    }
}
