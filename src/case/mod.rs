/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

mod parallel;
mod variant;

use crate::checksum::Checksum;
use crate::config::HarnessConfig;
use crate::dataset::Dataset;
use crate::map::TraversableMap;
use archery::{ArcTK, RcK, SharedPointerKind};
use core::fmt;
use log::{trace, warn};
use rpds::{HashTrieMap, RedBlackTreeMap};
use std::collections::HashMap;
use thiserror::Error;

pub use variant::{ParseVariantError, Variant};

/// Raised when a traversal does not see the dataset it was supposed to see.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("variant `{variant}` computed checksum {actual} but {expected} was expected")]
    ChecksumMismatch { variant: Variant, actual: Checksum, expected: Checksum },
}

pub type BenchmarkCaseSync = BenchmarkCase<ArcTK>;

/// Holds the datasets under test and the ten measurement operations.
///
/// Every measurement borrows the case immutably while [`reset()`](BenchmarkCase::reset) needs
/// an exclusive borrow, so a measurement can never observe a dataset that is being rebuilt.
///
/// Variants 1 to 8 traverse a [`HashMap`].  Variants 9 and 10 traverse a [`HashTrieMap`] and a
/// [`RedBlackTreeMap`] respectively, both using the pointer kind `P`.
pub struct BenchmarkCase<P = RcK>
where
    P: SharedPointerKind,
{
    hash_map: Dataset<HashMap<u32, u32>>,
    hash_trie_map: Dataset<HashTrieMap<u32, u32, P>>,
    red_black_tree_map: Dataset<RedBlackTreeMap<u32, u32, P>>,
}

impl BenchmarkCase {
    /// Creates a case over `size` entries and populates it.
    #[must_use]
    pub fn new(size: usize) -> BenchmarkCase {
        BenchmarkCase::new_with_ptr_kind(size)
    }

    #[must_use]
    pub fn with_config(config: &HarnessConfig) -> BenchmarkCase {
        BenchmarkCase::new(config.dataset_size)
    }
}

impl BenchmarkCaseSync {
    #[must_use]
    pub fn new_sync(size: usize) -> BenchmarkCaseSync {
        BenchmarkCase::new_with_ptr_kind(size)
    }
}

impl<P> BenchmarkCase<P>
where
    P: SharedPointerKind,
{
    #[must_use]
    pub fn new_with_ptr_kind(size: usize) -> BenchmarkCase<P> {
        BenchmarkCase {
            hash_map: Dataset::populated(HashMap::with_capacity(size), size),
            hash_trie_map: Dataset::populated(HashTrieMap::default(), size),
            red_black_tree_map: Dataset::populated(RedBlackTreeMap::default(), size),
        }
    }

    /// Repopulates every dataset.  Meant to run before each measured iteration.
    pub fn reset(&mut self) {
        self.hash_map.reset();
        self.hash_trie_map.reset();
        self.red_black_tree_map.reset();
    }

    /// The number of entries each dataset holds once populated.
    #[must_use]
    pub fn size(&self) -> usize {
        self.hash_map.capacity()
    }

    /// Whether every dataset holds all of its entries.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.hash_map.is_populated()
            && self.hash_trie_map.is_populated()
            && self.red_black_tree_map.is_populated()
    }

    #[must_use]
    pub fn hash_map(&self) -> &HashMap<u32, u32> {
        self.hash_map.map()
    }

    #[must_use]
    pub fn hash_trie_map(&self) -> &HashTrieMap<u32, u32, P> {
        self.hash_trie_map.map()
    }

    #[must_use]
    pub fn red_black_tree_map(&self) -> &RedBlackTreeMap<u32, u32, P> {
        self.red_black_tree_map.map()
    }

    /// Runs the measurement of `variant`.
    #[must_use]
    pub fn measure(&self, variant: Variant) -> Checksum {
        trace!("measuring {}", variant);

        match variant {
            Variant::WhileLetEntries => self.measure_while_let_entries(),
            Variant::ForEntries => self.measure_for_entries(),
            Variant::FoldCallback => self.measure_fold_callback(),
            Variant::ForKeysThenGet => self.measure_for_keys_then_get(),
            Variant::WhileLetKeysThenGet => self.measure_while_let_keys_then_get(),
            Variant::LoopEntries => self.measure_loop_entries(),
            Variant::IteratorSum => self.measure_iterator_sum(),
            Variant::ParallelSum => self.measure_parallel_sum(),
            Variant::HashTrieMapIter => self.measure_hash_trie_map_iter(),
            Variant::RedBlackTreeMapFold => self.measure_red_black_tree_map_fold(),
        }
    }

    /// Measures `variant` and checks the result against [`Checksum::expected()`].
    pub fn verify(&self, variant: Variant) -> Result<Checksum, VerifyError> {
        let actual = self.measure(variant);
        let expected = Checksum::expected(self.size());

        if actual == expected {
            Ok(actual)
        } else {
            warn!("variant {} computed {} instead of {}", variant, actual, expected);

            Err(VerifyError::ChecksumMismatch { variant, actual, expected })
        }
    }

    pub fn verify_all(&self) -> Result<(), VerifyError> {
        Variant::ALL.into_iter().try_for_each(|variant| self.verify(variant).map(|_| ()))
    }

    /// 1. An explicit entry iterator driven by `while let`.
    #[must_use]
    #[allow(clippy::while_let_on_iterator)]
    pub fn measure_while_let_entries(&self) -> Checksum {
        let mut checksum = Checksum::ZERO;
        let mut entries = self.hash_map().iter();

        while let Some((k, v)) = entries.next() {
            checksum = checksum.add_entry(*k, *v);
        }

        checksum
    }

    /// 2. A `for` loop over the map's entries.
    #[must_use]
    pub fn measure_for_entries(&self) -> Checksum {
        let mut checksum = Checksum::ZERO;

        for (k, v) in self.hash_map() {
            checksum = checksum.add_entry(*k, *v);
        }

        checksum
    }

    /// 3. A callback invoked for every entry, with the accumulator passed explicitly.
    #[must_use]
    pub fn measure_fold_callback(&self) -> Checksum {
        self.hash_map().fold_entries(Checksum::ZERO, |checksum, k, v| checksum.add_entry(*k, *v))
    }

    /// 4. A `for` loop over the keys, looking every value up.
    #[must_use]
    pub fn measure_for_keys_then_get(&self) -> Checksum {
        let map = self.hash_map();
        let mut checksum = Checksum::ZERO;

        for k in map.keys() {
            if let Some(v) = map.get(k) {
                checksum = checksum.add_entry(*k, *v);
            }
        }

        checksum
    }

    /// 5. An explicit key iterator driven by `while let`, looking every value up.
    #[must_use]
    #[allow(clippy::while_let_on_iterator)]
    pub fn measure_while_let_keys_then_get(&self) -> Checksum {
        let map = self.hash_map();
        let mut checksum = Checksum::ZERO;
        let mut keys = map.keys();

        while let Some(k) = keys.next() {
            if let Some(v) = map.get(k) {
                checksum = checksum.add_entry(*k, *v);
            }
        }

        checksum
    }

    /// 6. A bare `loop` pulling entries from the iterator until it is exhausted.
    #[must_use]
    pub fn measure_loop_entries(&self) -> Checksum {
        let mut checksum = Checksum::ZERO;
        let mut entries = self.hash_map().iter();

        loop {
            let Some((k, v)) = entries.next() else {
                break checksum;
            };

            checksum = checksum.add_entry(*k, *v);
        }
    }

    /// 7. An iterator adaptor pipeline.
    #[must_use]
    pub fn measure_iterator_sum(&self) -> Checksum {
        self.hash_map().iter().map(|(k, v)| Checksum::ZERO.add_entry(*k, *v)).sum()
    }

    /// 8. A parallel traversal on the rayon thread pool.
    #[must_use]
    pub fn measure_parallel_sum(&self) -> Checksum {
        parallel::checksum(self.hash_map())
    }

    /// 9. The native iterator of a [`HashTrieMap`].
    #[must_use]
    #[allow(clippy::while_let_on_iterator)]
    pub fn measure_hash_trie_map_iter(&self) -> Checksum {
        let mut checksum = Checksum::ZERO;
        let mut it = self.hash_trie_map().iter();

        while let Some((k, v)) = it.next() {
            checksum = checksum.add_entry(*k, *v);
        }

        checksum
    }

    /// 10. A callback traversal of a [`RedBlackTreeMap`].
    #[must_use]
    pub fn measure_red_black_tree_map_fold(&self) -> Checksum {
        self.red_black_tree_map()
            .fold_entries(Checksum::ZERO, |checksum, k, v| checksum.add_entry(*k, *v))
    }
}

impl<P> fmt::Debug for BenchmarkCase<P>
where
    P: SharedPointerKind,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkCase")
            .field("size", &self.size())
            .field("populated", &self.is_populated())
            .finish()
    }
}
