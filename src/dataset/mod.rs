/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::map::TraversableMap;
use log::debug;

/// Largest number of entries a dataset can hold: one per `u32` key.
pub const MAX_DATASET_SIZE: usize =
    if usize::BITS > u32::BITS { u32::MAX as usize + 1 } else { usize::MAX };

/// A map of `size` entries `(k, k)` for every `k` in `0..size`.
///
/// The dataset starts out empty.  [`reset()`](Dataset::reset) rebuilds it from scratch and is the
/// only operation that mutates it; everything else borrows the map immutably.
#[derive(Debug, Clone)]
pub struct Dataset<M> {
    map: M,
    size: usize,
}

impl<M> Dataset<M>
where
    M: TraversableMap<u32, u32>,
{
    /// Wraps `map`, clearing it.  Call [`reset()`](Dataset::reset) to populate it.
    ///
    /// Sizes above [`MAX_DATASET_SIZE`] are truncated to it.
    #[must_use]
    pub fn new(mut map: M, size: usize) -> Dataset<M> {
        map.clear();

        Dataset { map, size: size.min(MAX_DATASET_SIZE) }
    }

    #[must_use]
    pub fn populated(map: M, size: usize) -> Dataset<M> {
        let mut dataset = Dataset::new(map, size);
        dataset.reset();
        dataset
    }

    /// Clears the map and fills it with `(0, 0), (1, 1), ..., (size - 1, size - 1)`.
    pub fn reset(&mut self) {
        debug!("resetting dataset of {} entries", self.size);

        self.map.clear();

        for key in (0..=u32::MAX).take(self.size) {
            self.map.put(key, key);
        }
    }

    /// The number of entries the dataset holds once populated.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.size
    }

    /// The number of entries currently in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.size()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.len() == self.size
    }

    #[must_use]
    pub fn map(&self) -> &M {
        &self.map
    }
}

#[cfg(test)]
mod test;
