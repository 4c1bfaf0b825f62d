/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Rayon parallel traversal of the dataset.

use crate::checksum::Checksum;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::collections::HashMap;

/// Sums the entries of `map` on the current rayon pool.
///
/// Rayon splits the entries across its workers; each split folds into its own partial checksum
/// and the partial checksums are then reduced.  Addition is associative and commutative, so the
/// result does not depend on how the entries were split or in which order the splits finish.
pub fn checksum(map: &HashMap<u32, u32>) -> Checksum {
    map.par_iter()
        .fold(|| Checksum::ZERO, |partial, (k, v)| partial.add_entry(*k, *v))
        .reduce(|| Checksum::ZERO, |a, b| a + b)
}

#[cfg(test)]
mod tests {
    use super::checksum;
    use crate::checksum::Checksum;
    use pretty_assertions::assert_eq;
    use rayon::ThreadPoolBuilder;
    use std::collections::HashMap;

    fn identity_map(size: u32) -> HashMap<u32, u32> {
        (0..size).map(|i| (i, i)).collect()
    }

    #[test]
    fn test_parallel_checksum_empty() {
        assert_eq!(checksum(&HashMap::new()), Checksum::ZERO);
    }

    #[test]
    fn test_parallel_checksum_single_element() {
        let map: HashMap<u32, u32> = [(42, 8)].into_iter().collect();

        assert_eq!(checksum(&map), Checksum::new(50));
    }

    #[test]
    fn test_parallel_checksum_large_dataset() {
        assert_eq!(checksum(&identity_map(10_000)), Checksum::new(99_990_000));
    }

    #[test]
    fn test_parallel_checksum_independent_of_pool_size() {
        let map = identity_map(10_000);
        let sequential = map.iter().fold(Checksum::ZERO, |acc, (k, v)| acc.add_entry(*k, *v));

        for threads in [1, 2, 3, 8] {
            let pool = ThreadPoolBuilder::new().num_threads(threads).build().unwrap();

            assert_eq!(pool.install(|| checksum(&map)), sequential, "{} threads", threads);
        }
    }
}
