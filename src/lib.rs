/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#![cfg_attr(feature = "fatal-warnings", deny(warnings))]

// Note: Keep this in sync with `README.md`.
//! # Map Iteration Benchmarks
//!
//! Measures the relative cost of ten idioms for iterating over a key/value map of fixed size.
//! Every idiom computes the same checksum (the sum of all keys and values) so the traversal
//! cannot be optimized away, and every measured iteration starts from a freshly populated
//! dataset.
//!
//! # Variants
//!
//!   1. [`WhileLetEntries`](Variant::WhileLetEntries)
//!   2. [`ForEntries`](Variant::ForEntries)
//!   3. [`FoldCallback`](Variant::FoldCallback)
//!   4. [`ForKeysThenGet`](Variant::ForKeysThenGet)
//!   5. [`WhileLetKeysThenGet`](Variant::WhileLetKeysThenGet)
//!   6. [`LoopEntries`](Variant::LoopEntries)
//!   7. [`IteratorSum`](Variant::IteratorSum)
//!   8. [`ParallelSum`](Variant::ParallelSum)
//!   9. [`HashTrieMapIter`](Variant::HashTrieMapIter)
//!   10. [`RedBlackTreeMapFold`](Variant::RedBlackTreeMapFold)
//!
//! Variants 1 to 8 traverse a [`std::collections::HashMap`].  The last two traverse the
//! persistent maps of [`rpds`], reached only through the [`TraversableMap`] capability.
//!
//! # Example
//!
//! ```rust
//! use map_iter_bench::{BenchmarkCase, Checksum, Variant};
//!
//! let mut case = BenchmarkCase::new(10_000);
//!
//! case.reset();
//!
//! for variant in Variant::ALL {
//!     assert_eq!(case.measure(variant), Checksum::new(99_990_000));
//! }
//! ```
//!
//! # Driving the benchmarks
//!
//! The measurement loop itself belongs to [criterion](https://docs.rs/criterion).  See
//! `benches/iterate_map.rs` for the registration of every variant and `demos/iterate_map.rs`
//! for a stand-alone runner that prints the average latency of each variant.

pub mod case;
pub mod checksum;
pub mod config;
pub mod dataset;
pub mod map;

pub use case::{BenchmarkCase, BenchmarkCaseSync, ParseVariantError, Variant, VerifyError};
pub use checksum::Checksum;
pub use config::{ConfigError, HarnessConfig, TimeUnit};
pub use dataset::{Dataset, MAX_DATASET_SIZE};
pub use map::TraversableMap;

/// Number of entries in a dataset unless configured otherwise.
pub const DEFAULT_DATASET_SIZE: usize = 10_000;
