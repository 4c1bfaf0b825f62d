/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use core::fmt::{self, Display};
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The iteration idioms being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    WhileLetEntries,
    ForEntries,
    FoldCallback,
    ForKeysThenGet,
    WhileLetKeysThenGet,
    LoopEntries,
    IteratorSum,
    ParallelSum,
    HashTrieMapIter,
    RedBlackTreeMapFold,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown variant `{0}`")]
pub struct ParseVariantError(String);

impl Variant {
    pub const ALL: [Variant; 10] = [
        Variant::WhileLetEntries,
        Variant::ForEntries,
        Variant::FoldCallback,
        Variant::ForKeysThenGet,
        Variant::WhileLetKeysThenGet,
        Variant::LoopEntries,
        Variant::IteratorSum,
        Variant::ParallelSum,
        Variant::HashTrieMapIter,
        Variant::RedBlackTreeMapFold,
    ];

    /// Stable identifier, used as benchmark id.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::WhileLetEntries => "while-let-entries",
            Variant::ForEntries => "for-entries",
            Variant::FoldCallback => "fold-callback",
            Variant::ForKeysThenGet => "for-keys-then-get",
            Variant::WhileLetKeysThenGet => "while-let-keys-then-get",
            Variant::LoopEntries => "loop-entries",
            Variant::IteratorSum => "iterator-sum",
            Variant::ParallelSum => "parallel-sum",
            Variant::HashTrieMapIter => "hash-trie-map-iter",
            Variant::RedBlackTreeMapFold => "red-black-tree-map-fold",
        }
    }

    /// Position of the variant in [`Variant::ALL`], starting at one.
    #[must_use]
    pub const fn number(self) -> usize {
        self as usize + 1
    }

    #[must_use]
    pub const fn is_parallel(self) -> bool {
        matches!(self, Variant::ParallelSum)
    }

    /// Whether the variant traverses one of the alternate (persistent) maps.
    #[must_use]
    pub const fn uses_alternate_map(self) -> bool {
        matches!(self, Variant::HashTrieMapIter | Variant::RedBlackTreeMapFold)
    }
}

impl Display for Variant {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

/// Parses either the variant name or its number.
impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Variant, ParseVariantError> {
        let s = s.trim();

        Variant::ALL
            .into_iter()
            .find(|variant| {
                variant.name().eq_ignore_ascii_case(s)
                    || s.parse::<usize>().is_ok_and(|n| n == variant.number())
            })
            .ok_or_else(|| ParseVariantError(s.to_owned()))
    }
}
