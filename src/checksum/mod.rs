/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use core::fmt::{self, Display};
use core::iter::Sum;
use core::ops::Add;

/// The sum of every key and value visited by a traversal.
///
/// Returning it from each measurement keeps the traversal observable, so the optimizer cannot
/// discard it as dead code.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checksum(u64);

impl Checksum {
    pub const ZERO: Checksum = Checksum(0);

    #[must_use]
    pub const fn new(value: u64) -> Checksum {
        Checksum(value)
    }

    /// The checksum of a dataset holding `(k, k)` for every `k` in `0..size`.
    ///
    /// This is `2 * (0 + 1 + ... + (size - 1))`, i.e. `size * (size - 1)`.
    #[must_use]
    pub const fn expected(size: usize) -> Checksum {
        let n = size as u64;

        Checksum(n.saturating_mul(n.saturating_sub(1)))
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Adds one entry to the checksum.
    #[inline]
    #[must_use]
    pub fn add_entry(self, key: u32, value: u32) -> Checksum {
        Checksum(self.0 + u64::from(key) + u64::from(value))
    }
}

impl Add for Checksum {
    type Output = Checksum;

    #[inline]
    fn add(self, other: Checksum) -> Checksum {
        Checksum(self.0 + other.0)
    }
}

impl Sum for Checksum {
    fn sum<I: Iterator<Item = Checksum>>(iter: I) -> Checksum {
        iter.fold(Checksum::ZERO, Add::add)
    }
}

impl From<Checksum> for u64 {
    fn from(checksum: Checksum) -> u64 {
        checksum.0
    }
}

impl Display for Checksum {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, fmt)
    }
}
