//! crates/logging/src/level.rs
//! Bit-packed level sets and the well-known severity constants.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A set of severity levels packed into a `u64`.
///
/// Each severity class occupies a single bit. A `LevelSet` with one bit set
/// names a single level; several bits combined form either the enabled mask of
/// a [`Logger`](crate::Logger) or the level tag attached to one message.
///
/// The five well-known levels are exposed as associated constants. Callers
/// may allocate further bits at runtime through the
/// [`LevelRegistry`](crate::LevelRegistry), which owns the display names.
///
/// # Examples
///
/// ```
/// use bitlog::LevelSet;
///
/// let mask = LevelSet::DEBUG | LevelSet::INFO;
/// assert!(mask.contains(LevelSet::INFO));
/// assert!(!mask.intersects(LevelSet::ERROR));
/// assert_eq!(mask.bits(), 0b11);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LevelSet(u64);

impl LevelSet {
    /// The empty set.
    pub const NONE: Self = Self(0);
    /// Debugging output, suppressed by default.
    pub const DEBUG: Self = Self(1);
    /// Informational messages.
    pub const INFO: Self = Self(1 << 1);
    /// Warnings.
    pub const WARN: Self = Self(1 << 2);
    /// Errors.
    pub const ERROR: Self = Self(1 << 3);
    /// Fatal conditions. Fatal calls terminate whether or not they are logged.
    pub const FATAL: Self = Self(1 << 4);
    /// Mask used when a logger is created with an empty mask.
    pub const DEFAULT: Self = Self(Self::INFO.0 | Self::WARN.0 | Self::ERROR.0 | Self::FATAL.0);
    /// Every bit set.
    pub const ALL: Self = Self(u64::MAX);

    /// Well-known levels paired with their default display names.
    pub const WELL_KNOWN: [(Self, &'static str); 5] = [
        (Self::DEBUG, "DEBUG"),
        (Self::INFO, "INFO"),
        (Self::WARN, "WARNING"),
        (Self::ERROR, "ERROR"),
        (Self::FATAL, "FATAL"),
    ];

    /// Wraps raw bits.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns `true` when no bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` when exactly one bit is set.
    #[must_use]
    pub const fn is_single_level(self) -> bool {
        self.0.is_power_of_two()
    }

    /// Returns `true` when every bit of `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` when the two sets share at least one bit.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Number of bits needed to represent the set; zero for the empty set.
    ///
    /// ```
    /// use bitlog::LevelSet;
    ///
    /// assert_eq!(LevelSet::NONE.bit_length(), 0);
    /// assert_eq!(LevelSet::FATAL.bit_length(), 5);
    /// ```
    #[must_use]
    pub const fn bit_length(self) -> u32 {
        u64::BITS - self.0.leading_zeros()
    }

    /// Iterates over the single-bit levels contained in the set, lowest first.
    pub fn levels(self) -> Levels {
        Levels { remaining: self.0 }
    }
}

impl fmt::Debug for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LevelSet({:#b})", self.0)
    }
}

impl fmt::Binary for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl From<u64> for LevelSet {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<LevelSet> for u64 {
    fn from(set: LevelSet) -> Self {
        set.0
    }
}

impl BitOr for LevelSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LevelSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LevelSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for LevelSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for LevelSet {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl FromIterator<LevelSet> for LevelSet {
    fn from_iter<I: IntoIterator<Item = LevelSet>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, |acc, level| acc | level)
    }
}

/// Iterator over the single-bit members of a [`LevelSet`].
#[derive(Clone, Debug)]
pub struct Levels {
    remaining: u64,
}

impl Iterator for Levels {
    type Item = LevelSet;

    fn next(&mut self) -> Option<LevelSet> {
        if self.remaining == 0 {
            return None;
        }
        let lowest = self.remaining & self.remaining.wrapping_neg();
        self.remaining &= !lowest;
        Some(LevelSet(lowest))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Levels {}
