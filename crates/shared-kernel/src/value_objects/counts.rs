// crates/shared-kernel/src/value_objects/counts.rs
use std::ops::Add;

use serde::Serialize;

/// Number of occurrences of one terminator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TerminatorCount(usize);

impl TerminatorCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn increment(&mut self) {
        self.0 += 1;
    }

    /// Withdraws one previously counted occurrence. Saturates at zero.
    #[inline]
    pub fn retract(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }
}

/// Number of raw bytes consumed from a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ByteCount(u64);

impl ByteCount {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn increment(&mut self) {
        self.0 += 1;
    }
}

macro_rules! impl_count_ops {
    ($ty:ident, $raw:ty) => {
        impl Default for $ty {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl PartialEq<$raw> for $ty {
            fn eq(&self, other: &$raw) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$ty> for $raw {
            fn eq(&self, other: &$ty) -> bool {
                *self == other.0
            }
        }

        impl From<$raw> for $ty {
            fn from(value: $raw) -> Self {
                Self::new(value)
            }
        }

        impl From<$ty> for $raw {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_count_ops!(TerminatorCount, usize);
impl_count_ops!(ByteCount, u64);
