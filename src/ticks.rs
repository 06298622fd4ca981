//! Unsigned tick counter values.
//!
//! A tick value is either a point in time (a raw counter snapshot) or a
//! duration (a number of counter increments). Which one is meant follows from
//! context; the arithmetic is the same.

use core::fmt::Debug;
use core::ops::{BitAnd, Shr};

/// Unsigned fixed-width integer usable as a counter value.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. All arithmetic is modular so
/// that counter overflow never traps.
pub trait TickCount:
    Copy + Eq + Ord + Debug + BitAnd<Output = Self> + Shr<u32, Output = Self>
{
    /// Zero ticks.
    const ZERO: Self;

    /// Largest representable value.
    const MAX: Self;

    /// Modular addition.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Modular subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Truncating conversion from `u64` (keeps the low bits).
    fn from_u64(value: u64) -> Self;

    /// Lossless widening to `u64`.
    fn into_u64(self) -> u64;
}

macro_rules! impl_tick_count {
    ($($t:ty),*) => {
        $(
            impl TickCount for $t {
                const ZERO: Self = 0;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn from_u64(value: u64) -> Self {
                    value as $t
                }

                #[inline]
                fn into_u64(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_tick_count!(u8, u16, u32, u64);
