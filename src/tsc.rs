//! Timestamp counter: timing arithmetic on top of a free-running counter.
//!
//! Two counter snapshots are enough to tell how much time passed between
//! them, provided the difference is taken modulo the counter width. The idea
//! is the same as the `jiffies` comparisons in the Linux kernel: measure
//! execution time, busy-wait, or test whether a period has elapsed without any
//! interrupt or allocation.
//!
//! # Wrap window
//!
//! With an N bit counter, durations and polling intervals must stay below
//! `2^(N-1)` ticks ([`Tsc::max_period`]). This is a precondition, not a
//! checked error: exceeding it yields a wrong (too small) elapsed time.
//! [`Tsc::checked_period`] is available for validating configuration values.
//!
//! # Example
//!
//! ```
//! use tsc_timer::Tsc;
//! use tsc_timer::time_base::ManualTimeBase;
//!
//! let base = ManualTimeBase::<24, 1_000_000>::new();
//! let tsc = Tsc::new(&base);
//!
//! let mut last_blink = tsc.now();
//! let period = tsc.ms_to_ticks(500.0);
//!
//! base.advance(499_999);
//! assert!(!tsc.is_elapsed_repetitive(&mut last_blink, period));
//! base.advance(1);
//! assert!(tsc.is_elapsed_repetitive(&mut last_blink, period));
//! ```

use crate::error::TimeError;
use crate::math;
use crate::ticks::TickCount;
use crate::time_base::TimeBase;

/// Timestamp counter bound to a time base.
///
/// Holds nothing but a reference to the time base, so it is `Copy` and can be
/// handed out freely.
#[derive(Debug)]
pub struct Tsc<'a, B: TimeBase> {
    base: &'a B,
}

impl<B: TimeBase> Clone for Tsc<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: TimeBase> Copy for Tsc<'_, B> {}

impl<'a, B: TimeBase> Tsc<'a, B> {
    /// Create a timestamp counter on top of `base`.
    pub const fn new(base: &'a B) -> Self {
        Self { base }
    }

    /// The underlying time base.
    pub fn time_base(&self) -> &'a B {
        self.base
    }

    /// Current counter value.
    #[inline]
    pub fn now(&self) -> B::Ticks {
        self.base.now()
    }

    // ------------------------------------------------------------------------
    // Unit conversion
    // ------------------------------------------------------------------------

    /// Convert seconds into ticks, rounding half away from zero.
    ///
    /// Prefer [`math::sec_to_ticks`] in `const` items; the value is identical.
    pub fn sec_to_ticks(&self, sec: f64) -> B::Ticks {
        B::Ticks::from_u64(math::sec_to_ticks(B::COUNTER_CLK_HZ, sec))
    }

    /// Convert milliseconds into ticks, rounding half away from zero.
    pub fn ms_to_ticks(&self, ms: f64) -> B::Ticks {
        B::Ticks::from_u64(math::ms_to_ticks(B::COUNTER_CLK_HZ, ms))
    }

    /// Convert microseconds into ticks, rounding half away from zero.
    pub fn us_to_ticks(&self, us: f64) -> B::Ticks {
        B::Ticks::from_u64(math::us_to_ticks(B::COUNTER_CLK_HZ, us))
    }

    /// Convert microseconds into ticks with integer arithmetic (truncating).
    ///
    /// Intended for runtime values on targets without an FPU.
    pub fn i_us_to_ticks(&self, us: u32) -> B::Ticks {
        B::Ticks::from_u64(math::i_us_to_ticks(B::COUNTER_CLK_HZ, us))
    }

    /// Convert a tick count into whole microseconds (truncating).
    pub fn ticks_to_us(&self, ticks: B::Ticks) -> u64 {
        math::ticks_to_us(B::COUNTER_CLK_HZ, ticks.into_u64())
    }

    // ------------------------------------------------------------------------
    // Elapsed time
    // ------------------------------------------------------------------------

    /// Time elapsed between two timestamps.
    ///
    /// Correct across counter wraparound as long as the true distance is
    /// inside the wrap window.
    #[inline]
    pub fn elapsed(&self, older: B::Ticks, newer: B::Ticks) -> B::Ticks {
        newer.wrapping_sub(older) & B::COUNTER_MASK
    }

    /// Whether `period` ticks have passed since `start`.
    #[inline]
    pub fn is_elapsed(&self, start: B::Ticks, period: B::Ticks) -> bool {
        self.elapsed(start, self.now()) >= period
    }

    /// Periodic variant of [`is_elapsed`](Self::is_elapsed).
    ///
    /// The counter is sampled once. If `period` has passed, `start` moves to
    /// that same sample, so the check can be repeated without accumulating
    /// extra delay from a second read.
    pub fn is_elapsed_repetitive(&self, start: &mut B::Ticks, period: B::Ticks) -> bool {
        let now = self.now();

        if self.elapsed(*start, now) >= period {
            *start = now;
            return true;
        }
        false
    }

    /// Busy-wait for `period` ticks.
    pub fn delay(&self, period: B::Ticks) {
        let start = self.now();

        while !self.is_elapsed(start, period) {
            core::hint::spin_loop();
        }
    }

    // ------------------------------------------------------------------------
    // Wrap window
    // ------------------------------------------------------------------------

    /// Largest period the counter measures unambiguously (`2^(N-1) - 1`).
    pub fn max_period(&self) -> B::Ticks {
        B::COUNTER_MASK >> 1
    }

    /// Validate a period against the wrap window.
    pub fn checked_period(&self, period: B::Ticks) -> Result<B::Ticks, TimeError> {
        let max = self.max_period();
        if period > max {
            return Err(TimeError::PeriodTooLong {
                requested: period.into_u64(),
                max: max.into_u64(),
            });
        }
        Ok(period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_base::{ManualTimeBase, ScriptedTimeBase};
    use core::cell::Cell;

    type Base8 = ManualTimeBase<8, 1_000_000>;
    type Base24 = ManualTimeBase<24, 1_000_000>;

    #[test]
    fn test_elapsed_same_timestamp_is_zero() {
        let base = Base8::new();
        let tsc = Tsc::new(&base);
        for a in 0..=255u32 {
            assert_eq!(tsc.elapsed(a, a), 0);
        }
    }

    #[test]
    fn test_elapsed_across_wraparound() {
        let base = Base8::new();
        let tsc = Tsc::new(&base);
        // Exhaustive over an 8 bit counter, distances up to half the range
        for a in 0..=255u32 {
            for d in 0..=128u32 {
                let newer = (a + d) % 256;
                assert_eq!(tsc.elapsed(a, newer), d, "a={} d={}", a, d);
            }
        }
    }

    #[test]
    fn test_elapsed_ignores_bits_outside_mask() {
        let base = Base24::new();
        let tsc = Tsc::new(&base);
        assert_eq!(tsc.elapsed(0x00ff_fff0, 0x0000_0010), 0x20);
        assert_eq!(tsc.elapsed(0xff00_0000, 0x0000_0005), 5);
    }

    #[test]
    fn test_conversions() {
        let base = Base24::new();
        let tsc = Tsc::new(&base);
        assert_eq!(tsc.sec_to_ticks(1.0), 1_000_000);
        assert_eq!(tsc.ms_to_ticks(1.5), 1_500);
        assert_eq!(tsc.us_to_ticks(1500.6), 1501);
        assert_eq!(tsc.i_us_to_ticks(1500), 1500);
        assert_eq!(tsc.ticks_to_us(2_500), 2_500);
    }

    /// Full-width 16 bit counter, to exercise a non-`u32` tick type.
    struct Counter16(Cell<u16>);

    impl TimeBase for Counter16 {
        type Ticks = u16;

        const COUNTER_MASK: u16 = u16::MAX;
        const COUNTER_CLK_HZ: u32 = 1_000_000;

        fn init(&mut self) {}

        fn deinit(&mut self) {}

        fn now(&self) -> u16 {
            self.0.get()
        }
    }

    #[test]
    fn test_u16_ticks_wrap_and_truncate() {
        let base = Counter16(Cell::new(65_530));
        let tsc = Tsc::new(&base);
        let start = tsc.now();
        base.0.set(10);
        assert_eq!(tsc.elapsed(start, tsc.now()), 16);
        assert_eq!(tsc.max_period(), 0x7fff);
        // 70 ms do not fit into 16 bits at 1 MHz: silently truncated, no panic
        assert_eq!(tsc.ms_to_ticks(70.0), (70_000u32 - 65_536) as u16);
    }

    #[test]
    fn test_is_elapsed() {
        let base = Base24::new();
        let tsc = Tsc::new(&base);
        let start = tsc.now();
        assert!(tsc.is_elapsed(start, 0));
        assert!(!tsc.is_elapsed(start, 100));
        base.advance(99);
        assert!(!tsc.is_elapsed(start, 100));
        base.advance(1);
        assert!(tsc.is_elapsed(start, 100));
    }

    #[test]
    fn test_is_elapsed_across_wraparound() {
        let base = Base8::with_initial(250);
        let tsc = Tsc::new(&base);
        let start = tsc.now();
        base.advance(9);
        assert!(!tsc.is_elapsed(start, 10));
        base.advance(1);
        assert!(tsc.is_elapsed(start, 10));
    }

    #[test]
    fn test_is_elapsed_repetitive_uses_single_sample() {
        // First read is the start, second is the repetitive check
        let base = ScriptedTimeBase::<4, 24, 1_000_000>::from_slice(&[0, 105, 150, 210]).unwrap();
        let tsc = Tsc::new(&base);
        let mut start = tsc.now();

        assert!(tsc.is_elapsed_repetitive(&mut start, 100));
        assert_eq!(start, 105);
        assert!(!tsc.is_elapsed_repetitive(&mut start, 100));
        assert_eq!(start, 105);
        assert!(tsc.is_elapsed_repetitive(&mut start, 100));
        assert_eq!(start, 210);
    }

    #[test]
    fn test_delay_waits_full_period() {
        let base = ManualTimeBase::<16, 1_000_000>::with_auto_increment(3);
        let tsc = Tsc::new(&base);
        let before = base.now();
        tsc.delay(100);
        let after = base.now();
        assert!(tsc.elapsed(before, after) >= 100);
    }

    #[test]
    fn test_delay_zero_returns_immediately() {
        let base = Base24::new();
        let tsc = Tsc::new(&base);
        tsc.delay(0);
    }

    #[test]
    fn test_max_period_and_checked_period() {
        let base = Base24::new();
        let tsc = Tsc::new(&base);
        assert_eq!(tsc.max_period(), 0x007f_ffff);
        assert_eq!(tsc.checked_period(0x007f_ffff), Ok(0x007f_ffff));
        assert_eq!(
            tsc.checked_period(0x0080_0000),
            Err(TimeError::PeriodTooLong {
                requested: 0x0080_0000,
                max: 0x007f_ffff,
            })
        );
    }
}
