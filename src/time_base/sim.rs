//! Simulated counters for host testing.
//!
//! Both simulations use `u32` ticks with `BITS` significant bits, so wrap
//! behaviour of narrow hardware counters (8, 16, 24 bit) can be reproduced
//! on the host. Counter state lives in `Cell`s: tests advance time through a
//! shared reference while timers hold on to the same base.

use core::cell::Cell;

use crate::error::TimeError;
use crate::math;
use crate::time_base::TimeBase;

// ============================================================================
// ManualTimeBase
// ============================================================================

/// Counter that only moves when told to.
///
/// Time advances through [`advance`](Self::advance) / [`set`](Self::set), and
/// optionally by a fixed step on every `now()` read so that busy-wait loops
/// such as `Tsc::delay` terminate.
///
/// # Example
///
/// ```
/// use tsc_timer::time_base::{ManualTimeBase, TimeBase};
///
/// let base = ManualTimeBase::<8, 1_000>::with_initial(250);
/// base.advance(10);
/// assert_eq!(base.now(), 4); // 260 wraps at 8 bits
/// ```
///
/// `BITS` must be in `1..=32`:
///
/// ```compile_fail
/// use tsc_timer::time_base::ManualTimeBase;
///
/// let base = ManualTimeBase::<40, 1_000>::new();
/// ```
#[derive(Debug)]
pub struct ManualTimeBase<const BITS: u32, const HZ: u32> {
    counter: Cell<u32>,
    step: Cell<u32>,
    running: bool,
}

impl<const BITS: u32, const HZ: u32> ManualTimeBase<BITS, HZ> {
    const MASK: u32 = {
        assert!(matches!(BITS, 1..=32), "counter width must be 1 to 32 bits");
        math::mask_for_bits(BITS) as u32
    };

    /// Create a stopped counter at zero.
    pub const fn new() -> Self {
        Self::with_initial(0)
    }

    /// Create a counter starting at `value` (masked to `BITS`).
    pub const fn with_initial(value: u32) -> Self {
        Self {
            counter: Cell::new(value & Self::MASK),
            step: Cell::new(0),
            running: false,
        }
    }

    /// Create a counter that advances by `step` after every read.
    pub const fn with_auto_increment(step: u32) -> Self {
        Self {
            step: Cell::new(step),
            ..Self::new()
        }
    }

    /// Set the raw counter value (masked to `BITS`).
    pub fn set(&self, value: u32) {
        self.counter.set(value & Self::MASK);
    }

    /// Advance the counter by `ticks`, wrapping at `BITS`.
    pub fn advance(&self, ticks: u32) {
        self.set(self.counter.get().wrapping_add(ticks));
    }

    /// Change the per-read increment (`0` disables it).
    pub fn set_auto_increment(&self, step: u32) {
        self.step.set(step);
    }

    /// Whether `init()` has been called without a matching `deinit()`.
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl<const BITS: u32, const HZ: u32> TimeBase for ManualTimeBase<BITS, HZ> {
    type Ticks = u32;

    const COUNTER_MASK: u32 = Self::MASK;
    const COUNTER_CLK_HZ: u32 = HZ;

    fn init(&mut self) {
        self.running = true;
    }

    fn deinit(&mut self) {
        self.running = false;
    }

    fn now(&self) -> u32 {
        let value = self.counter.get();
        let step = self.step.get();
        if step != 0 {
            self.advance(step);
        }
        value
    }
}

impl<const BITS: u32, const HZ: u32> Default for ManualTimeBase<BITS, HZ> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ScriptedTimeBase
// ============================================================================

/// Counter replaying a fixed sequence of raw values.
///
/// Each `now()` returns the next scripted value (masked to `BITS`). Once the
/// script is exhausted the last value repeats; an empty script reads `0`.
/// Values may decrease to model counter wraparound.
#[derive(Debug)]
pub struct ScriptedTimeBase<const N: usize, const BITS: u32, const HZ: u32> {
    values: heapless::Vec<u32, N>,
    index: Cell<usize>,
}

impl<const N: usize, const BITS: u32, const HZ: u32> ScriptedTimeBase<N, BITS, HZ> {
    const MASK: u32 = {
        assert!(matches!(BITS, 1..=32), "counter width must be 1 to 32 bits");
        math::mask_for_bits(BITS) as u32
    };

    /// Create a scripted counter.
    ///
    /// Returns `TimeError::ScriptTooLong` if `values` holds more than `N` entries.
    pub fn from_slice(values: &[u32]) -> Result<Self, TimeError> {
        let _ = Self::MASK;
        let values = heapless::Vec::from_slice(values)
            .map_err(|_| TimeError::ScriptTooLong { capacity: N })?;
        Ok(Self {
            values,
            index: Cell::new(0),
        })
    }

    /// Number of scripted values not yet read.
    pub fn remaining(&self) -> usize {
        self.values.len().saturating_sub(self.index.get())
    }
}

impl<const N: usize, const BITS: u32, const HZ: u32> TimeBase for ScriptedTimeBase<N, BITS, HZ> {
    type Ticks = u32;

    const COUNTER_MASK: u32 = Self::MASK;
    const COUNTER_CLK_HZ: u32 = HZ;

    fn init(&mut self) {
        self.index.set(0);
    }

    fn deinit(&mut self) {}

    fn now(&self) -> u32 {
        let index = self.index.get();
        let value = match self.values.get(index) {
            Some(&value) => {
                self.index.set(index + 1);
                value
            }
            None => self.values.last().copied().unwrap_or(0),
        };
        value & Self::MASK
    }
}
