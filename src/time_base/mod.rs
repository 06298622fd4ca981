//! Free-running counter abstraction.
//!
//! The `TimeBase` trait is the only thing a target platform has to provide.
//! Everything else in the crate is arithmetic on the values it returns.
//!
//! Implementations shipped with the crate:
//! - [`ManualTimeBase`] and [`ScriptedTimeBase`]: deterministic simulated
//!   counters for host testing
//! - `SysTickTimeBase` (feature `cortex-m`): the Cortex-M SysTick timer

use crate::ticks::TickCount;

pub mod sim;
#[cfg(feature = "cortex-m")]
pub mod systick;

pub use sim::{ManualTimeBase, ScriptedTimeBase};
#[cfg(feature = "cortex-m")]
pub use systick::SysTickTimeBase;

/// Platform-agnostic free-running counter.
///
/// The counter must count up and wrap to zero after reaching
/// `COUNTER_MASK`. Down-counting hardware has to be mirrored by the
/// implementation (`COUNTER_MASK - value`).
///
/// Requirements:
/// - `now()` MUST NOT modify the counter or any other state observable by
///   other readers
/// - `now()` MUST return a single consistent snapshot (one register read)
/// - Bits outside `COUNTER_MASK` are ignored by all consumers
pub trait TimeBase {
    /// Raw counter value type
    type Ticks: TickCount;

    /// Bits of `Ticks` the counter actually uses (contiguous, starting at bit 0)
    const COUNTER_MASK: Self::Ticks;

    /// Frequency the counter is clocked with
    const COUNTER_CLK_HZ: u32;

    /// Configure and start the counter.
    fn init(&mut self);

    /// Stop the counter.
    fn deinit(&mut self);

    /// Current raw counter value.
    fn now(&self) -> Self::Ticks;

    /// Number of significant counter bits.
    fn counter_bits() -> u32
    where
        Self: Sized,
    {
        Self::COUNTER_MASK.into_u64().count_ones()
    }
}
