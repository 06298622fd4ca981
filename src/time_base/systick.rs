//! Cortex-M SysTick as free-running time base.
//!
//! SysTick is a 24-bit down counter. It is reloaded with its full mask and
//! never generates an interrupt; `now()` mirrors the register value so the
//! time base counts up.

use core::fmt;

use cortex_m::peripheral::SYST;
use cortex_m::peripheral::syst::SystClkSource;

use crate::time_base::TimeBase;

/// Valid bits of the SysTick current value register
pub const SYST_CVR_MASK: u32 = 0x00ff_ffff;

/// SysTick time base.
///
/// `SYSTICK_HZ` is the rate the counter runs at. When it equals
/// `SYSCLK_HZ` the processor clock drives the counter, otherwise the
/// implementation-defined external reference clock is selected.
pub struct SysTickTimeBase<const SYSCLK_HZ: u32, const SYSTICK_HZ: u32> {
    syst: SYST,
}

impl<const SYSCLK_HZ: u32, const SYSTICK_HZ: u32> SysTickTimeBase<SYSCLK_HZ, SYSTICK_HZ> {
    /// Take ownership of the SysTick peripheral. The counter is not started.
    pub const fn new(syst: SYST) -> Self {
        Self { syst }
    }

    /// Release the SysTick peripheral.
    pub fn free(self) -> SYST {
        self.syst
    }

    fn clock_source() -> SystClkSource {
        if SYSTICK_HZ == SYSCLK_HZ {
            SystClkSource::Core
        } else {
            SystClkSource::External
        }
    }
}

impl<const SYSCLK_HZ: u32, const SYSTICK_HZ: u32> TimeBase
    for SysTickTimeBase<SYSCLK_HZ, SYSTICK_HZ>
{
    type Ticks = u32;

    const COUNTER_MASK: u32 = SYST_CVR_MASK;
    const COUNTER_CLK_HZ: u32 = SYSTICK_HZ;

    fn init(&mut self) {
        self.syst.disable_counter();
        self.syst.disable_interrupt();
        self.syst.set_clock_source(Self::clock_source());
        self.syst.set_reload(SYST_CVR_MASK);
        self.syst.clear_current();
        self.syst.enable_counter();
        debug!(
            "systick: reload {} at {} Hz (sysclk {} Hz)",
            SYST_CVR_MASK,
            SYSTICK_HZ,
            SYSCLK_HZ
        );
    }

    fn deinit(&mut self) {
        self.syst.disable_counter();
        debug!("systick: stopped");
    }

    fn now(&self) -> u32 {
        // Single read of SYST_CVR, mirrored to count up
        SYST_CVR_MASK - (SYST::get_current() & SYST_CVR_MASK)
    }
}

impl<const SYSCLK_HZ: u32, const SYSTICK_HZ: u32> fmt::Debug
    for SysTickTimeBase<SYSCLK_HZ, SYSTICK_HZ>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SysTickTimeBase")
            .field("sysclk_hz", &SYSCLK_HZ)
            .field("systick_hz", &SYSTICK_HZ)
            .finish()
    }
}
