//! Test fixtures for tsc-timer integration tests.
//!
//! Provides:
//! - `SimBase` / `Sim8Base`: simulated counters (24 and 8 bit, 1 MHz)
//! - `SimService`: time service on `SimBase`
//! - `MockInterrupts`: test implementation of `InterruptMask`
//! - `MockPinBank`: multi-register peripheral guarded by a critical section

#![allow(dead_code)]

use std::cell::Cell;

use tsc_timer::critical_section::{self, InterruptMask};
use tsc_timer::time_base::ManualTimeBase;
use tsc_timer::TimeService;

// ============================================================================
// Simulated time bases
// ============================================================================

/// 24-bit counter at 1 MHz (SysTick-sized)
pub type SimBase = ManualTimeBase<24, 1_000_000>;

/// 8-bit counter at 1 MHz, wraps every 256 ticks
pub type Sim8Base = ManualTimeBase<8, 1_000_000>;

/// Time service on the 24-bit simulated counter
pub type SimService = TimeService<SimBase>;

/// Create and start a simulated time service.
pub fn started_service() -> SimService {
    let mut time = SimService::new(SimBase::new());
    time.init().unwrap();
    time
}

// ============================================================================
// MockInterrupts - Test InterruptMask implementation
// ============================================================================

/// Mock global interrupt flag.
///
/// Records how often interrupts were disabled and restored.
#[derive(Debug)]
pub struct MockInterrupts {
    /// Current interrupt enable flag
    pub enabled: Cell<bool>,

    /// Number of `save_and_disable()` calls
    pub disables: Cell<u32>,

    /// Number of `restore()` calls
    pub restores: Cell<u32>,
}

impl MockInterrupts {
    /// Create with interrupts enabled.
    pub fn new() -> Self {
        Self {
            enabled: Cell::new(true),
            disables: Cell::new(0),
            restores: Cell::new(0),
        }
    }
}

impl Default for MockInterrupts {
    fn default() -> Self {
        Self::new()
    }
}

impl InterruptMask for MockInterrupts {
    type State = bool;

    fn save_and_disable(&self) -> bool {
        self.disables.set(self.disables.get() + 1);
        self.enabled.replace(false)
    }

    fn restore(&self, state: bool) {
        self.restores.set(self.restores.get() + 1);
        self.enabled.set(state);
    }
}

// ============================================================================
// MockPinBank - Multi-register collaborator
// ============================================================================

/// Peripheral with a mode and an output register that must change together.
///
/// Every write records whether interrupts were disabled at the time.
#[derive(Debug, Default)]
pub struct MockPinBank {
    /// Mode register
    pub mode: Cell<u32>,

    /// Output data register
    pub output: Cell<u32>,

    /// Number of register writes done with interrupts enabled
    pub unprotected_writes: Cell<u32>,
}

impl MockPinBank {
    /// Configure `pin` as output driving `high`, both registers inside one
    /// critical section.
    pub fn configure_output(&self, irq: &MockInterrupts, pin: u32, high: bool) {
        critical_section::with(irq, |_cs| {
            self.write(irq, &self.mode, self.mode.get() | (1 << pin));
            let out = if high {
                self.output.get() | (1 << pin)
            } else {
                self.output.get() & !(1 << pin)
            };
            self.write(irq, &self.output, out);
        });
    }

    fn write(&self, irq: &MockInterrupts, reg: &Cell<u32>, value: u32) {
        if irq.enabled.get() {
            self.unprotected_writes.set(self.unprotected_writes.get() + 1);
        }
        reg.set(value);
    }
}
