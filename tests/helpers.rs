//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

use tsc_timer::time_base::ManualTimeBase;
use tsc_timer::{CountdownTimer, TimeBase, Tsc};

// ============================================================================
// Control Loop Simulation
// ============================================================================

/// Run a polling loop: advance the counter by `step` ticks, then `update()`
/// the timer, until it stops running or `max_iterations` is reached.
///
/// Returns the number of iterations performed.
pub fn poll_until_done<const BITS: u32, const HZ: u32>(
    base: &ManualTimeBase<BITS, HZ>,
    timer: &mut CountdownTimer<ManualTimeBase<BITS, HZ>>,
    step: u32,
    max_iterations: u32,
) -> u32 {
    let tsc = Tsc::new(base);
    let mut iterations = 0;
    while timer.is_running() && iterations < max_iterations {
        base.advance(step);
        timer.update(&tsc);
        iterations += 1;
    }
    iterations
}

/// Total ticks covered by `iterations` steps, for readable assertions.
pub fn ticks_after(iterations: u32, step: u32) -> u64 {
    iterations as u64 * step as u64
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the three state predicates agree with the expected state name.
pub fn assert_state<B: TimeBase>(timer: &CountdownTimer<B>, expected: &str) {
    let actual = (timer.is_stopped(), timer.is_running(), timer.is_expired());
    let wanted = match expected {
        "stopped" => (true, false, false),
        "running" => (false, true, false),
        "expired" => (false, false, true),
        other => panic!("unknown state '{}'", other),
    };
    assert_eq!(
        actual, wanted,
        "expected {} (stopped, running, expired) = {:?}, got {:?}",
        expected, wanted, actual
    );
}
