//! Polled countdown timer.
//!
//! A `CountdownTimer` is loaded with a number of ticks and counts down each
//! time its owner calls [`update`](CountdownTimer::update). There is no
//! interrupt and no callback: the owning control loop polls it.
//!
//! The timer is a plain value holding no reference to its time base. The
//! timestamp counter is passed to `start()` and `update()`, so timers can be
//! stored next to the service that drives them, or in a `static`.
//!
//! ```text
//!             start(t > 0)              update(), elapsed >= remaining
//!   Stopped ───────────────► Running ─────────────────────────────► Expired
//!      ▲                        │  ▲                                   │
//!      │         stop()         │  │            start(t > 0)           │
//!      └────────────────────────┘  └───────────────────────────────────┘
//! ```
//!
//! `start(0)` goes directly to `Expired`; `stop()` is accepted in every state.
//!
//! # Update cadence
//!
//! `update()` must be called more often than the wrap window of the
//! underlying counter (see [`Tsc::max_period`]). A slower cadence is not
//! detected and silently decrements too little.

use core::fmt;

use crate::ticks::TickCount;
use crate::tsc::Tsc;
use crate::time_base::TimeBase;

/// Countdown timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerState {
    /// Not counting (initial state)
    Stopped,
    /// Counting down
    Running,
    /// Reached zero
    Expired,
}

/// One-shot countdown timer driven by polling.
///
/// # Example
///
/// ```
/// use tsc_timer::{CountdownTimer, Tsc};
/// use tsc_timer::time_base::ManualTimeBase;
///
/// let base = ManualTimeBase::<24, 1_000_000>::new();
/// let tsc = Tsc::new(&base);
/// let mut timeout = CountdownTimer::new();
///
/// timeout.start(&tsc, 1_000);
/// base.advance(400);
/// timeout.update(&tsc);
/// assert_eq!(timeout.remaining(), 600);
///
/// base.advance(600);
/// timeout.update(&tsc);
/// assert!(timeout.is_expired());
/// ```
pub struct CountdownTimer<B: TimeBase> {
    state: TimerState,
    last_update: B::Ticks,
    remaining: B::Ticks,
}

impl<B: TimeBase> CountdownTimer<B> {
    /// Create a stopped timer.
    pub const fn new() -> Self {
        Self {
            state: TimerState::Stopped,
            last_update: B::Ticks::ZERO,
            remaining: B::Ticks::ZERO,
        }
    }

    /// Load the timer with `ticks` and start counting.
    pub fn start(&mut self, tsc: &Tsc<'_, B>, ticks: B::Ticks) {
        self.last_update = tsc.now();
        self.remaining = ticks;
        self.state = if ticks == B::Ticks::ZERO {
            TimerState::Expired
        } else {
            TimerState::Running
        };
        trace!("countdown: start {} ticks", ticks.into_u64());
    }

    /// Stop the timer, whatever its state.
    pub fn stop(&mut self) {
        self.state = TimerState::Stopped;
        self.remaining = B::Ticks::ZERO;
        trace!("countdown: stop");
    }

    /// Account for the time passed since the previous update.
    ///
    /// Does nothing unless the timer is running.
    pub fn update(&mut self, tsc: &Tsc<'_, B>) {
        if self.state != TimerState::Running {
            return;
        }

        let now = tsc.now();
        let delta = tsc.elapsed(self.last_update, now);

        if delta >= self.remaining {
            self.remaining = B::Ticks::ZERO;
            self.state = TimerState::Expired;
            trace!("countdown: expired");
        } else {
            self.remaining = self.remaining.wrapping_sub(delta);
        }

        self.last_update = now;
    }

    /// Current state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Whether the timer has run down.
    pub fn is_expired(&self) -> bool {
        self.state == TimerState::Expired
    }

    /// Whether the timer is stopped.
    pub fn is_stopped(&self) -> bool {
        self.state == TimerState::Stopped
    }

    /// Whether the timer is counting down.
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Ticks left as of the last `update()`; `0` unless running.
    pub fn remaining(&self) -> B::Ticks {
        match self.state {
            TimerState::Running => self.remaining,
            TimerState::Stopped | TimerState::Expired => B::Ticks::ZERO,
        }
    }
}

impl<B: TimeBase> Default for CountdownTimer<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: TimeBase> fmt::Debug for CountdownTimer<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountdownTimer")
            .field("state", &self.state)
            .field("last_update", &self.last_update)
            .field("remaining", &self.remaining)
            .finish()
    }
}
