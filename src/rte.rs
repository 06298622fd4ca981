//! Application time service.
//!
//! `TimeService` owns the time base of an application and manages its
//! lifecycle. It is constructed once by the composition root (typically
//! `main`) and passed by reference to whatever needs time, which keeps the
//! time base replaceable by a simulated one in tests.
//!
//! A [`Tsc`] borrows the service, so `init()`/`deinit()` (which take
//! `&mut self`) cannot run while one is alive. Countdown timers hold no
//! borrow and may outlive a restart of the time base.
//!
//! ```
//! use tsc_timer::rte::TimeService;
//! use tsc_timer::time_base::ManualTimeBase;
//!
//! let mut time = TimeService::new(ManualTimeBase::<24, 1_000_000>::new());
//! time.init().unwrap();
//!
//! let tsc = time.tsc();
//! let mut watchdog = time.countdown();
//! watchdog.start(&tsc, tsc.ms_to_ticks(10.0));
//! assert!(watchdog.is_running());
//! ```

use crate::countdown::CountdownTimer;
use crate::error::TimeError;
use crate::time_base::TimeBase;
use crate::tsc::Tsc;

/// Lifecycle of the time base owned by a [`TimeService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lifecycle {
    /// Constructed, counter not started yet
    Uninitialized,
    /// Counter running
    Running,
    /// Counter stopped by `deinit()`
    Shutdown,
}

/// Time base of the application plus its lifecycle state.
#[derive(Debug)]
pub struct TimeService<B: TimeBase> {
    base: B,
    lifecycle: Lifecycle,
}

impl<B: TimeBase> TimeService<B> {
    /// Wrap a time base. The counter is not started.
    pub const fn new(base: B) -> Self {
        Self {
            base,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    /// Start the counter.
    ///
    /// Fails with `AlreadyInitialized` if the counter is already running.
    pub fn init(&mut self) -> Result<(), TimeError> {
        if self.lifecycle == Lifecycle::Running {
            warn!("time base: init while running");
            return Err(TimeError::AlreadyInitialized);
        }

        self.base.init();
        self.lifecycle = Lifecycle::Running;
        info!(
            "time base: started, {} Hz, {} bit counter",
            B::COUNTER_CLK_HZ,
            B::counter_bits()
        );
        Ok(())
    }

    /// Stop the counter.
    ///
    /// Fails with `NotInitialized` if the counter is not running.
    pub fn deinit(&mut self) -> Result<(), TimeError> {
        if self.lifecycle != Lifecycle::Running {
            warn!("time base: deinit while not running");
            return Err(TimeError::NotInitialized);
        }

        self.base.deinit();
        self.lifecycle = Lifecycle::Shutdown;
        info!("time base: stopped");
        Ok(())
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Whether the counter is running.
    pub fn is_initialized(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    /// Timestamp counter on this service's time base.
    pub fn tsc(&self) -> Tsc<'_, B> {
        Tsc::new(&self.base)
    }

    /// New stopped countdown timer for this service's time base.
    pub fn countdown(&self) -> CountdownTimer<B> {
        CountdownTimer::new()
    }

    /// The owned time base.
    pub fn time_base(&self) -> &B {
        &self.base
    }

    /// Consume the service and return the time base.
    pub fn into_inner(self) -> B {
        self.base
    }
}
