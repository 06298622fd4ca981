//! # tsc-timer
//!
//! Wraparound-safe timing for embedded systems, built on a free-running
//! hardware counter.
//!
//! **Key features:**
//! - **Wraparound-safe** - Elapsed time is computed modulo the counter width
//! - **Polled** - No interrupts, never disables interrupts
//! - **Static** - Zero heap usage, timers are plain values
//! - **Const conversions** - Time to tick conversions evaluate at compile time
//! - **Swappable time base** - Hardware counter or deterministic simulation
//!
//! ## Layers
//!
//! - [`TimeBase`] - the counter a platform provides
//! - [`Tsc`] - timestamp counter arithmetic over a time base
//! - [`CountdownTimer`] - polled one-shot timer
//! - [`TimeService`] - owns the application's time base and its lifecycle
//!
//! ## Optional Features
//!
//! - `cortex-m` - SysTick time base, `critical-section` backed interrupt mask
//! - `log` / `defmt` - logging backend (mutually exclusive)
//! - `calc` - `tsc-calc` host binary
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features 'defmt' and 'log' are mutually exclusive. Enable only one for logging.");

// Logging macros, must come first
#[macro_use]
mod fmt;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod math;
pub mod ticks;
pub mod time_base;

pub mod countdown;
pub mod tsc;

pub mod critical_section;
pub mod rte;

// ============================================================================
// Re-exports - Public API
// ============================================================================

pub use countdown::{CountdownTimer, TimerState};
pub use error::TimeError;
pub use rte::{Lifecycle, TimeService};
pub use ticks::TickCount;
pub use time_base::TimeBase;
pub use tsc::Tsc;

pub use config::{Htsc, HtscTimeBase};
pub use critical_section::{CriticalSection, InterruptMask};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
