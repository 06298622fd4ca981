//! Error types for time base lifecycle and period validation.
//!
//! The timing arithmetic itself never fails. `TimeError` only covers lifecycle
//! misuse of a [`TimeService`](crate::rte::TimeService), the opt-in period
//! check, and construction of the scripted simulation counter.

use core::fmt;

/// Time service error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// `init()` called while the time base is already running
    AlreadyInitialized,

    /// `deinit()` called while the time base is not running
    NotInitialized,

    /// Period does not fit into half the counter wrap window
    PeriodTooLong {
        /// Requested period in ticks
        requested: u64,
        /// Largest period the counter can measure unambiguously
        max: u64,
    },

    /// Scripted counter values exceed the fixed script capacity
    ScriptTooLong {
        /// Script capacity
        capacity: usize,
    },
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::AlreadyInitialized => write!(f, "Time base already initialized"),
            TimeError::NotInitialized => write!(f, "Time base not initialized"),
            TimeError::PeriodTooLong { requested, max } => {
                write!(
                    f,
                    "Period of {} ticks exceeds maximum of {} ticks",
                    requested, max
                )
            }
            TimeError::ScriptTooLong { capacity } => {
                write!(f, "Script exceeds capacity of {} values", capacity)
            }
        }
    }
}
