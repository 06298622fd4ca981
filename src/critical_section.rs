//! Scoped interrupt-disable critical section.
//!
//! The timer core never needs this: counter reads are single-register and
//! atomic. It exists for collaborators doing multi-register read-modify-write
//! sequences (pin configuration and the like).
//!
//! The guard saves the current interrupt-enable state and disables interrupts
//! when created, and restores the saved state when dropped, so sections nest.
//! Compiler fences on both edges keep memory accesses inside the section.

use core::fmt;
use core::sync::atomic::{Ordering, compiler_fence};

/// Global interrupt enable control.
pub trait InterruptMask {
    /// Saved interrupt-enable state
    type State: Copy;

    /// Save the current state and disable interrupts.
    fn save_and_disable(&self) -> Self::State;

    /// Restore a previously saved state.
    fn restore(&self, state: Self::State);
}

/// RAII guard: interrupts stay disabled while it is alive.
#[must_use = "interrupts are re-enabled as soon as the guard is dropped"]
pub struct CriticalSection<'a, M: InterruptMask> {
    mask: &'a M,
    saved: M::State,
}

impl<'a, M: InterruptMask> CriticalSection<'a, M> {
    /// Enter the critical section.
    pub fn enter(mask: &'a M) -> Self {
        let saved = mask.save_and_disable();
        compiler_fence(Ordering::SeqCst);
        Self { mask, saved }
    }
}

impl<M: InterruptMask> Drop for CriticalSection<'_, M> {
    fn drop(&mut self) {
        compiler_fence(Ordering::SeqCst);
        self.mask.restore(self.saved);
    }
}

impl<M: InterruptMask> fmt::Debug for CriticalSection<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CriticalSection").finish_non_exhaustive()
    }
}

/// Run `f` inside a [`CriticalSection`] on `mask`.
///
/// Unlike `critical_section::with` from the `critical-section` crate, the
/// interrupt control is an explicit argument, so collaborators can be tested
/// against a fake [`InterruptMask`].
pub fn with<M: InterruptMask, R>(mask: &M, f: impl FnOnce(&CriticalSection<'_, M>) -> R) -> R {
    let cs = CriticalSection::enter(mask);
    f(&cs)
}

/// Interrupt mask backed by the `critical-section` crate.
///
/// On Cortex-M the single-core implementation saves PRIMASK and disables
/// interrupts. The final binary selects the implementation, e.g. through the
/// `critical-section-single-core` feature of `cortex-m`.
#[cfg(feature = "cortex-m")]
#[derive(Debug, Default, Clone, Copy)]
pub struct CortexMInterrupts;

#[cfg(feature = "cortex-m")]
impl InterruptMask for CortexMInterrupts {
    type State = ::critical_section::RestoreState;

    fn save_and_disable(&self) -> Self::State {
        // SAFETY: every acquire is released by the guard that requested it,
        // in reverse order of acquisition
        unsafe { ::critical_section::acquire() }
    }

    fn restore(&self, state: Self::State) {
        // SAFETY: `state` comes from the matching `save_and_disable`
        unsafe { ::critical_section::release(state) }
    }
}
