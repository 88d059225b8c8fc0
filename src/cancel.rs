//! Cooperative cancellation for `no_std` environments.
//!
//! A flag built on `critical-section`, raised from an interrupt or signal
//! handler and polled by the frame driver at every frame boundary. A frame
//! that has started writing is always finished before the flag is observed.

use core::cell::Cell;

use critical_section::Mutex;

/// A cancellation flag shared between an interrupt source and an effect.
///
/// Safe to raise from any context; reads and writes happen inside critical
/// sections. Usually stored in a `static`.
pub struct CancelSignal {
    raised: Mutex<Cell<bool>>,
}

impl CancelSignal {
    /// Create a new lowered signal.
    pub const fn new() -> Self {
        Self {
            raised: Mutex::new(Cell::new(false)),
        }
    }

    /// Get a handle that can only raise the signal.
    pub const fn trigger(&self) -> CancelTrigger<'_> {
        CancelTrigger { signal: self }
    }

    /// Request cancellation of the running effect.
    pub fn raise(&self) {
        critical_section::with(|cs| self.raised.borrow(cs).set(true));
    }

    /// Check whether cancellation was requested.
    pub fn is_raised(&self) -> bool {
        critical_section::with(|cs| self.raised.borrow(cs).get())
    }

    /// Lower the signal, returning whether it was raised.
    ///
    /// Effects that recover from cancellation call this before cleaning up.
    pub fn acknowledge(&self) -> bool {
        critical_section::with(|cs| self.raised.borrow(cs).replace(false))
    }
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// A raise-only handle for a [`CancelSignal`].
///
/// Lightweight reference meant to be handed to interrupt handlers.
#[derive(Clone, Copy)]
pub struct CancelTrigger<'a> {
    signal: &'a CancelSignal,
}

impl CancelTrigger<'_> {
    /// Request cancellation of the running effect.
    pub fn raise(&self) {
        self.signal.raise();
    }
}
