//! Per-instance guarded storage for timer state.
//!
//! Hosted builds use one `std::sync::Mutex` per value. Without `std` the value
//! lives in a `critical_section::Mutex`, so the platform's critical-section
//! implementation (for example `cortex-m`'s single-core one) provides the
//! exclusion.

#[cfg(not(feature = "std"))]
use core::cell::Cell;

/// A small `Copy` value that is read and written as one unit.
pub(crate) struct GuardedCell<T: Copy> {
    #[cfg(feature = "std")]
    inner: std::sync::Mutex<T>,
    #[cfg(not(feature = "std"))]
    inner: critical_section::Mutex<Cell<T>>,
}

impl<T: Copy> GuardedCell<T> {
    #[cfg(feature = "std")]
    pub(crate) const fn new(value: T) -> Self {
        Self {
            inner: std::sync::Mutex::new(value),
        }
    }

    #[cfg(not(feature = "std"))]
    pub(crate) const fn new(value: T) -> Self {
        Self {
            inner: critical_section::Mutex::new(Cell::new(value)),
        }
    }

    /// Returns a copy of the current value.
    #[inline]
    pub(crate) fn get(&self) -> T {
        self.update(|value| *value)
    }

    /// Overwrites the current value.
    #[inline]
    pub(crate) fn set(&self, new: T) {
        self.update(|value| *value = new);
    }

    /// Runs `f` on the value while holding the guard.
    ///
    /// `f` must not access this cell again; the guard is not reentrant.
    #[cfg(feature = "std")]
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        // State is always written back whole, so a poisoned lock still holds
        // a consistent value.
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut *guard)
    }

    #[cfg(not(feature = "std"))]
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut value = cell.get();
            let result = f(&mut value);
            cell.set(value);
            result
        })
    }
}
