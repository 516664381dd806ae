//! Lock used for shared table state, backed by `std` or `spin`.

use core::ops::DerefMut;

/// Mutual-exclusion lock that never reports poisoning.
pub struct Mutex<T> {
    #[cfg(feature = "std")]
    inner: std::sync::Mutex<T>,
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    inner: spin::Mutex<T>,
}

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self {
            #[cfg(feature = "std")]
            inner: std::sync::Mutex::new(value),
            #[cfg(all(not(feature = "std"), feature = "alloc"))]
            inner: spin::Mutex::new(value),
        }
    }

    /// Acquires the lock. A lock poisoned by a panicking holder is recovered.
    #[cfg(feature = "std")]
    pub fn lock(&self) -> impl DerefMut<Target = T> + '_ {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Acquires the lock.
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> impl DerefMut<Target = T> + '_ {
        self.inner.lock()
    }

    /// Runs `f` with the lock held and releases it before returning.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }
}
