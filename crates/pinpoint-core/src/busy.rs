//! In-flight markers that reject duplicate submissions.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{PinpointError, Result};

/// A flag raised for the duration of one in-flight operation.
#[derive(Debug, Default)]
pub struct BusyFlag {
    raised: AtomicBool,
}

impl BusyFlag {
    /// Whether an operation is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Raise the flag, or fail with `Busy` if it is already raised.
    ///
    /// The flag is lowered when the returned guard is dropped, on success and
    /// error paths alike.
    pub fn acquire(&self, operation: &'static str) -> Result<BusyGuard<'_>> {
        self.raised
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| PinpointError::Busy { operation })?;
        Ok(BusyGuard { flag: &self.raised })
    }
}

/// Lowers its [`BusyFlag`] on drop.
#[derive(Debug)]
pub struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_is_rejected_until_release() {
        let flag = BusyFlag::default();
        assert!(!flag.is_busy());

        let guard = flag.acquire("Saving").unwrap();
        assert!(flag.is_busy());
        let err = flag.acquire("Saving").unwrap_err();
        assert_eq!(err.to_string(), "Saving is already in progress");

        drop(guard);
        assert!(!flag.is_busy());
        assert!(flag.acquire("Saving").is_ok());
    }
}
