use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of record timestamps.
///
/// Successive calls never return a smaller value.
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

/// Wall-clock milliseconds since the Unix epoch, clamped so that it never
/// runs backwards when the system time is adjusted.
///
/// The floor lives in memory and starts over on every process start. Stored
/// records carry their own floor through `updated_at`/`created_at`.
#[derive(Default)]
pub struct SystemClock {
    last: Mutex<u64>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        let ts = system_time_millis().max(*last);
        *last = ts;
        ts
    }
}

fn system_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(any(test, feature = "test-utils"))]
pub use manual::ManualClock;

#[cfg(any(test, feature = "test-utils"))]
mod manual {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::Clock;

    /// A clock that advances by a fixed step on every read.
    pub struct ManualClock {
        next: AtomicU64,
        step: u64,
    }

    impl ManualClock {
        pub fn new(start: u64, step: u64) -> Self {
            Self {
                next: AtomicU64::new(start),
                step,
            }
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> u64 {
            self.next.fetch_add(self.step, Ordering::SeqCst)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_never_decreases() {
        let clock = SystemClock::new();
        let mut prev = clock.now();
        for _ in 0..1000 {
            let ts = clock.now();
            assert!(ts >= prev);
            prev = ts;
        }
    }

    #[test]
    fn test_system_clock_holds_last_value() {
        let clock = SystemClock::new();
        let future = system_time_millis() + 60_000;
        *clock.last.lock().unwrap() = future;

        assert_eq!(clock.now(), future);
    }

    #[test]
    fn test_manual_clock_steps() {
        let clock = ManualClock::new(100, 10);
        assert_eq!(clock.now(), 100);
        assert_eq!(clock.now(), 110);
        assert_eq!(clock.now(), 120);
    }
}
