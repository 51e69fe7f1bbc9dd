use std::sync::{Condvar, Mutex};
use std::time::Instant;

/// Stop flag for polling loops whose sleeps can be cut short.
///
/// The flag is guarded by the mutex the waiters block on.
#[derive(Default)]
pub struct ShutdownSignal {
    stopped: Mutex<bool>,
    condvar: Condvar,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        // a poisoned lock still carries the flag
        let mut stopped = self.stopped.lock().unwrap_or_else(|e| e.into_inner());
        *stopped = true;
        self.condvar.notify_all();
    }

    /// Sleep until `deadline` unless shutdown comes first.
    ///
    /// Returns `true` if shutdown was triggered. A deadline in the past
    /// returns at once.
    pub fn wait_until(&self, deadline: Instant) -> bool {
        let mut stopped = self.stopped.lock().unwrap_or_else(|e| e.into_inner());
        while !*stopped {
            let Some(remaining) = deadline.checked_duration_since(Instant::now()) else {
                break;
            };
            if remaining.is_zero() {
                break;
            }
            stopped = match self.condvar.wait_timeout(stopped, remaining) {
                Ok((guard, _)) => guard,
                Err(e) => e.into_inner().0,
            };
        }
        *stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn after(ms: u64) -> Instant {
        Instant::now() + Duration::from_millis(ms)
    }

    #[test]
    fn test_trigger() {
        let signal = ShutdownSignal::new();
        assert!(!signal.wait_until(Instant::now()));
        signal.trigger();
        assert!(signal.wait_until(Instant::now()));
    }

    #[test]
    fn test_wait_runs_out() {
        let signal = ShutdownSignal::new();
        let start = Instant::now();

        assert!(!signal.wait_until(after(50)));
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_past_deadline_returns_at_once() {
        let signal = ShutdownSignal::new();
        let start = Instant::now();
        let deadline = start.checked_sub(Duration::from_millis(10)).unwrap_or(start);

        assert!(!signal.wait_until(deadline));
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_wait_is_interrupted() {
        let signal = Arc::new(ShutdownSignal::new());
        let waiter = Arc::clone(&signal);

        let handle = thread::spawn(move || {
            let start = Instant::now();
            (waiter.wait_until(after(10_000)), start.elapsed())
        });
        thread::sleep(Duration::from_millis(50));
        signal.trigger();

        let (interrupted, elapsed) = handle.join().unwrap();
        assert!(interrupted);
        assert!(elapsed < Duration::from_secs(1));
    }

    #[test]
    fn test_wait_after_trigger_returns_immediately() {
        let signal = ShutdownSignal::new();
        signal.trigger();
        let start = Instant::now();

        assert!(signal.wait_until(after(10_000)));
        assert!(start.elapsed() < Duration::from_millis(100));
    }
}
