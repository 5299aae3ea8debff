//! One-shot start latch.

use parking_lot::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// A latch that starts closed and, once opened, stays open.
///
/// The print worker waits here until submission has finished. Opening twice
/// is harmless.
#[derive(Debug, Default)]
pub struct StartGate {
    open: Mutex<bool>,
    condvar: Condvar,
}

impl StartGate {
    /// Creates a closed gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the gate and releases every waiter.
    pub fn open(&self) {
        let mut open = self.open.lock();
        *open = true;
        self.condvar.notify_all();
    }

    /// Blocks until the gate is open. Returns immediately if it already is.
    pub fn wait_until_open(&self) {
        let mut open = self.open.lock();
        while !*open {
            self.condvar.wait(&mut open);
        }
    }

    /// Like [`wait_until_open`](Self::wait_until_open) but gives up after `timeout`.
    ///
    /// Returns whether the gate is open.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut open = self.open.lock();
        while !*open {
            if self.condvar.wait_until(&mut open, deadline).timed_out() {
                break;
            }
        }
        *open
    }

    /// Whether the gate has been opened
    pub fn is_open(&self) -> bool {
        *self.open.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_closed_gate_times_out() {
        let gate = StartGate::new();
        assert!(!gate.is_open());
        assert!(!gate.wait_timeout(Duration::from_millis(20)));
    }

    #[test]
    fn test_open_is_idempotent() {
        let gate = StartGate::new();
        gate.open();
        gate.open();
        assert!(gate.is_open());
        gate.wait_until_open();
        gate.wait_until_open();
    }

    #[test]
    fn test_open_releases_all_waiters() {
        let gate = Arc::new(StartGate::new());
        let waiters: Vec<_> = (0..4)
            .map(|_| {
                let gate = Arc::clone(&gate);
                thread::spawn(move || gate.wait_until_open())
            })
            .collect();

        thread::sleep(Duration::from_millis(20));
        assert!(waiters.iter().all(|w| !w.is_finished()));

        gate.open();
        gate.open();
        for waiter in waiters {
            waiter.join().expect("waiter panicked");
        }
    }
}
