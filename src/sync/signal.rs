//! Counting signal: one unit per job made available to the printer.

use parking_lot::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// A counting semaphore starting at zero.
///
/// Every [`post`](Self::post) adds one unit and wakes at most one waiter.
/// [`wait`](Self::wait) blocks on a condition variable until a unit is
/// available and then takes it; the count never goes below zero.
///
/// # Example
///
/// ```rust
/// use print_queue_system::sync::ReadySignal;
/// use std::sync::Arc;
/// use std::thread;
///
/// let signal = Arc::new(ReadySignal::new());
/// let waiter = {
///     let signal = Arc::clone(&signal);
///     thread::spawn(move || signal.wait())
/// };
///
/// signal.post();
/// waiter.join().unwrap();
/// assert_eq!(signal.available(), 0);
/// ```
#[derive(Debug, Default)]
pub struct ReadySignal {
    count: Mutex<usize>,
    condvar: Condvar,
}

impl ReadySignal {
    /// Creates a signal with no units available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit and wakes one blocked waiter.
    pub fn post(&self) {
        let mut count = self.count.lock();
        *count += 1;
        self.condvar.notify_one();
    }

    /// Blocks until a unit is available, then takes it.
    pub fn wait(&self) {
        let mut count = self.count.lock();
        while *count == 0 {
            self.condvar.wait(&mut count);
        }
        *count -= 1;
    }

    /// Takes a unit if one is available right now.
    pub fn try_wait(&self) -> bool {
        let mut count = self.count.lock();
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Like [`wait`](Self::wait) but gives up after `timeout`.
    ///
    /// Returns `true` if a unit was taken.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut count = self.count.lock();
        while *count == 0 {
            if self.condvar.wait_until(&mut count, deadline).timed_out() {
                break;
            }
        }
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Units currently available
    pub fn available(&self) -> usize {
        *self.count.lock()
    }
}
