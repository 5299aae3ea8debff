//! Priority-ordered pool of jobs waiting for the printer.

use crate::core::{PrintError, PrintJob, Result, MAX_JOBS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An item in the ready queue: a real job or the terminate marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReadyEntry {
    /// A job waiting to be printed
    Job(PrintJob),
    /// End-of-submissions marker; never printed
    Sentinel,
}

impl ReadyEntry {
    /// Whether this entry is the terminate marker
    pub fn is_sentinel(&self) -> bool {
        matches!(self, ReadyEntry::Sentinel)
    }

    /// The wrapped job, if any
    pub fn job(&self) -> Option<&PrintJob> {
        match self {
            ReadyEntry::Job(job) => Some(job),
            ReadyEntry::Sentinel => None,
        }
    }

    // The sentinel sorts after every job regardless of its fields.
    fn sort_key(&self) -> (bool, i32, i32) {
        match self {
            ReadyEntry::Job(job) => {
                let (priority, pages) = job.order_key();
                (false, priority, pages)
            }
            ReadyEntry::Sentinel => (true, 0, 0),
        }
    }
}

impl From<PrintJob> for ReadyEntry {
    fn from(job: PrintJob) -> Self {
        ReadyEntry::Job(job)
    }
}

impl fmt::Display for ReadyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadyEntry::Job(job) => job.fmt(f),
            ReadyEntry::Sentinel => write!(f, "(ID:-1, Pages:-1, Priority:-1, Type:TERMINATE)"),
        }
    }
}

/// Jobs waiting for the printer, plus at most one sentinel.
///
/// Producers append with [`push`](Self::push) in arrival order. The consumer
/// calls [`sort`](Self::sort) before every [`pop_front`](Self::pop_front) so the
/// head is always the job with the lowest `(priority, pages)`. The sentinel is
/// kept behind every job.
///
/// # Example
///
/// ```rust
/// use print_queue_system::core::{Category, PrintJob};
/// use print_queue_system::queue::{ReadyEntry, ReadyQueue};
///
/// let mut queue = ReadyQueue::new();
/// queue.push(PrintJob::new(1, 4, Category::Newspaper, 5)).unwrap();
/// queue.push(PrintJob::new(2, 2, Category::Magazine, 1)).unwrap();
/// queue.push_sentinel().unwrap();
///
/// queue.sort();
/// assert_eq!(queue.pop_front().and_then(|e| e.job().map(|j| j.job_id)), Some(2));
/// assert_eq!(queue.pop_front().and_then(|e| e.job().map(|j| j.job_id)), Some(1));
/// assert!(queue.is_drained_sentinel_only());
/// ```
#[derive(Debug, Clone)]
pub struct ReadyQueue {
    entries: Vec<ReadyEntry>,
    capacity: usize,
    sealed: bool,
}

impl ReadyQueue {
    /// Creates an empty queue with room for [`MAX_JOBS`] jobs plus the sentinel.
    pub fn new() -> Self {
        Self::with_capacity(MAX_JOBS)
    }

    /// Creates an empty queue with room for `capacity` jobs plus the sentinel.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity + 1),
            capacity,
            sealed: false,
        }
    }

    /// Appends a job at the tail.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::QueueFull`] if `capacity` jobs are already waiting.
    pub fn push(&mut self, job: PrintJob) -> Result<()> {
        let waiting = self.job_count();
        if waiting >= self.capacity {
            return Err(PrintError::queue_full(waiting, self.capacity));
        }
        self.entries.push(ReadyEntry::Job(job));
        Ok(())
    }

    /// Appends the sentinel. It does not count against the job capacity.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::AlreadySealed`] on a second call.
    pub fn push_sentinel(&mut self) -> Result<()> {
        if self.sealed {
            return Err(PrintError::AlreadySealed);
        }
        self.sealed = true;
        self.entries.push(ReadyEntry::Sentinel);
        Ok(())
    }

    /// Orders jobs by priority ascending, then pages ascending, sentinel last.
    pub fn sort(&mut self) {
        self.entries.sort_by_key(ReadyEntry::sort_key);
    }

    /// Removes the head entry. Call [`sort`](Self::sort) first.
    pub fn pop_front(&mut self) -> Option<ReadyEntry> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    /// True iff the only remaining entry is the sentinel
    pub fn is_drained_sentinel_only(&self) -> bool {
        matches!(self.entries.as_slice(), [ReadyEntry::Sentinel])
    }

    /// Whether the sentinel has been pushed
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Number of entries, sentinel included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue holds nothing at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of real jobs waiting
    pub fn job_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_sentinel()).count()
    }

    /// Entries in their current order
    pub fn entries(&self) -> &[ReadyEntry] {
        &self.entries
    }
}

impl Default for ReadyQueue {
    fn default() -> Self {
        Self::new()
    }
}
