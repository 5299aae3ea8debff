//! Job containers shared between the submission and print workers.
//!
//! - [`BoundedSubmissionLog`]: append-only audit record, capped at [`MAX_JOBS`]
//! - [`ReadyQueue`]: jobs waiting for the printer, sorted by `(priority, pages)`
//!
//! Both live behind one lock in [`SharedQueues`] so a submission updates them
//! together.
//!
//! [`MAX_JOBS`]: crate::core::MAX_JOBS

mod ready;
mod submission_log;

pub use ready::{ReadyEntry, ReadyQueue};
pub use submission_log::BoundedSubmissionLog;

use crate::core::{PrintJob, Result};
use serde::Serialize;
use std::fmt;

/// The submission log and ready queue, guarded as a pair.
#[derive(Debug, Default)]
pub struct SharedQueues {
    /// Accepted jobs in submission order
    pub log: BoundedSubmissionLog,
    /// Jobs waiting for the printer
    pub ready: ReadyQueue,
}

impl SharedQueues {
    /// Creates empty queues sized for [`MAX_JOBS`](crate::core::MAX_JOBS).
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `job` in the log and, only if that succeeded, makes it ready.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::CapacityExceeded`](crate::core::PrintError::CapacityExceeded)
    /// when the log is full; neither container changes.
    pub fn submit(&mut self, job: PrintJob) -> Result<()> {
        self.log.append(job)?;
        self.ready.push(job)
    }

    /// Pushes the sentinel behind every submitted job.
    pub fn seal(&mut self) -> Result<()> {
        self.ready.push_sentinel()
    }

    /// Copies both containers for display.
    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            log: self.log.jobs().to_vec(),
            log_capacity: self.log.capacity(),
            ready: self.ready.entries().to_vec(),
        }
    }
}

/// Point-in-time copy of the shared queues
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueSnapshot {
    /// Submission log contents
    pub log: Vec<PrintJob>,
    /// Submission log capacity
    pub log_capacity: usize,
    /// Ready queue contents in current order
    pub ready: Vec<ReadyEntry>,
}

impl fmt::Display for QueueSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Job Queue: [")?;
        for slot in 0..self.log_capacity {
            if slot > 0 {
                write!(f, ", ")?;
            }
            match self.log.get(slot) {
                Some(job) => write!(f, "{}", job)?,
                None => write!(f, "None")?,
            }
        }
        writeln!(f, "]")?;

        write!(f, "Ready Queue: [")?;
        for (i, entry) in self.ready.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entry)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, PrintError, MAX_JOBS};

    #[test]
    fn test_submit_updates_both() {
        let mut queues = SharedQueues::new();
        queues
            .submit(PrintJob::new(1, 2, Category::Magazine, 1))
            .unwrap();
        assert_eq!(queues.log.len(), 1);
        assert_eq!(queues.ready.len(), 1);
    }

    #[test]
    fn test_rejected_job_not_ready() {
        let mut queues = SharedQueues::new();
        for id in 0..MAX_JOBS as i32 {
            queues
                .submit(PrintJob::new(id, 1, Category::Newspaper, 1))
                .unwrap();
        }
        let err = queues
            .submit(PrintJob::new(99, 1, Category::Newspaper, 0))
            .unwrap_err();
        assert!(matches!(err, PrintError::CapacityExceeded { job_id: 99, .. }));
        assert_eq!(queues.ready.job_count(), MAX_JOBS);
        assert!(queues
            .ready
            .entries()
            .iter()
            .all(|e| e.job().map(|j| j.job_id) != Some(99)));

        // Sealing is not subject to capacity.
        queues.seal().unwrap();
        assert_eq!(queues.ready.len(), MAX_JOBS + 1);
    }

    #[test]
    fn test_snapshot_display() {
        let mut queues = SharedQueues {
            log: BoundedSubmissionLog::with_capacity(3),
            ready: ReadyQueue::with_capacity(3),
        };
        queues
            .submit(PrintJob::new(1, 4, Category::Newspaper, 5))
            .unwrap();
        queues.seal().unwrap();

        let text = queues.snapshot().to_string();
        assert_eq!(
            text,
            "Job Queue: [(ID:1, Pages:4, Priority:5, Type:1), None, None]\n\
             Ready Queue: [(ID:1, Pages:4, Priority:5, Type:1), (ID:-1, Pages:-1, Priority:-1, Type:TERMINATE)]"
        );
    }
}
