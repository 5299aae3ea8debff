//! Capacity-bounded, append-only record of accepted jobs.

use crate::core::{PrintError, PrintJob, Result, MAX_JOBS};

/// Append-only log of the jobs accepted for printing.
///
/// The log never shrinks. Once it holds `capacity` jobs every further
/// [`append`](Self::append) fails with [`PrintError::CapacityExceeded`] and the
/// job is dropped. The printer never reads the log; it exists for audit and
/// queue snapshots.
///
/// # Example
///
/// ```rust
/// use print_queue_system::core::{Category, PrintError, PrintJob};
/// use print_queue_system::queue::BoundedSubmissionLog;
///
/// let mut log = BoundedSubmissionLog::with_capacity(1);
/// log.append(PrintJob::new(1, 4, Category::Newspaper, 1)).unwrap();
///
/// let overflow = log.append(PrintJob::new(2, 4, Category::Newspaper, 1));
/// assert!(matches!(overflow, Err(PrintError::CapacityExceeded { job_id: 2, .. })));
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedSubmissionLog {
    jobs: Vec<PrintJob>,
    capacity: usize,
}

impl BoundedSubmissionLog {
    /// Creates an empty log holding at most [`MAX_JOBS`] jobs.
    pub fn new() -> Self {
        Self::with_capacity(MAX_JOBS)
    }

    /// Creates an empty log with a custom capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be greater than 0");
        Self {
            jobs: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Records `job` if there is room.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::CapacityExceeded`] when the log is full. The job is
    /// not recorded.
    pub fn append(&mut self, job: PrintJob) -> Result<()> {
        if self.is_full() {
            return Err(PrintError::capacity_exceeded(job.job_id, self.capacity));
        }
        self.jobs.push(job);
        Ok(())
    }

    /// Number of accepted jobs
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether no job was accepted yet
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Whether further appends will be rejected
    pub fn is_full(&self) -> bool {
        self.jobs.len() >= self.capacity
    }

    /// Maximum number of jobs
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Accepted jobs in submission order
    pub fn jobs(&self) -> &[PrintJob] {
        &self.jobs
    }
}

impl Default for BoundedSubmissionLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    fn job(id: i32) -> PrintJob {
        PrintJob::new(id, 2, Category::Newspaper, 1)
    }

    #[test]
    fn test_default_capacity() {
        let log = BoundedSubmissionLog::new();
        assert_eq!(log.capacity(), MAX_JOBS);
        assert!(log.is_empty());
        assert!(!log.is_full());
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut log = BoundedSubmissionLog::new();
        for id in [5, 1, 3] {
            log.append(job(id)).unwrap();
        }
        let ids: Vec<i32> = log.jobs().iter().map(|j| j.job_id).collect();
        assert_eq!(ids, vec![5, 1, 3]);
    }

    #[test]
    fn test_overflow_is_rejected() {
        let mut log = BoundedSubmissionLog::new();
        for id in 1..=MAX_JOBS as i32 {
            log.append(job(id)).unwrap();
        }
        assert!(log.is_full());

        let err = log.append(job(11)).unwrap_err();
        assert!(matches!(
            err,
            PrintError::CapacityExceeded {
                job_id: 11,
                capacity: MAX_JOBS
            }
        ));
        assert_eq!(log.len(), MAX_JOBS);
        assert!(log.jobs().iter().all(|j| j.job_id != 11));
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than 0")]
    fn test_zero_capacity_panics() {
        let _ = BoundedSubmissionLog::with_capacity(0);
    }
}
