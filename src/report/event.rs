//! Progress events emitted by the workers

use crate::core::PrintJob;
use crate::queue::QueueSnapshot;
use serde::Serialize;
use std::fmt;

const RULE: &str = "==================================================";

/// Something observable that happened in the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PipelineEvent {
    /// A job was accepted into the submission log and ready queue
    Submitted {
        /// The accepted job
        job: PrintJob,
    },
    /// A job was dropped because the submission log is full
    Rejected {
        /// The dropped job
        job: PrintJob,
        /// Submission log capacity
        capacity: usize,
    },
    /// Contents of both queues
    Snapshot {
        /// Copy taken under the queue lock
        snapshot: QueueSnapshot,
    },
    /// All input jobs were handled and the terminate marker queued
    SubmissionComplete {
        /// Jobs announced by the input
        requested: usize,
        /// Jobs that made it into the ready queue
        accepted: usize,
    },
    /// Submission stopped on bad input; the printer will not start
    SubmissionAborted {
        /// Why reading stopped
        reason: String,
    },
    /// The printer took a job
    PrintStarted {
        /// Job being printed
        job: PrintJob,
    },
    /// The printer finished a job
    PrintFinished {
        /// Job that was printed
        job: PrintJob,
    },
    /// Units left on the ready signal after a print
    SignalState {
        /// Current signal count
        available: usize,
    },
    /// The printer reached the terminate marker
    PrinterStopped {
        /// Jobs printed in total
        printed: u64,
    },
}

impl fmt::Display for PipelineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineEvent::Submitted { job } => write!(f, "\nJob Submitted: {}", job),
            PipelineEvent::Rejected { job, .. } => {
                write!(f, "Job Queue is full! Cannot add Job ID: {}", job.job_id)
            }
            PipelineEvent::Snapshot { snapshot } => {
                write!(f, "\n{}\n{}\n{}", RULE, snapshot, RULE)
            }
            PipelineEvent::SubmissionComplete {
                requested,
                accepted,
            } => write!(
                f,
                "\n[Main] Submitting {} jobs for processing ({} accepted)...\n\
                 [Main] All jobs submitted; processing will now begin.",
                requested, accepted
            ),
            PipelineEvent::SubmissionAborted { reason } => {
                write!(f, "Invalid input, submission aborted: {}", reason)
            }
            PipelineEvent::PrintStarted { job } => write!(
                f,
                "\nPrinting Job ID: {}, Pages: {}, Type: {}, Priority: {}...",
                job.job_id,
                job.pages,
                job.category.code(),
                job.priority
            ),
            PipelineEvent::PrintFinished { job } => {
                write!(f, "Job ID: {} Printed Successfully!", job.job_id)
            }
            PipelineEvent::SignalState { available } => {
                write!(f, "\nSemaphore States: printer = {}", available)
            }
            PipelineEvent::PrinterStopped { printed } => {
                write!(f, "\n[Printer] Terminate marker reached after {} jobs.", printed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    #[test]
    fn test_display_lines() {
        let job = PrintJob::new(3, 6, Category::AdBanner, 1);
        assert_eq!(
            PipelineEvent::PrintStarted { job }.to_string(),
            "\nPrinting Job ID: 3, Pages: 6, Type: 3, Priority: 1..."
        );
        assert_eq!(
            PipelineEvent::PrintFinished { job }.to_string(),
            "Job ID: 3 Printed Successfully!"
        );
        assert_eq!(
            PipelineEvent::Rejected { job, capacity: 10 }.to_string(),
            "Job Queue is full! Cannot add Job ID: 3"
        );
    }

    #[test]
    fn test_serialize_tagged() {
        let job = PrintJob::new(1, 2, Category::Newspaper, 4);
        let value = serde_json::to_value(PipelineEvent::Submitted { job }).unwrap();
        assert_eq!(value["event"], "submitted");
        assert_eq!(value["job"]["job_id"], 1);
        assert_eq!(value["job"]["category"], "Newspaper");
    }
}
