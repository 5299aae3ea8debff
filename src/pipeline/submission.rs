//! Producer side: reads jobs and feeds the ready queue

use crate::core::{PrintError, PrintJob, Result};
use crate::input::JobReader;
use crate::pipeline::context::PipelineContext;
use crate::report::PipelineEvent;
use serde::Serialize;
use std::io::BufRead;
use std::sync::Arc;
use std::thread;

#[cfg(feature = "tracing")]
use tracing::{span, Level};

/// What the submission worker did with its input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionReport {
    /// Job count announced by the input
    pub requested: usize,
    /// Jobs placed in the ready queue, in submission order
    pub accepted: Vec<PrintJob>,
    /// Jobs dropped because the submission log was full
    pub rejected: Vec<PrintJob>,
}

/// Thread that submits every input job and then seals the queue.
#[derive(Debug)]
pub struct SubmissionWorker {
    name: String,
    thread: Option<thread::JoinHandle<Result<SubmissionReport>>>,
}

impl SubmissionWorker {
    /// Spawn the worker on its own named thread
    pub fn spawn<R>(context: Arc<PipelineContext>, input: R) -> Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let name = context.config().thread_name("submit");
        let thread = thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                let mut reader = JobReader::new(input);
                Self::run(&context, &mut reader)
            })
            .map_err(|e| PrintError::spawn_with_source(name.clone(), e))?;

        Ok(Self {
            name,
            thread: Some(thread),
        })
    }

    /// Thread name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the thread has returned
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, |t| t.is_finished())
    }

    /// Wait for the worker and return its report
    pub fn join(mut self) -> Result<SubmissionReport> {
        match self.thread.take() {
            Some(thread) => thread
                .join()
                .map_err(|_| PrintError::join(&self.name, "Submission worker panicked"))?,
            None => Err(PrintError::join(&self.name, "Submission worker already joined")),
        }
    }

    /// Submit every job from `reader`, then queue the sentinel and open the gate.
    ///
    /// On malformed input the worker reports and returns the error without
    /// queueing the sentinel or opening the gate. A printer waiting on that
    /// gate then blocks forever.
    pub fn run<R: BufRead>(
        context: &PipelineContext,
        reader: &mut JobReader<R>,
    ) -> Result<SubmissionReport> {
        #[cfg(feature = "tracing")]
        let submission_span = span!(Level::DEBUG, "submission");
        #[cfg(feature = "tracing")]
        let _guard = submission_span.enter();

        let result = Self::submit_all(context, reader);
        if let Err(e) = &result {
            log::error!("submission aborted: {}", e);
            context.emit(PipelineEvent::SubmissionAborted {
                reason: e.to_string(),
            });
        }
        result
    }

    fn submit_all<R: BufRead>(
        context: &PipelineContext,
        reader: &mut JobReader<R>,
    ) -> Result<SubmissionReport> {
        let requested = reader.read_count()?;
        let mut report = SubmissionReport {
            requested,
            ..Default::default()
        };
        log::debug!("submitting {} jobs", requested);

        for _ in 0..requested {
            let job = reader.read_job()?;

            let outcome = context.queues().submit(job);
            match outcome {
                Ok(()) => {
                    report.accepted.push(job);
                    context.emit(PipelineEvent::Submitted { job });
                    #[cfg(feature = "tracing")]
                    crate::tracing::metrics::record_submission(report.accepted.len());
                }
                Err(PrintError::CapacityExceeded { capacity, .. }) => {
                    log::warn!(
                        "submission log full ({} jobs), dropping job {}",
                        capacity,
                        job.job_id
                    );
                    report.rejected.push(job);
                    context.emit(PipelineEvent::Rejected { job, capacity });
                    #[cfg(feature = "tracing")]
                    crate::tracing::metrics::record_rejection(job.job_id);
                }
                Err(e) => return Err(e),
            }
            context.emit_snapshot();

            // One unit per attempted job, dropped jobs included.
            context.signal().post();
        }

        context.queues().seal()?;
        context.signal().post();

        context.emit(PipelineEvent::SubmissionComplete {
            requested,
            accepted: report.accepted.len(),
        });
        log::info!(
            "submission complete: {} accepted, {} rejected",
            report.accepted.len(),
            report.rejected.len()
        );
        context.gate().open();
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_JOBS;
    use crate::pipeline::config::PipelineConfig;
    use crate::queue::ReadyEntry;
    use crate::report::RecordingSink;
    use std::io::Cursor;

    fn context(sink: Arc<RecordingSink>) -> PipelineContext {
        PipelineContext::new(PipelineConfig::new().with_snapshots(false), sink)
    }

    fn reader(text: &str) -> JobReader<Cursor<Vec<u8>>> {
        JobReader::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn test_signal_tracks_queue_length() {
        let ctx = context(Arc::new(RecordingSink::new()));
        let report =
            SubmissionWorker::run(&ctx, &mut reader("3  1 4 1 5  2 2 2 1  3 6 3 1")).unwrap();

        assert_eq!(report.requested, 3);
        assert_eq!(report.accepted.len(), 3);
        assert!(ctx.gate().is_open());

        let queues = ctx.queues();
        assert_eq!(queues.ready.len(), 4);
        assert_eq!(queues.ready.entries().last(), Some(&ReadyEntry::Sentinel));
        assert_eq!(ctx.signal().available(), queues.ready.len());
    }

    #[test]
    fn test_dropped_jobs_still_post() {
        let sink = Arc::new(RecordingSink::new());
        let ctx = context(Arc::clone(&sink));
        let mut text = String::from("12\n");
        for id in 1..=12 {
            text.push_str(&format!("{} 2 1 1\n", id));
        }

        let report = SubmissionWorker::run(&ctx, &mut reader(&text)).unwrap();
        assert_eq!(report.accepted.len(), MAX_JOBS);
        assert_eq!(sink.rejected_ids(), vec![11, 12]);

        let queues = ctx.queues();
        assert_eq!(queues.log.len(), MAX_JOBS);
        assert_eq!(queues.ready.len(), MAX_JOBS + 1);
        // 12 attempted jobs plus the sentinel.
        assert_eq!(ctx.signal().available(), 13);
    }

    #[test]
    fn test_malformed_job_keeps_gate_closed() {
        let sink = Arc::new(RecordingSink::new());
        let ctx = context(Arc::clone(&sink));
        let err = SubmissionWorker::run(&ctx, &mut reader("2\n1 4 1 5\n2 x")).unwrap_err();

        assert!(matches!(err, PrintError::MalformedInput { .. }));
        assert!(!ctx.gate().is_open());
        assert!(!ctx.queues().ready.is_sealed());
        assert_eq!(ctx.signal().available(), 1);
        assert!(sink
            .events()
            .iter()
            .any(|e| matches!(e, PipelineEvent::SubmissionAborted { .. })));
    }
}
