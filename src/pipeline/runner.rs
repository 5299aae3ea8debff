//! Pipeline orchestration

use crate::core::{PrintError, Result};
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::context::PipelineContext;
use crate::pipeline::printer::{PrintReport, PrintStats, PrintWorker};
use crate::pipeline::submission::{SubmissionReport, SubmissionWorker};
use crate::report::{ConsoleSink, EventSink};
use serde::Serialize;
use std::io::BufRead;
use std::sync::Arc;

/// Outcome of a complete run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineSummary {
    /// What the producer submitted
    pub submission: SubmissionReport,
    /// What the printer printed
    pub printing: PrintReport,
}

/// A producer/consumer print pipeline
///
/// # Example
///
/// ```rust
/// use print_queue_system::prelude::*;
/// use std::io::Cursor;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # fn main() -> Result<()> {
/// let sink = Arc::new(RecordingSink::new());
/// let config = PipelineConfig::new().with_time_unit(Duration::ZERO);
/// let pipeline = PrintPipeline::with_sink(config, sink.clone())?;
///
/// let input = Cursor::new("3\n1 4 1 5\n2 2 2 1\n3 6 3 1\n");
/// let summary = pipeline.start(input)?.join()?;
///
/// assert_eq!(summary.printing.job_ids(), vec![2, 3, 1]);
/// # Ok(())
/// # }
/// ```
pub struct PrintPipeline {
    config: PipelineConfig,
    sink: Arc<dyn EventSink>,
}

impl PrintPipeline {
    /// Pipeline reporting human-readable progress on stdout
    pub fn new(config: PipelineConfig) -> Result<Self> {
        Self::with_sink(config, Arc::new(ConsoleSink::stdout()))
    }

    /// Pipeline reporting to a custom sink
    pub fn with_sink(config: PipelineConfig, sink: Arc<dyn EventSink>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, sink })
    }

    /// Pipeline configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Spawn the printer, then the submission worker reading `input`.
    pub fn start<R>(&self, input: R) -> Result<RunningPipeline>
    where
        R: BufRead + Send + 'static,
    {
        let context = Arc::new(PipelineContext::new(
            self.config.clone(),
            Arc::clone(&self.sink),
        ));

        let printer = PrintWorker::spawn(Arc::clone(&context))?;
        let submitter = SubmissionWorker::spawn(Arc::clone(&context), input)?;
        log::debug!(
            "started '{}' and '{}'",
            printer.name(),
            submitter.name()
        );

        Ok(RunningPipeline {
            context,
            submitter: Some(submitter),
            submission: None,
            printer,
        })
    }
}

/// Handle to the two running workers
pub struct RunningPipeline {
    context: Arc<PipelineContext>,
    submitter: Option<SubmissionWorker>,
    submission: Option<std::result::Result<SubmissionReport, String>>,
    printer: PrintWorker,
}

impl RunningPipeline {
    /// Shared state of this run
    pub fn context(&self) -> &Arc<PipelineContext> {
        &self.context
    }

    /// Live printer statistics
    pub fn print_stats(&self) -> Arc<PrintStats> {
        self.printer.stats()
    }

    /// Whether the printer has reached the sentinel
    pub fn printer_finished(&self) -> bool {
        self.printer.is_finished()
    }

    /// Wait for the submission worker.
    ///
    /// The first call returns the worker's own error; later calls return the
    /// same report, or an error carrying the original message.
    pub fn wait_submission(&mut self) -> Result<SubmissionReport> {
        if let Some(submitter) = self.submitter.take() {
            let outcome = submitter.join();
            self.submission = Some(outcome.as_ref().cloned().map_err(|e| e.to_string()));
            return outcome;
        }
        match &self.submission {
            Some(Ok(report)) => Ok(report.clone()),
            Some(Err(message)) => Err(PrintError::other(message.clone())),
            None => Err(PrintError::other("submission worker missing")),
        }
    }

    /// Wait for both workers.
    ///
    /// If submission failed the start gate is never opened and this call
    /// blocks forever on the printer, as the pipeline has no recovery path
    /// for aborted input.
    pub fn join(mut self) -> Result<PipelineSummary> {
        let submission = self.wait_submission();
        if let Err(e) = &submission {
            log::error!(
                "submission failed ({}); printer is waiting on a gate that will not open",
                e
            );
        }

        let printing = self.printer.join()?;
        let submission = submission?;

        Ok(PipelineSummary {
            submission,
            printing,
        })
    }
}
