//! Consumer side: prints jobs in priority order until the sentinel

use crate::core::{PrintError, PrintJob, Result};
use crate::pipeline::context::PipelineContext;
use crate::queue::ReadyEntry;
use crate::report::PipelineEvent;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

#[cfg(feature = "tracing")]
use tracing::{debug, span, Level};

/// Counters for the print worker
#[derive(Debug, Default)]
pub struct PrintStats {
    /// Jobs printed
    pub jobs_printed: AtomicU64,
    /// Pages printed
    pub pages_printed: AtomicU64,
    /// Total time spent printing (microseconds)
    pub total_print_time_us: AtomicU64,
    /// Wakes that found neither a job nor the sentinel
    pub empty_wakes: AtomicU64,
}

impl PrintStats {
    /// Create zeroed statistics
    pub fn new() -> Self {
        Self::default()
    }

    fn record_print(&self, job: &PrintJob, microseconds: u64) {
        self.jobs_printed.fetch_add(1, Ordering::Relaxed);
        self.pages_printed
            .fetch_add(job.pages.max(0) as u64, Ordering::Relaxed);
        self.total_print_time_us
            .fetch_add(microseconds, Ordering::Relaxed);
    }

    /// Get total jobs printed
    pub fn get_jobs_printed(&self) -> u64 {
        self.jobs_printed.load(Ordering::Relaxed)
    }

    /// Get total pages printed
    pub fn get_pages_printed(&self) -> u64 {
        self.pages_printed.load(Ordering::Relaxed)
    }

    /// Get wakes that found an empty queue
    pub fn get_empty_wakes(&self) -> u64 {
        self.empty_wakes.load(Ordering::Relaxed)
    }

    /// Get average print time per job in microseconds
    pub fn get_average_print_time_us(&self) -> f64 {
        let total = self.total_print_time_us.load(Ordering::Relaxed);
        let count = self.jobs_printed.load(Ordering::Relaxed);
        if count > 0 {
            total as f64 / count as f64
        } else {
            0.0
        }
    }
}

/// One printed job with its wall-clock window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintRecord {
    /// The job
    pub job: PrintJob,
    /// When printing began
    pub started_at: DateTime<Utc>,
    /// When printing ended
    pub finished_at: DateTime<Utc>,
}

/// Everything the printer did before stopping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrintReport {
    /// Printed jobs in print order
    pub printed: Vec<PrintRecord>,
}

impl PrintReport {
    /// IDs in print order
    pub fn job_ids(&self) -> Vec<i32> {
        self.printed.iter().map(|r| r.job.job_id).collect()
    }
}

/// Thread that waits for the start gate, then drains the ready queue.
#[derive(Debug)]
pub struct PrintWorker {
    name: String,
    thread: Option<thread::JoinHandle<PrintReport>>,
    stats: Arc<PrintStats>,
}

impl PrintWorker {
    /// Spawn the worker on its own named thread
    pub fn spawn(context: Arc<PipelineContext>) -> Result<Self> {
        let name = context.config().thread_name("printer");
        let stats = Arc::new(PrintStats::new());
        let stats_clone = Arc::clone(&stats);

        let thread = thread::Builder::new()
            .name(name.clone())
            .spawn(move || Self::run(&context, &stats_clone))
            .map_err(|e| PrintError::spawn_with_source(name.clone(), e))?;

        Ok(Self {
            name,
            thread: Some(thread),
            stats,
        })
    }

    /// Thread name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Live statistics
    pub fn stats(&self) -> Arc<PrintStats> {
        Arc::clone(&self.stats)
    }

    /// Whether the thread has returned
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, |t| t.is_finished())
    }

    /// Wait for the worker to reach the sentinel.
    ///
    /// Blocks forever if the gate is never opened.
    pub fn join(mut self) -> Result<PrintReport> {
        match self.thread.take() {
            Some(thread) => thread
                .join()
                .map_err(|_| PrintError::join(&self.name, "Print worker panicked")),
            None => Err(PrintError::join(&self.name, "Print worker already joined")),
        }
    }

    /// Print loop.
    ///
    /// Waits for the gate, then for each signal unit sorts the ready queue and
    /// takes its head. Stops without printing when only the sentinel remains.
    pub fn run(context: &PipelineContext, stats: &PrintStats) -> PrintReport {
        #[cfg(feature = "tracing")]
        let printer_span = span!(Level::DEBUG, "printer");
        #[cfg(feature = "tracing")]
        let _guard = printer_span.enter();

        let mut report = PrintReport::default();

        context.gate().wait_until_open();
        log::debug!("start gate open, printer running");

        loop {
            context.signal().wait();

            let next = {
                let mut queues = context.queues();
                queues.ready.sort();
                if queues.ready.is_drained_sentinel_only() {
                    None
                } else {
                    Some(queues.ready.pop_front())
                }
            };

            let job = match next {
                None | Some(Some(ReadyEntry::Sentinel)) => break,
                Some(Some(ReadyEntry::Job(job))) => job,
                Some(None) => {
                    stats.empty_wakes.fetch_add(1, Ordering::Relaxed);
                    log::debug!("woken with an empty ready queue");
                    continue;
                }
            };

            report.printed.push(Self::print(context, stats, job));
            context.emit_snapshot();
            context.emit(PipelineEvent::SignalState {
                available: context.signal().available(),
            });
        }

        let printed = stats.get_jobs_printed();
        context.emit(PipelineEvent::PrinterStopped { printed });
        log::info!("printer stopped after {} jobs", printed);
        #[cfg(feature = "tracing")]
        crate::tracing::metrics::record_printer_stopped(printed, stats.get_pages_printed());

        report
    }

    fn print(context: &PipelineContext, stats: &PrintStats, job: PrintJob) -> PrintRecord {
        #[cfg(feature = "tracing")]
        debug!(job_id = job.job_id, pages = job.pages, "printing");

        context.emit(PipelineEvent::PrintStarted { job });
        let started_at = Utc::now();
        let start = Instant::now();

        thread::sleep(context.config().print_duration(job.print_units()));

        let elapsed = start.elapsed();
        stats.record_print(&job, elapsed.as_micros() as u64);
        #[cfg(feature = "tracing")]
        crate::tracing::metrics::record_print(job.job_id, elapsed);

        context.emit(PipelineEvent::PrintFinished { job });
        PrintRecord {
            job,
            started_at,
            finished_at: Utc::now(),
        }
    }
}
