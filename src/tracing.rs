//! Tracing integration for observability.
//!
//! With the `tracing` feature enabled the workers run inside `submission` and
//! `printer` spans and emit the metric events below.
//!
//! # Example
//!
//! ```rust,ignore
//! use print_queue_system::prelude::*;
//! use tracing_subscriber::{fmt, prelude::*, EnvFilter};
//!
//! tracing_subscriber::registry()
//!     .with(fmt::layer())
//!     .with(EnvFilter::from_default_env()
//!         .add_directive("print_queue_system=debug".parse().unwrap()))
//!     .init();
//!
//! let pipeline = PrintPipeline::new(PipelineConfig::default())?;
//! pipeline.start(std::io::stdin().lock())?.join()?;
//! ```

/// Metrics recording functions.
///
/// These emit tracing events that a metrics layer can turn into counters,
/// gauges and histograms.
pub mod metrics {
    use std::time::Duration;

    /// Records an accepted job and the number of accepted jobs so far.
    #[inline]
    pub fn record_submission(accepted: usize) {
        tracing::trace!(
            counter.jobs_submitted = 1,
            gauge.jobs_accepted = accepted as i64,
            "job submitted"
        );
    }

    /// Records a job dropped for capacity.
    #[inline]
    pub fn record_rejection(job_id: i32) {
        tracing::warn!(counter.jobs_rejected = 1, job_id = job_id, "job rejected");
    }

    /// Records a finished print with its duration.
    #[inline]
    pub fn record_print(job_id: i32, duration: Duration) {
        tracing::trace!(
            counter.jobs_printed = 1,
            histogram.print_duration_ms = duration.as_millis() as u64,
            job_id = job_id,
            "job printed"
        );
    }

    /// Records the printer reaching the sentinel.
    #[inline]
    pub fn record_printer_stopped(jobs_printed: u64, pages_printed: u64) {
        tracing::info!(
            jobs_printed = jobs_printed,
            pages_printed = pages_printed,
            "printer stopped"
        );
    }
}
