//! # Print Queue System
//!
//! A bounded print-job pipeline: one thread submits jobs, another prints them
//! in priority order.
//!
//! ## Features
//!
//! - **Bounded submission**: at most [`MAX_JOBS`] jobs are accepted; extra jobs are dropped and reported
//! - **Priority order**: lower priority value first, fewer pages first on ties
//! - **Counting signal**: the printer sleeps on a semaphore, one unit per submitted job
//! - **Start gate**: the printer starts only after submission is complete
//! - **Sentinel termination**: a terminate marker queued last stops the printer without polling
//! - **Serialized output**: text or JSON-lines progress from both threads never interleaves
//!
//! ## Quick Start
//!
//! ```rust
//! use print_queue_system::prelude::*;
//! use std::io::Cursor;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # fn main() -> Result<()> {
//! let config = PipelineConfig::new()
//!     .with_time_unit(Duration::from_millis(1))
//!     .with_snapshots(false);
//! let pipeline = PrintPipeline::with_sink(config, Arc::new(NullSink))?;
//!
//! // job_id pages category priority
//! let input = Cursor::new("2\n10 8 1 3\n11 2 3 1\n");
//! let summary = pipeline.start(input)?.join()?;
//!
//! assert_eq!(summary.printing.job_ids(), vec![11, 10]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Driving the queues directly
//!
//! ```rust
//! use print_queue_system::core::{Category, PrintJob};
//! use print_queue_system::queue::SharedQueues;
//!
//! let mut queues = SharedQueues::new();
//! queues.submit(PrintJob::new(1, 6, Category::Magazine, 2)).unwrap();
//! queues.submit(PrintJob::new(2, 3, Category::Magazine, 2)).unwrap();
//! queues.seal().unwrap();
//!
//! queues.ready.sort();
//! let head = queues.ready.pop_front().unwrap();
//! assert_eq!(head.job().map(|j| j.job_id), Some(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod input;
pub mod pipeline;
pub mod prelude;
pub mod queue;
pub mod report;
pub mod sync;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use crate::core::{Category, PrintError, PrintJob, Result, MAX_JOBS};
pub use pipeline::{PipelineConfig, PipelineSummary, PrintPipeline, RunningPipeline};
