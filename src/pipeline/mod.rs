//! Submission and print workers and the pipeline that runs them

pub mod config;
pub mod context;
pub mod printer;
pub mod runner;
pub mod submission;

pub use config::PipelineConfig;
pub use context::PipelineContext;
pub use printer::{PrintRecord, PrintReport, PrintStats, PrintWorker};
pub use runner::{PipelineSummary, PrintPipeline, RunningPipeline};
pub use submission::{SubmissionReport, SubmissionWorker};
