//! Convenient re-exports for common types and traits

pub use crate::core::{Category, PrintError, PrintJob, Result, MAX_JOBS};
pub use crate::pipeline::{
    PipelineConfig, PipelineSummary, PrintPipeline, PrintReport, RunningPipeline,
    SubmissionReport,
};
pub use crate::report::{
    ConsoleSink, EventSink, JsonLinesSink, NullSink, PipelineEvent, RecordingSink,
};
