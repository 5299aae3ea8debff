//! Progress reporting
//!
//! Workers describe what they do as [`PipelineEvent`]s and hand them to an
//! [`EventSink`]. Each sink serialises its own writes.

mod event;
mod sink;

pub use event::PipelineEvent;
pub use sink::{ConsoleSink, EventSink, JsonLinesSink, NullSink, RecordingSink};
