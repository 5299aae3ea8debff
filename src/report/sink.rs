//! Output sinks for pipeline events.

use super::event::PipelineEvent;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::io::{self, Write};

/// Receives every [`PipelineEvent`] produced by the workers.
///
/// Implementations are shared by both worker threads and must write each
/// event as one unit so output from the two threads never interleaves.
pub trait EventSink: Send + Sync {
    /// Handle a single event
    fn emit(&self, event: &PipelineEvent);
}

/// Human-readable text on any writer, one event at a time.
pub struct ConsoleSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl ConsoleSink<io::Stdout> {
    /// Sink writing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> EventSink for ConsoleSink<W> {
    fn emit(&self, event: &PipelineEvent) {
        let mut writer = self.writer.lock();
        let result = writeln!(writer, "{}", event).and_then(|()| writer.flush());
        if let Err(e) = result {
            log::warn!("failed to write event: {}", e);
        }
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: DateTime<Utc>,
    #[serde(flatten)]
    event: &'a PipelineEvent,
}

/// One JSON object per line, each stamped with the UTC time of emission.
pub struct JsonLinesSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl JsonLinesSink<io::Stdout> {
    /// Sink writing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> EventSink for JsonLinesSink<W> {
    fn emit(&self, event: &PipelineEvent) {
        let record = JsonRecord {
            timestamp: Utc::now(),
            event,
        };
        let mut writer = self.writer.lock();
        let result = serde_json::to_writer(&mut *writer, &record)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(writer))
            .and_then(|()| writer.flush());
        if let Err(e) = result {
            log::warn!("failed to write event: {}", e);
        }
    }
}

/// Keeps events in memory in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<PipelineEvent>>,
}

impl RecordingSink {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all events so far
    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.lock().clone()
    }

    /// IDs of jobs in the order their printing finished
    pub fn printed_ids(&self) -> Vec<i32> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                PipelineEvent::PrintFinished { job } => Some(job.job_id),
                _ => None,
            })
            .collect()
    }

    /// IDs of jobs dropped for capacity
    pub fn rejected_ids(&self) -> Vec<i32> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                PipelineEvent::Rejected { job, .. } => Some(job.job_id),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &PipelineEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &PipelineEvent) {}
}
