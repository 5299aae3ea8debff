//! State shared by the submission and print workers

use crate::pipeline::config::PipelineConfig;
use crate::queue::{QueueSnapshot, SharedQueues};
use crate::report::{EventSink, PipelineEvent};
use crate::sync::{ReadySignal, StartGate};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Everything both workers touch, built once and shared through an `Arc`.
///
/// The queue pair sits behind a single mutex. The ready signal and start gate
/// carry their own synchronization and are never taken while that mutex is
/// held for longer than a push.
pub struct PipelineContext {
    config: PipelineConfig,
    queues: Mutex<SharedQueues>,
    signal: ReadySignal,
    gate: StartGate,
    sink: Arc<dyn EventSink>,
}

impl std::fmt::Debug for PipelineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineContext")
            .field("config", &self.config)
            .field("queues", &*self.queues.lock())
            .field("signal", &self.signal.available())
            .field("gate_open", &self.gate.is_open())
            .field("sink", &"<event sink>")
            .finish()
    }
}

impl PipelineContext {
    /// Create a context with empty queues, a zero signal and a closed gate
    pub fn new(config: PipelineConfig, sink: Arc<dyn EventSink>) -> Self {
        Self {
            config,
            queues: Mutex::new(SharedQueues::new()),
            signal: ReadySignal::new(),
            gate: StartGate::new(),
            sink,
        }
    }

    /// Pipeline configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Lock the submission log and ready queue together
    pub fn queues(&self) -> MutexGuard<'_, SharedQueues> {
        self.queues.lock()
    }

    /// Counting signal for available jobs
    pub fn signal(&self) -> &ReadySignal {
        &self.signal
    }

    /// Latch the printer waits on
    pub fn gate(&self) -> &StartGate {
        &self.gate
    }

    /// Send an event to the sink
    pub fn emit(&self, event: PipelineEvent) {
        self.sink.emit(&event);
    }

    /// Copy both queues under the lock
    pub fn snapshot(&self) -> QueueSnapshot {
        self.queues.lock().snapshot()
    }

    /// Emit a queue snapshot unless snapshots are disabled
    pub(crate) fn emit_snapshot(&self) {
        if self.config.snapshots {
            let snapshot = self.snapshot();
            self.emit(PipelineEvent::Snapshot { snapshot });
        }
    }
}
