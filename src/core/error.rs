//! Error types for the print queue system

/// Result type for print queue operations
pub type Result<T> = std::result::Result<T, PrintError>;

/// Errors that can occur in the print queue system
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PrintError {
    /// Input could not be parsed as a job count or job field
    #[error("Malformed input for '{field}': {message}")]
    MalformedInput {
        /// Which value was being read
        field: String,
        /// What went wrong
        message: String,
    },

    /// Submission log is full, the job was dropped
    #[error("Job queue is full ({capacity} jobs), cannot add job {job_id}")]
    CapacityExceeded {
        /// ID of the dropped job
        job_id: i32,
        /// Capacity of the submission log
        capacity: usize,
    },

    /// Ready queue has no free slot
    #[error("Ready queue is full: {current}/{max} jobs queued")]
    QueueFull {
        /// Current queue size
        current: usize,
        /// Maximum queue size
        max: usize,
    },

    /// The sentinel was already pushed onto the ready queue
    #[error("Ready queue is already sealed with a terminate marker")]
    AlreadySealed,

    /// Failed to spawn a worker thread
    #[error("Failed to spawn thread '{thread_name}': {message}")]
    SpawnError {
        /// Name of the thread that failed to spawn
        thread_name: String,
        /// Error message
        message: String,
        /// Source IO error
        #[source]
        source: Option<std::io::Error>,
    },

    /// Failed to join a worker thread
    #[error("Failed to join thread '{thread_name}': {message}")]
    JoinError {
        /// Name of the thread that failed to join
        thread_name: String,
        /// Error message
        message: String,
    },

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// Invalid configuration with parameter
    #[error("Invalid configuration for '{parameter}': {message}")]
    InvalidConfig {
        /// Configuration parameter name
        parameter: String,
        /// Error message
        message: String,
    },

    /// General error
    #[error("{0}")]
    Other(String),
}

impl PrintError {
    /// Create a malformed input error
    pub fn malformed(field: impl Into<String>, message: impl Into<String>) -> Self {
        PrintError::MalformedInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a capacity exceeded error
    pub fn capacity_exceeded(job_id: i32, capacity: usize) -> Self {
        PrintError::CapacityExceeded { job_id, capacity }
    }

    /// Create a queue full error
    pub fn queue_full(current: usize, max: usize) -> Self {
        PrintError::QueueFull { current, max }
    }

    /// Create a spawn error with source
    pub fn spawn_with_source(thread_name: impl Into<String>, source: std::io::Error) -> Self {
        PrintError::SpawnError {
            thread_name: thread_name.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create a join error
    pub fn join(thread_name: impl Into<String>, message: impl Into<String>) -> Self {
        PrintError::JoinError {
            thread_name: thread_name.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(source: std::io::Error) -> Self {
        PrintError::Io(source)
    }

    /// Create an invalid config error
    pub fn invalid_config(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        PrintError::InvalidConfig {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PrintError::Other(msg.into())
    }

    /// Whether the error only drops a single job and lets submission continue
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PrintError::CapacityExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = PrintError::malformed("job count", "expected an integer");
        assert!(matches!(err, PrintError::MalformedInput { .. }));

        let err = PrintError::capacity_exceeded(11, 10);
        assert!(matches!(err, PrintError::CapacityExceeded { .. }));

        let err = PrintError::queue_full(10, 10);
        assert!(matches!(err, PrintError::QueueFull { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = PrintError::capacity_exceeded(11, 10);
        assert_eq!(
            err.to_string(),
            "Job queue is full (10 jobs), cannot add job 11"
        );

        let err = PrintError::malformed("pages", "missing value");
        assert_eq!(
            err.to_string(),
            "Malformed input for 'pages': missing value"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(PrintError::capacity_exceeded(1, 10).is_recoverable());
        assert!(!PrintError::malformed("job count", "bad").is_recoverable());
        assert!(!PrintError::AlreadySealed.is_recoverable());
    }

    #[test]
    fn test_spawn_error_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = PrintError::spawn_with_source("print-printer", io_err);

        assert!(matches!(err, PrintError::SpawnError { .. }));
        assert!(err.to_string().contains("print-printer"));
    }
}
