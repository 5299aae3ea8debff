//! Pipeline configuration

use crate::core::{PrintError, Result};
use std::time::Duration;

/// Configuration for a print pipeline
///
/// The submission log capacity is fixed at [`MAX_JOBS`](crate::core::MAX_JOBS)
/// and is not part of the configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Length of one print time unit. A job takes `max(1, pages / 2)` units.
    /// Default: 1s
    pub time_unit: Duration,
    /// Prefix for the worker thread names.
    /// Default: "print"
    pub thread_name_prefix: String,
    /// Emit a queue snapshot after every submission and every print.
    /// Default: true
    pub snapshots: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            time_unit: Duration::from_secs(1),
            thread_name_prefix: "print".to_string(),
            snapshots: true,
        }
    }
}

impl PipelineConfig {
    /// Create a configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the print time unit
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_time_unit(mut self, time_unit: Duration) -> Self {
        self.time_unit = time_unit;
        self
    }

    /// Set thread name prefix
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_thread_name_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// Enable or disable queue snapshots
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_snapshots(mut self, enabled: bool) -> Self {
        self.snapshots = enabled;
        self
    }

    /// Time the printer spends on a job of `units` time units
    pub fn print_duration(&self, units: u32) -> Duration {
        self.time_unit.saturating_mul(units)
    }

    pub(crate) fn thread_name(&self, role: &str) -> String {
        format!("{}-{}", self.thread_name_prefix, role)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.thread_name_prefix.is_empty() {
            return Err(PrintError::invalid_config(
                "thread_name_prefix",
                "Thread name prefix must not be empty",
            ));
        }
        if self.thread_name_prefix.contains('\0') {
            return Err(PrintError::invalid_config(
                "thread_name_prefix",
                "Thread name prefix must not contain NUL bytes",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.time_unit, Duration::from_secs(1));
        assert!(config.snapshots);
        assert!(config.validate().is_ok());
        assert_eq!(config.thread_name("printer"), "print-printer");
    }

    #[test]
    fn test_builder() {
        let config = PipelineConfig::new()
            .with_time_unit(Duration::from_millis(5))
            .with_thread_name_prefix("spool")
            .with_snapshots(false);
        assert_eq!(config.print_duration(3), Duration::from_millis(15));
        assert_eq!(config.thread_name("submit"), "spool-submit");
        assert!(!config.snapshots);
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let config = PipelineConfig::new().with_thread_name_prefix("");
        assert!(matches!(
            config.validate(),
            Err(PrintError::InvalidConfig { .. })
        ));
    }
}
