//! Core types for the print queue system

pub mod error;
pub mod job;

pub use error::{PrintError, Result};
pub use job::{Category, PrintJob, MAX_JOBS};
