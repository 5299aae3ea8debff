//! Print job data model

use crate::core::error::{PrintError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of jobs the submission log accepts
pub const MAX_JOBS: usize = 10;

/// Kind of material a job prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Newspaper run (input code 1)
    Newspaper = 1,
    /// Magazine run (input code 2)
    Magazine = 2,
    /// Advertising banner (input code 3)
    AdBanner = 3,
}

impl Category {
    /// Numeric code used on the input stream
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl TryFrom<i32> for Category {
    type Error = PrintError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            1 => Ok(Category::Newspaper),
            2 => Ok(Category::Magazine),
            3 => Ok(Category::AdBanner),
            other => Err(PrintError::malformed(
                "category",
                format!("unknown category code {} (expected 1, 2 or 3)", other),
            )),
        }
    }
}

/// A single job submitted to the printer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrintJob {
    /// Caller supplied identity
    pub job_id: i32,
    /// Number of pages, drives print duration
    pub pages: i32,
    /// Kind of material
    pub category: Category,
    /// Lower value prints first
    pub priority: i32,
}

impl PrintJob {
    /// Create a new print job
    pub fn new(job_id: i32, pages: i32, category: Category, priority: i32) -> Self {
        Self {
            job_id,
            pages,
            category,
            priority,
        }
    }

    /// Build a job from the four raw input integers
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::MalformedInput`] if the category code is unknown.
    pub fn from_fields(job_id: i32, pages: i32, category: i32, priority: i32) -> Result<Self> {
        Ok(Self::new(job_id, pages, Category::try_from(category)?, priority))
    }

    /// Number of time units the printer is busy with this job: `max(1, pages / 2)`
    pub fn print_units(&self) -> u32 {
        (self.pages / 2).max(1) as u32
    }

    /// Ordering key: priority first, then fewer pages first
    pub fn order_key(&self) -> (i32, i32) {
        (self.priority, self.pages)
    }
}

impl fmt::Display for PrintJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(ID:{}, Pages:{}, Priority:{}, Type:{})",
            self.job_id,
            self.pages,
            self.priority,
            self.category.code()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes() {
        assert_eq!(Category::try_from(1).unwrap(), Category::Newspaper);
        assert_eq!(Category::try_from(2).unwrap(), Category::Magazine);
        assert_eq!(Category::try_from(3).unwrap(), Category::AdBanner);
        assert_eq!(Category::AdBanner.code(), 3);
    }

    #[test]
    fn test_unknown_category_is_malformed() {
        let err = Category::try_from(4).unwrap_err();
        assert!(matches!(err, PrintError::MalformedInput { .. }));
        assert!(PrintJob::from_fields(1, 2, 0, 1).is_err());
    }

    #[test]
    fn test_print_units() {
        let job = |pages| PrintJob::new(1, pages, Category::Newspaper, 1);
        assert_eq!(job(0).print_units(), 1);
        assert_eq!(job(1).print_units(), 1);
        assert_eq!(job(3).print_units(), 1);
        assert_eq!(job(4).print_units(), 2);
        assert_eq!(job(7).print_units(), 3);
        assert_eq!(job(-6).print_units(), 1);
    }

    #[test]
    fn test_display() {
        let job = PrintJob::new(7, 12, Category::Magazine, 3);
        assert_eq!(job.to_string(), "(ID:7, Pages:12, Priority:3, Type:2)");
    }
}
