//! Job description reader
//!
//! Input is a job count followed by four integers per job
//! (`job_id pages category priority`), separated by any whitespace.

use crate::core::{PrintError, PrintJob, Result};
use std::collections::VecDeque;
use std::io::BufRead;

/// Pulls whitespace-separated integers from a buffered reader, one line at a time.
pub struct JobReader<R: BufRead> {
    reader: R,
    tokens: VecDeque<String>,
}

impl<R: BufRead> JobReader<R> {
    /// Wrap a reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            tokens: VecDeque::new(),
        }
    }

    /// Reads the job count.
    ///
    /// A negative count is treated as zero jobs.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::MalformedInput`] if the value is missing or not an
    /// integer.
    pub fn read_count(&mut self) -> Result<usize> {
        let count = self.next_int("job count")?;
        if count < 0 {
            log::warn!("negative job count {} treated as zero", count);
        }
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Reads one job.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::MalformedInput`] naming the first field that is
    /// missing or unparsable, or an unknown category code.
    pub fn read_job(&mut self) -> Result<PrintJob> {
        let job_id = self.next_int("job_id")?;
        let pages = self.next_int("pages")?;
        let category = self.next_int("category")?;
        let priority = self.next_int("priority")?;
        PrintJob::from_fields(job_id, pages, category, priority)
    }

    fn next_int(&mut self, field: &str) -> Result<i32> {
        let token = self
            .next_token()?
            .ok_or_else(|| PrintError::malformed(field, "unexpected end of input"))?;
        token
            .parse::<i32>()
            .map_err(|e| PrintError::malformed(field, format!("'{}': {}", token, e)))
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            let read = self.reader.read_line(&mut line).map_err(PrintError::io)?;
            if read == 0 {
                return Ok(None);
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.tokens.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;
    use std::io::Cursor;

    fn reader(text: &str) -> JobReader<Cursor<Vec<u8>>> {
        JobReader::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn test_reads_across_lines() {
        let mut r = reader("2\n1\n4 1\n5   2 2\n\n2 1\n");
        assert_eq!(r.read_count().unwrap(), 2);
        assert_eq!(
            r.read_job().unwrap(),
            PrintJob::new(1, 4, Category::Newspaper, 5)
        );
        assert_eq!(
            r.read_job().unwrap(),
            PrintJob::new(2, 2, Category::Magazine, 1)
        );
    }

    #[test]
    fn test_bad_count() {
        let err = reader("many\n").read_count().unwrap_err();
        assert!(matches!(err, PrintError::MalformedInput { ref field, .. } if field == "job count"));

        let err = reader("").read_count().unwrap_err();
        assert!(matches!(err, PrintError::MalformedInput { .. }));
    }

    #[test]
    fn test_negative_count_is_zero() {
        assert_eq!(reader("-3").read_count().unwrap(), 0);
    }

    #[test]
    fn test_truncated_job_names_field() {
        let mut r = reader("1\n7 3\n");
        r.read_count().unwrap();
        let err = r.read_job().unwrap_err();
        assert!(matches!(err, PrintError::MalformedInput { ref field, .. } if field == "category"));
    }

    #[test]
    fn test_unknown_category() {
        let mut r = reader("7 3 9 1");
        assert!(matches!(
            r.read_job(),
            Err(PrintError::MalformedInput { .. })
        ));
    }
}
