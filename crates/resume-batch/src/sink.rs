//! CSV report writer

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use resume_domain::{RowSink, FIELD_COUNT};

use crate::BatchError;

/// Writes report rows as CSV
///
/// Fields are quoted only when they contain a delimiter, quote or line
/// break.
pub struct CsvRowSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvRowSink<File> {
    /// Create (or truncate) the report file at `path`
    ///
    /// With `create_dirs`, missing parent directories are created first.
    pub fn create(path: &Path, create_dirs: bool) -> Result<Self, BatchError> {
        let output_error = |source| BatchError::Output {
            path: path.to_path_buf(),
            source,
        };

        if create_dirs {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(output_error)?;
            }
        }

        let file = File::create(path).map_err(output_error)?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> CsvRowSink<W> {
    /// Wrap any writer
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> Result<W, BatchError> {
        self.writer
            .into_inner()
            .map_err(|e| BatchError::Sink(e.error().to_string()))
    }
}

impl<W: Write> RowSink for CsvRowSink<W> {
    type Error = BatchError;

    fn write_header(&mut self, header: &[&str; FIELD_COUNT]) -> Result<(), BatchError> {
        self.writer.write_record(header)?;
        Ok(())
    }

    fn write_row(&mut self, fields: &[&str; FIELD_COUNT]) -> Result<(), BatchError> {
        self.writer.write_record(fields)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), BatchError> {
        self.writer
            .flush()
            .map_err(|e| BatchError::Sink(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_domain::ResumeRecord;

    #[test]
    fn test_header_and_quoting() {
        let mut sink = CsvRowSink::from_writer(Vec::new());
        sink.write_header(&ResumeRecord::HEADER).unwrap();
        sink.write_row(&["a.pdf", "Asha Rao", "Anna University, Chennai", "QA", "QA"])
            .unwrap();
        sink.flush().unwrap();

        let output = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(
            output,
            "FileName,Name,College,Role,SkillCategory\n\
             a.pdf,Asha Rao,\"Anna University, Chennai\",QA,QA\n"
        );
    }

    #[test]
    fn test_create_makes_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output").join("nested").join("report.csv");

        let mut sink = CsvRowSink::create(&path, true).unwrap();
        sink.write_header(&ResumeRecord::HEADER).unwrap();
        sink.flush().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "FileName,Name,College,Role,SkillCategory\n");
    }

    #[test]
    fn test_create_without_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.csv");

        let result = CsvRowSink::create(&path, false);
        assert!(matches!(result, Err(BatchError::Output { .. })));
    }
}
