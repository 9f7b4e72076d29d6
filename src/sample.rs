//! Sample reading: header record plus a bounded data-row scan.
//!
//! The header is consumed eagerly; data rows are pulled on demand so header
//! validation can gate the scan before any row is touched.

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use encoding_rs::Encoding;

use crate::{error::SchemaError, io_utils};

/// A reader positioned over one delimited sample source.
pub struct SampleReader {
    path: PathBuf,
    reader: csv::Reader<Box<dyn Read>>,
    encoding: &'static Encoding,
}

impl SampleReader {
    pub fn open(
        path: &Path,
        delimiter: u8,
        encoding: &'static Encoding,
    ) -> Result<Self, SchemaError> {
        let reader = io_utils::open_csv_reader_from_path(path, delimiter)
            .map_err(|source| read_error(path, source))?;
        Ok(Self {
            path: path.to_path_buf(),
            reader,
            encoding,
        })
    }

    /// Returns the decoded, trimmed header tokens without touching any
    /// data row.
    pub fn headers(&mut self) -> Result<Vec<String>, SchemaError> {
        let record = self
            .reader
            .byte_headers()
            .map_err(|source| read_error(&self.path, source))?
            .clone();
        io_utils::decode_record(&record, self.encoding)
            .map_err(|source| read_error(&self.path, source))
    }

    /// Reads up to `limit` data rows (0 means no limit), decoding and
    /// trimming every cell. Ragged rows fail the read.
    pub fn read_rows(&mut self, limit: usize) -> Result<Vec<Vec<String>>, SchemaError> {
        let mut rows = Vec::new();
        let mut record = csv::ByteRecord::new();
        loop {
            if limit > 0 && rows.len() >= limit {
                break;
            }
            let more = self
                .reader
                .read_byte_record(&mut record)
                .map_err(|source| read_error(&self.path, source))?;
            if !more {
                break;
            }
            let row = io_utils::decode_record(&record, self.encoding)
                .map_err(|source| read_error(&self.path, source))?;
            rows.push(row);
        }
        Ok(rows)
    }
}

fn read_error(path: &Path, source: impl Into<anyhow::Error>) -> SchemaError {
    SchemaError::SampleRead {
        path: path.to_path_buf(),
        source: std::io::Error::other(source.into()),
    }
}
