//! Generic RF2 file parser.
//!
//! Provides a streaming parser for SNOMED CT RF2 tab-delimited files.
//! Columns are located by header name, so extra columns (effectiveTime,
//! moduleId, ...) are tolerated in any position.

use std::fs::File;
use std::io::{BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use snomed_types::SctId;

use crate::types::{Rf2Config, Rf2Error, Rf2Result};

/// Trait for types that can be parsed from RF2 records.
///
/// Implement this trait for custom RF2 record types.
pub trait Rf2Record: Sized {
    /// Column names this record type reads.
    const REQUIRED_COLUMNS: &'static [&'static str];

    /// Parse a record from a CSV StringRecord.
    fn from_record(record: &StringRecord, columns: &ColumnMap) -> Rf2Result<Self>;

    /// Returns true if this record passes the given filter config.
    fn passes_filter(&self, config: &Rf2Config) -> bool;
}

/// Positions of the required columns within a file's header row.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    positions: Vec<(&'static str, usize)>,
}

impl ColumnMap {
    /// Locates every name of `required` in `headers`.
    ///
    /// A UTF-8 BOM on the first header is ignored.
    pub fn from_headers(headers: &StringRecord, required: &[&'static str]) -> Rf2Result<Self> {
        let positions = required
            .iter()
            .map(|&name| {
                headers
                    .iter()
                    .position(|h| h.trim_start_matches('\u{feff}') == name)
                    .map(|pos| (name, pos))
                    .ok_or_else(|| Rf2Error::MissingColumn {
                        column: name.to_string(),
                    })
            })
            .collect::<Rf2Result<Vec<_>>>()?;

        Ok(Self { positions })
    }

    /// Maps each name to its index in `required`, for records laid out in
    /// exactly that order.
    #[cfg(test)]
    pub(crate) fn sequential(required: &[&'static str]) -> Self {
        Self {
            positions: required.iter().copied().enumerate().map(|(i, n)| (n, i)).collect(),
        }
    }

    /// Returns the value of `column` in `record`.
    pub fn get<'r>(&self, record: &'r StringRecord, column: &str) -> Rf2Result<&'r str> {
        self.positions
            .iter()
            .find(|(name, _)| *name == column)
            .and_then(|&(_, pos)| record.get(pos))
            .ok_or_else(|| Rf2Error::MissingColumn {
                column: column.to_string(),
            })
    }
}

/// A streaming parser for RF2 files.
///
/// This parser reads RF2 files record-by-record to avoid loading
/// entire files into memory.
pub struct Rf2Parser<R: Read, T: Rf2Record> {
    reader: Reader<R>,
    columns: ColumnMap,
    config: Rf2Config,
    records_read: usize,
    _marker: PhantomData<T>,
}

impl<T: Rf2Record> Rf2Parser<BufReader<File>, T> {
    /// Creates a new parser from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or lacks a required column.
    pub fn from_path<P: AsRef<Path>>(path: P, config: Rf2Config) -> Rf2Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Rf2Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), config)
    }
}

impl<R: Read, T: Rf2Record> Rf2Parser<R, T> {
    /// Creates a new parser from a reader.
    pub fn from_reader(reader: R, config: Rf2Config) -> Rf2Result<Self> {
        // RF2 text is never quoted; terms may contain bare double quotes.
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .quoting(false)
            .flexible(false)
            .trim(csv::Trim::None)
            .from_reader(reader);

        let columns = ColumnMap::from_headers(csv_reader.headers()?, T::REQUIRED_COLUMNS)?;

        Ok(Self {
            reader: csv_reader,
            columns,
            config,
            records_read: 0,
            _marker: PhantomData,
        })
    }

    /// Returns the number of records read so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> &Rf2Config {
        &self.config
    }

    /// Parses all records into a Vec, applying filters.
    ///
    /// Stops at the first malformed record.
    pub fn parse_all(self) -> Rf2Result<Vec<T>> {
        self.collect()
    }
}

impl<R: Read, T: Rf2Record> Iterator for Rf2Parser<R, T> {
    type Item = Rf2Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();
        loop {
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    self.records_read += 1;

                    // Skip empty records
                    if record.iter().all(|f| f.trim().is_empty()) {
                        continue;
                    }

                    match T::from_record(&record, &self.columns) {
                        Ok(parsed) if parsed.passes_filter(&self.config) => {
                            return Some(Ok(parsed))
                        }
                        Ok(_) => continue,
                        Err(e) => return Some(Err(e)),
                    }
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Helper functions for parsing RF2 field values.
pub mod parse {
    use super::{Rf2Error, Rf2Result, SctId};

    /// Parses an SCTID from a string.
    pub fn sctid(value: &str) -> Rf2Result<SctId> {
        value.parse::<u64>().map_err(|_| Rf2Error::InvalidSctId {
            value: value.to_string(),
        })
    }

    /// Parses a boolean from "0" or "1".
    pub fn boolean(value: &str) -> Rf2Result<bool> {
        match value {
            "0" => Ok(false),
            "1" => Ok(true),
            _ => Err(Rf2Error::InvalidBoolean {
                value: value.to_string(),
            }),
        }
    }

    /// Parses an integer value.
    pub fn integer<T: std::str::FromStr>(value: &str) -> Rf2Result<T> {
        value.parse::<T>().map_err(|_| Rf2Error::InvalidInteger {
            value: value.to_string(),
        })
    }
}
