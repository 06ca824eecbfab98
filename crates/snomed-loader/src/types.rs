//! Parser-specific types for RF2 file processing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or parsing RF2 release files.
#[derive(Error, Debug)]
pub enum Rf2Error {
    /// I/O error reading RF2 file.
    #[error("IO error reading RF2 file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid SCTID format.
    #[error("Invalid SCTID format: {value}")]
    InvalidSctId {
        /// The invalid value that was encountered.
        value: String,
    },

    /// Missing required column in RF2 file.
    #[error("Missing required column: {column}")]
    MissingColumn {
        /// The name of the missing column.
        column: String,
    },

    /// Invalid boolean value.
    #[error("Invalid boolean value: {value} (expected 0 or 1)")]
    InvalidBoolean {
        /// The invalid boolean value.
        value: String,
    },

    /// Invalid integer value.
    #[error("Invalid integer value: {value}")]
    InvalidInteger {
        /// The invalid integer value.
        value: String,
    },

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Release directory name does not follow the RF2 naming convention.
    #[error("Release directory '{name}' does not follow the RF2 naming convention: {reason}")]
    InvalidReleaseName {
        /// The offending directory name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl Rf2Error {
    /// Returns true for errors raised while locating the release, before any
    /// table is parsed.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::DirectoryNotFound { .. }
                | Self::InvalidReleaseName { .. }
        )
    }
}

/// Result type for RF2 operations.
pub type Rf2Result<T> = Result<T, Rf2Error>;

/// Configuration for RF2 parsing.
#[derive(Debug, Clone)]
pub struct Rf2Config {
    /// Whether to filter to active records only.
    pub active_only: bool,
}

impl Default for Rf2Config {
    fn default() -> Self {
        Self { active_only: true }
    }
}

/// Description and language refset tables for one language of a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFiles {
    /// ISO language code used in the file names (e.g. "en", "fr").
    pub language_code: String,
    /// Path to `sct2_Description_Snapshot-<lang>_*.txt`.
    pub description_file: PathBuf,
    /// Path to `der2_cRefset_LanguageSnapshot-<lang>_*.txt`.
    pub language_refset_file: PathBuf,
}

/// Identity of a release, decoded from its directory name.
///
/// `SnomedCT_ManagedServiceFR_PRODUCTION_FR1000315_20240621T120000Z` decodes to
/// package `SnomedCT`, content type `ManagedServiceFR`, status `PRODUCTION`,
/// namespace `FR1000315` and timestamp `20240621T120000Z`. International
/// releases omit the namespace, which then defaults to `INT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseName {
    /// Release package identifier (e.g. "SnomedCT").
    pub package: String,
    /// Content type (e.g. "InternationalRF2").
    pub content_type: String,
    /// Release status (e.g. "PRODUCTION").
    pub status: String,
    /// Country/namespace code used in file names.
    pub namespace: String,
    /// Release timestamp in `YYYYMMDDThhmmssZ` form.
    pub timestamp: String,
}

impl ReleaseName {
    /// Release date (`YYYYMMDD`) as used in table file names.
    pub fn date(&self) -> &str {
        &self.timestamp[..8]
    }
}

/// Every table file the graph engine needs from a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseFiles {
    /// Decoded release directory name.
    pub release: ReleaseName,
    /// Path to the concept file.
    pub concept_file: PathBuf,
    /// Path to the relationship file.
    pub relationship_file: PathBuf,
    /// Base language (English) tables.
    pub base: LanguageFiles,
    /// Secondary language tables, if the release carries a translation.
    pub secondary: Option<LanguageFiles>,
}

impl ReleaseFiles {
    /// Iterates over the base and secondary language tables.
    pub fn languages(&self) -> impl Iterator<Item = &LanguageFiles> {
        std::iter::once(&self.base).chain(self.secondary.as_ref())
    }
}
