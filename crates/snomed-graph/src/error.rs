//! Error types for graph construction and queries.

use snomed_loader::Rf2Error;
use snomed_types::SctId;
use thiserror::Error;

/// Errors raised while building, querying or persisting a [`SnomedGraph`](crate::SnomedGraph).
#[derive(Error, Debug)]
pub enum GraphError {
    /// Locating or parsing the release tables failed.
    #[error(transparent)]
    Release(#[from] Rf2Error),

    /// An active concept has descriptions but no base-language fully specified name.
    #[error("Concept {concept} has no fully specified name")]
    MissingFsn {
        /// The unnamed concept.
        concept: SctId,
    },

    /// A concept has two different base-language fully specified names.
    #[error("Concept {concept} has several fully specified names: '{first}' and '{second}'")]
    DuplicateFsn {
        /// The concept.
        concept: SctId,
        /// Name kept first.
        first: String,
        /// Conflicting name.
        second: String,
    },

    /// More than one preferred term survived for a concept in one language.
    #[error("Concept {concept} has several preferred terms in '{language}': '{first}' and '{second}'")]
    DuplicatePreferredTerm {
        /// The concept.
        concept: SctId,
        /// Language of the conflicting terms.
        language: String,
        /// Term kept first.
        first: String,
        /// Conflicting term.
        second: String,
    },

    /// A relationship endpoint is not a concept of the graph.
    #[error("Relationship {source_id} -> {target_id} references unknown concept {missing}")]
    DanglingEdge {
        /// Source of the relationship.
        source_id: SctId,
        /// Target of the relationship.
        target_id: SctId,
        /// The endpoint that could not be resolved.
        missing: SctId,
    },

    /// A relationship attribute type is not a concept of the graph.
    #[error("Relationship {source_id} -> {target_id} has unknown attribute type {attribute}")]
    UnknownAttribute {
        /// Source of the relationship.
        source_id: SctId,
        /// Target of the relationship.
        target_id: SctId,
        /// The unresolved attribute type.
        attribute: SctId,
    },

    /// The concept is not part of the graph.
    #[error("Concept {0} not found")]
    ConceptNotFound(SctId),

    /// Unsupported acceptability filter.
    #[error("Invalid acceptability '{0}' (expected unspecified, preferred or acceptable)")]
    InvalidAcceptability(String),

    /// A search pattern is not a valid regular expression.
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// I/O error while saving or loading a graph.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted graph could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Broad category of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input path, naming convention or missing file.
    Configuration,
    /// Inconsistent release content.
    Integrity,
    /// Unknown concept in a query.
    NotFound,
    /// Invalid query parameter.
    Validation,
    /// Saving or loading a graph failed.
    Persistence,
}

impl GraphError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Release(e) if e.is_configuration() => ErrorKind::Configuration,
            Self::Release(_)
            | Self::MissingFsn { .. }
            | Self::DuplicateFsn { .. }
            | Self::DuplicatePreferredTerm { .. }
            | Self::DanglingEdge { .. }
            | Self::UnknownAttribute { .. } => ErrorKind::Integrity,
            Self::ConceptNotFound(_) => ErrorKind::NotFound,
            Self::InvalidAcceptability(_) | Self::InvalidPattern(_) => ErrorKind::Validation,
            Self::Io(_) | Self::Serialization(_) => ErrorKind::Persistence,
        }
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
