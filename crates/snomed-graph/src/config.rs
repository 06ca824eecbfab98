//! Graph configuration.

use snomed_types::{well_known, SctId};

/// Identifiers and languages a graph is built and queried with.
///
/// Every well-known identifier the engine depends on lives here rather than
/// in process-wide constants, so graphs of different releases can coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    /// Attribute type of hierarchical (is-a) relationships.
    pub is_a: SctId,
    /// Description type of fully specified names.
    pub fsn_type: SctId,
    /// Preferred acceptability.
    pub preferred: SctId,
    /// Acceptable acceptability.
    pub acceptable: SctId,
    /// Language refset whose preferred terms are dropped before the join.
    pub excluded_preferred_refset: SctId,
    /// Root concept of the hierarchy.
    pub root: SctId,
    /// Base language code; its FSN names every concept.
    pub base_language: String,
    /// Translation shipped with the release, if any.
    pub secondary_language: Option<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            is_a: well_known::IS_A,
            fsn_type: well_known::FULLY_SPECIFIED_NAME,
            preferred: well_known::PREFERRED,
            acceptable: well_known::ACCEPTABLE,
            excluded_preferred_refset: well_known::GB_ENGLISH_LANG_REFSET,
            root: well_known::SNOMED_CT_ROOT,
            base_language: "en".to_string(),
            secondary_language: Some("fr".to_string()),
        }
    }
}

impl GraphConfig {
    /// English-only configuration.
    pub fn english_only() -> Self {
        Self {
            secondary_language: None,
            ..Self::default()
        }
    }

    /// Configuration with `language` as the secondary language.
    ///
    /// An empty code means English only.
    pub fn with_secondary_language(language: &str) -> Self {
        Self {
            secondary_language: (!language.is_empty()).then(|| language.to_string()),
            ..Self::default()
        }
    }

    /// Language used by term search when the query names none.
    pub fn search_language(&self) -> &str {
        self.secondary_language
            .as_deref()
            .unwrap_or(&self.base_language)
    }
}
