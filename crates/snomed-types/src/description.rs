//! Description row.

use crate::SctId;

/// A row of an RF2 Description table (`sct2_Description_Snapshot-<lang>_*.txt`).
///
/// Releases ship one table per language. `type_id` tells fully specified
/// names from synonyms; whether a synonym is preferred comes from the
/// language refset, not from this row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rf2Description {
    /// Description identifier.
    pub id: SctId,
    /// Whether the description is active.
    pub active: bool,
    /// Concept the description names.
    pub concept_id: SctId,
    /// Language code, e.g. `en` or `fr`.
    pub language_code: String,
    /// Description type, see [`well_known::FULLY_SPECIFIED_NAME`](crate::well_known::FULLY_SPECIFIED_NAME).
    pub type_id: SctId,
    /// The term itself.
    pub term: String,
}
