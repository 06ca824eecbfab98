//! Relationship row.

use crate::SctId;

/// A row of the RF2 inferred Relationship table (`sct2_Relationship_Snapshot_*.txt`).
///
/// ```
/// use snomed_types::{well_known, Rf2Relationship};
///
/// // Postoperative myocardial infarction has finding site myocardium.
/// let finding_site = Rf2Relationship {
///     active: true,
///     source_id: 129574000,
///     destination_id: 74281007,
///     relationship_group: 1,
///     type_id: well_known::FINDING_SITE,
/// };
/// assert_ne!(finding_site.type_id, well_known::IS_A);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rf2Relationship {
    /// Whether the relationship is active.
    pub active: bool,
    /// Source concept.
    pub source_id: SctId,
    /// Destination concept, the attribute value.
    pub destination_id: SctId,
    /// Relationship group; 0 for ungrouped and is-a relationships.
    pub relationship_group: u16,
    /// Attribute type concept.
    pub type_id: SctId,
}
