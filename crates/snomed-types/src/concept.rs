//! SNOMED CT Concept row.

use crate::SctId;

/// A row of the RF2 Concept table (`sct2_Concept_Snapshot_*.txt`).
///
/// The graph engine only needs to know which concepts are active, so the
/// remaining RF2 columns are not carried.
///
/// # Examples
///
/// ```
/// use snomed_types::Rf2Concept;
///
/// let concept = Rf2Concept { id: 73211009, active: true };
/// assert!(concept.active);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rf2Concept {
    /// Unique identifier for this concept (SCTID).
    pub id: SctId,
    /// Whether this concept is active (true) or inactive (false).
    pub active: bool,
}
