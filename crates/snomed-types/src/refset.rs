//! Language refset row.

use crate::SctId;

/// A row of an RF2 language refset (`der2_cRefset_LanguageSnapshot-<lang>_*.txt`).
///
/// Each member gives one description an acceptability in one dialect. The
/// same description may be preferred in one dialect and acceptable in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rf2LanguageRefsetMember {
    /// Whether the membership is active.
    pub active: bool,
    /// Dialect refset, e.g. [`US_ENGLISH_LANG_REFSET`](crate::well_known::US_ENGLISH_LANG_REFSET).
    pub refset_id: SctId,
    /// The description.
    pub referenced_component_id: SctId,
    /// [`PREFERRED`](crate::well_known::PREFERRED) or
    /// [`ACCEPTABLE`](crate::well_known::ACCEPTABLE).
    pub acceptability_id: SctId,
}
