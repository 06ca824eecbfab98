//! Well-known identifiers.
//!
//! The metadata identifiers a graph is configured with by default, and the
//! concepts of the postoperative myocardial infarction neighbourhood used
//! throughout the documentation and tests.
//!
//! ```
//! use snomed_types::well_known;
//!
//! assert_eq!(well_known::IS_A, 116680003);
//! ```

use crate::SctId;

/// SNOMED CT Concept (SNOMED RT+CTV3), the single root of the hierarchy.
pub const SNOMED_CT_ROOT: SctId = 138875005;

/// SNOMED CT Model Component (metadata).
pub const SNOMED_CT_MODEL_COMPONENT: SctId = 900000000000441003;

/// Clinical finding (finding).
pub const CLINICAL_FINDING: SctId = 404684003;

/// Procedure (procedure).
pub const PROCEDURE: SctId = 71388002;

/// Body structure (body structure).
pub const BODY_STRUCTURE: SctId = 123037004;

/// Qualifier value (qualifier value).
pub const QUALIFIER_VALUE: SctId = 362981000;

/// Is a (attribute), the hierarchical relationship type.
pub const IS_A: SctId = 116680003;

/// Finding site (attribute).
pub const FINDING_SITE: SctId = 363698007;

/// Associated morphology (attribute).
pub const ASSOCIATED_MORPHOLOGY: SctId = 116676008;

/// After (attribute).
pub const AFTER: SctId = 255234002;

/// Clinical course (attribute).
pub const CLINICAL_COURSE: SctId = 263502005;

/// Fully specified name description type.
pub const FULLY_SPECIFIED_NAME: SctId = 900000000000003001;

/// Synonym description type.
pub const SYNONYM: SctId = 900000000000013009;

/// Preferred acceptability.
pub const PREFERRED: SctId = 900000000000548007;

/// Acceptable acceptability.
pub const ACCEPTABLE: SctId = 900000000000549004;

/// US English language refset.
pub const US_ENGLISH_LANG_REFSET: SctId = 900000000000509007;

/// GB English language refset.
///
/// Its preferred terms are regional spellings of the US English ones.
pub const GB_ENGLISH_LANG_REFSET: SctId = 900000000000508004;
