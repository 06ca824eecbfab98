//! # snomed-types
//!
//! Row types for the SNOMED CT Release Format 2 (RF2) tables a concept graph
//! is built from, plus the well-known identifiers those tables are keyed on.
//!
//! Only the columns the graph joins on are modelled: a concept is an
//! `id`/`active` pair, a description carries its concept, language, type and
//! term, a language refset member carries its acceptability, and a
//! relationship carries its endpoints, group and attribute type.
//!
//! ## Features
//!
//! - `serde` (default): serialization support via serde.
//!
//! ```rust
//! use snomed_types::{well_known, Rf2Description};
//!
//! let fsn = Rf2Description {
//!     id: 754786011,
//!     active: true,
//!     concept_id: 73211009,
//!     language_code: "en".to_string(),
//!     type_id: well_known::FULLY_SPECIFIED_NAME,
//!     term: "Diabetes mellitus (disorder)".to_string(),
//! };
//! assert!(fsn.term.ends_with("(disorder)"));
//! ```

#![warn(missing_docs)]

mod acceptability;
mod concept;
mod description;
mod refset;
mod relationship;
mod sctid;
pub mod well_known;

pub use acceptability::Acceptability;
pub use concept::Rf2Concept;
pub use description::Rf2Description;
pub use refset::Rf2LanguageRefsetMember;
pub use relationship::Rf2Relationship;
pub use sctid::SctId;
