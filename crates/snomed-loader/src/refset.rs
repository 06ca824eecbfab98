//! Language reference set file parser.
//!
//! Parses der2_cRefset_Language*.txt RF2 files.

use csv::StringRecord;
use snomed_types::Rf2LanguageRefsetMember;

use crate::parser::{parse, ColumnMap, Rf2Record};
use crate::types::{Rf2Config, Rf2Result};

impl Rf2Record for Rf2LanguageRefsetMember {
    const REQUIRED_COLUMNS: &'static [&'static str] =
        &["active", "refsetId", "referencedComponentId", "acceptabilityId"];

    fn from_record(record: &StringRecord, columns: &ColumnMap) -> Rf2Result<Self> {
        Ok(Rf2LanguageRefsetMember {
            active: parse::boolean(columns.get(record, "active")?)?,
            refset_id: parse::sctid(columns.get(record, "refsetId")?)?,
            referenced_component_id: parse::sctid(columns.get(record, "referencedComponentId")?)?,
            acceptability_id: parse::sctid(columns.get(record, "acceptabilityId")?)?,
        })
    }

    fn passes_filter(&self, config: &Rf2Config) -> bool {
        !config.active_only || self.active
    }
}
