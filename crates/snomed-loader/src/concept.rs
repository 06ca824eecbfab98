//! SNOMED CT Concept file parser.
//!
//! Parses sct2_Concept_*.txt RF2 files.

use csv::StringRecord;
use snomed_types::Rf2Concept;

use crate::parser::{parse, ColumnMap, Rf2Record};
use crate::types::{Rf2Config, Rf2Result};

impl Rf2Record for Rf2Concept {
    const REQUIRED_COLUMNS: &'static [&'static str] = &["id", "active"];

    fn from_record(record: &StringRecord, columns: &ColumnMap) -> Rf2Result<Self> {
        Ok(Rf2Concept {
            id: parse::sctid(columns.get(record, "id")?)?,
            active: parse::boolean(columns.get(record, "active")?)?,
        })
    }

    fn passes_filter(&self, config: &Rf2Config) -> bool {
        !config.active_only || self.active
    }
}
