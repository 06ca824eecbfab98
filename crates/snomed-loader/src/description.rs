//! SNOMED CT Description file parser.
//!
//! Parses sct2_Description_*.txt RF2 files.

use csv::StringRecord;
use snomed_types::Rf2Description;

use crate::parser::{parse, ColumnMap, Rf2Record};
use crate::types::{Rf2Config, Rf2Result};

impl Rf2Record for Rf2Description {
    const REQUIRED_COLUMNS: &'static [&'static str] =
        &["id", "active", "conceptId", "languageCode", "typeId", "term"];

    fn from_record(record: &StringRecord, columns: &ColumnMap) -> Rf2Result<Self> {
        Ok(Rf2Description {
            id: parse::sctid(columns.get(record, "id")?)?,
            active: parse::boolean(columns.get(record, "active")?)?,
            concept_id: parse::sctid(columns.get(record, "conceptId")?)?,
            language_code: columns.get(record, "languageCode")?.to_string(),
            type_id: parse::sctid(columns.get(record, "typeId")?)?,
            term: columns.get(record, "term")?.to_string(),
        })
    }

    fn passes_filter(&self, config: &Rf2Config) -> bool {
        !config.active_only || self.active
    }
}
