//! SNOMED CT Relationship file parser.
//!
//! Parses sct2_Relationship_*.txt RF2 files.

use csv::StringRecord;
use snomed_types::Rf2Relationship;

use crate::parser::{parse, ColumnMap, Rf2Record};
use crate::types::{Rf2Config, Rf2Result};

impl Rf2Record for Rf2Relationship {
    const REQUIRED_COLUMNS: &'static [&'static str] = &[
        "active",
        "sourceId",
        "destinationId",
        "relationshipGroup",
        "typeId",
    ];

    fn from_record(record: &StringRecord, columns: &ColumnMap) -> Rf2Result<Self> {
        Ok(Rf2Relationship {
            active: parse::boolean(columns.get(record, "active")?)?,
            source_id: parse::sctid(columns.get(record, "sourceId")?)?,
            destination_id: parse::sctid(columns.get(record, "destinationId")?)?,
            relationship_group: parse::integer(columns.get(record, "relationshipGroup")?)?,
            type_id: parse::sctid(columns.get(record, "typeId")?)?,
        })
    }

    fn passes_filter(&self, config: &Rf2Config) -> bool {
        !config.active_only || self.active
    }
}
