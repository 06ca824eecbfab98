//! Identifier type.

/// A SNOMED CT identifier.
///
/// Concepts, descriptions and refsets share the same 64-bit identifier space.
/// Concept identifiers are never reused, so they key the graph's nodes.
pub type SctId = u64;
