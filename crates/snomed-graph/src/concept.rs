//! Node, edge and relationship value types.

use std::fmt;

use serde::{Deserialize, Serialize};
use snomed_types::SctId;

/// A concept of the graph with its resolved descriptions.
///
/// `preferred_term` and `synonyms` are in the base language (English),
/// `secondary_*` in the translation, and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptNode {
    /// Concept identifier.
    pub id: SctId,
    /// Fully specified name, ending with the semantic tag in parentheses.
    pub fsn: String,
    /// Preferred term in the base language.
    pub preferred_term: String,
    /// Preferred term in the secondary language.
    #[serde(default)]
    pub secondary_preferred_term: String,
    /// Acceptable synonyms in the base language.
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Acceptable synonyms in the secondary language.
    #[serde(default)]
    pub secondary_synonyms: Vec<String>,
}

impl ConceptNode {
    /// Semantic tag of the FSN, e.g. `disorder` for `Myocardial infarction (disorder)`.
    pub fn semantic_tag(&self) -> &str {
        let tag = self
            .fsn
            .rsplit_once(" (")
            .map_or(self.fsn.as_str(), |(_, tag)| tag);
        tag.strip_suffix(')').unwrap_or(tag)
    }
}

impl fmt::Display for ConceptNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} |{}|", self.id, self.fsn)
    }
}

/// Edge weight stored in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Edge {
    pub group: u16,
    pub attribute: SctId,
}

/// A relationship in tabular form, as exported and persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Source concept.
    pub source: SctId,
    /// Target concept.
    pub target: SctId,
    /// Relationship group, 0 when ungrouped.
    pub group: u16,
    /// Attribute type concept.
    pub attribute: SctId,
}

/// A relationship resolved against the graph's nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relationship<'g> {
    /// Source concept.
    pub source: &'g ConceptNode,
    /// Target concept.
    pub target: &'g ConceptNode,
    /// Relationship group, 0 when ungrouped.
    pub group: u16,
    /// Attribute type identifier.
    pub attribute_id: SctId,
    /// Attribute type concept; absent in subgraphs that exclude it.
    pub attribute: Option<&'g ConceptNode>,
}

impl fmt::Display for Relationship<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.attribute {
            Some(attribute) => write!(f, "[{}] ---[{attribute}]---> [{}]", self.source, self.target),
            None => write!(f, "[{}] ---[{}]---> [{}]", self.source, self.attribute_id, self.target),
        }
    }
}

/// Non-hierarchical relationships of one concept sharing a group number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipGroup<'g> {
    /// Group number.
    pub group: u16,
    /// Relationships in edge insertion order.
    pub relationships: Vec<Relationship<'g>>,
}

impl fmt::Display for RelationshipGroup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group {}", self.group)?;
        for rel in &self.relationships {
            write!(f, "\n\t{rel}")?;
        }
        Ok(())
    }
}

/// A concept with its parents, children and relationship groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept<'g> {
    /// The concept itself.
    pub node: &'g ConceptNode,
    /// Direct is-a parents.
    pub parents: Vec<&'g ConceptNode>,
    /// Direct is-a children.
    pub children: Vec<&'g ConceptNode>,
    /// Non-hierarchical relationships, ordered by group number.
    pub groups: Vec<RelationshipGroup<'g>>,
}

impl fmt::Display for Concept<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node;
        writeln!(f, "{node}")?;
        writeln!(f, "\nPreferred term:\n{}", node.preferred_term)?;
        writeln!(f, "\nSecondary preferred term:\n{}", node.secondary_preferred_term)?;
        writeln!(f, "\nSynonyms:\n{:?}", node.synonyms)?;
        writeln!(f, "\nSecondary synonyms:\n{:?}", node.secondary_synonyms)?;
        writeln!(f, "\nParents:")?;
        for parent in &self.parents {
            writeln!(f, "{parent}")?;
        }
        writeln!(f, "\nChildren:")?;
        for child in &self.children {
            writeln!(f, "{child}")?;
        }
        writeln!(f, "\nRelationships:")?;
        for group in &self.groups {
            writeln!(f, "{group}")?;
        }
        Ok(())
    }
}
