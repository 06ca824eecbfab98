//! # snomed-graph
//!
//! An in-memory SNOMED CT concept graph built from an RF2 release snapshot.
//!
//! Every active concept becomes a node carrying its fully specified name and
//! its preferred terms and synonyms in English and an optional translation.
//! Every active relationship becomes a directed edge labelled with its
//! attribute type and group. The graph answers hierarchy, neighbourhood and
//! path queries, extracts self-contained subgraphs and searches terms.
//!
//! ```no_run
//! use snomed_graph::{AcceptabilityFilter, GraphConfig, SearchQuery, SnomedGraph};
//!
//! let graph = SnomedGraph::from_rf2(
//!     "SnomedCT_ManagedServiceFR_PRODUCTION_FR1000315_20240621T120000Z",
//!     GraphConfig::default(),
//! )?;
//!
//! for parent in graph.parents(22298006)? {
//!     println!("{parent}");
//! }
//!
//! let query = SearchQuery::new("cardi").acceptability(AcceptabilityFilter::Preferred);
//! let found = graph.search(&query)?;
//! println!("{} concepts", found.len());
//! # Ok::<(), snomed_graph::GraphError>(())
//! ```

#![warn(missing_docs)]

mod builder;
mod concept;
mod config;
mod error;
mod graph;
mod io;
mod query;
mod resolver;
mod search;
mod subgraph;

#[cfg(test)]
mod test_support;

pub use concept::{Concept, ConceptNode, EdgeRecord, Relationship, RelationshipGroup};
pub use config::GraphConfig;
pub use error::{ErrorKind, GraphError, GraphResult};
pub use graph::SnomedGraph;
pub use resolver::resolve_descriptions;
pub use search::{AcceptabilityFilter, SearchQuery, TermRow};

// Re-export the lower layers for convenience
pub use snomed_loader;
pub use snomed_types;
