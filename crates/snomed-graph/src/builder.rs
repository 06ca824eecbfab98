//! Graph construction from release tables.

use std::collections::HashSet;
use std::path::Path;

use snomed_loader::{locate_release_files, read_release, ReleaseTables, Rf2Config};
use snomed_types::{Rf2Relationship, SctId};
use tracing::{debug, info};

use crate::concept::{ConceptNode, EdgeRecord};
use crate::config::GraphConfig;
use crate::error::{GraphError, GraphResult};
use crate::graph::SnomedGraph;
use crate::resolver::resolve_descriptions;

impl SnomedGraph {
    /// Reads an unpacked RF2 release directory and builds its graph.
    ///
    /// The base and secondary language tables are taken from `config`.
    ///
    /// # Errors
    /// Configuration errors when the release layout is wrong, then any error of
    /// [`SnomedGraph::from_tables`].
    pub fn from_rf2<P: AsRef<Path>>(path: P, config: GraphConfig) -> GraphResult<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading RF2 release");

        let files = locate_release_files(
            path,
            &config.base_language,
            config.secondary_language.as_deref(),
        )?;
        let tables = read_release(&files, &Rf2Config::default())?;

        Self::from_tables(&tables, config)
    }

    /// Builds a graph from already parsed release tables.
    ///
    /// Every active relationship becomes an edge. Concepts touching no edge,
    /// neither as endpoint nor as attribute type, are left out.
    ///
    /// # Errors
    /// Resolution errors from [`resolve_descriptions`], then
    /// [`GraphError::DanglingEdge`] or [`GraphError::UnknownAttribute`] when a
    /// relationship refers to a concept without a node.
    pub fn from_tables(tables: &ReleaseTables, config: GraphConfig) -> GraphResult<Self> {
        let nodes = resolve_descriptions(
            &tables.concepts,
            &tables.descriptions,
            &tables.language_members,
            &config,
        )?;
        let edges = relationship_edges(&nodes, &tables.relationships)?;
        let nodes = prune_isolated(nodes, &edges);

        let root = config.root;
        let graph = Self::from_parts(nodes, edges, root, config)?;
        info!(
            concepts = graph.len(),
            relationships = graph.edge_count(),
            "built SNOMED CT graph"
        );
        Ok(graph)
    }
}

fn relationship_edges(
    nodes: &[ConceptNode],
    relationships: &[Rf2Relationship],
) -> GraphResult<Vec<EdgeRecord>> {
    let known: HashSet<SctId> = nodes.iter().map(|n| n.id).collect();

    relationships
        .iter()
        .filter(|r| r.active)
        .map(|r| {
            for endpoint in [r.source_id, r.destination_id] {
                if !known.contains(&endpoint) {
                    return Err(GraphError::DanglingEdge {
                        source_id: r.source_id,
                        target_id: r.destination_id,
                        missing: endpoint,
                    });
                }
            }
            if !known.contains(&r.type_id) {
                return Err(GraphError::UnknownAttribute {
                    source_id: r.source_id,
                    target_id: r.destination_id,
                    attribute: r.type_id,
                });
            }
            Ok(EdgeRecord {
                source: r.source_id,
                target: r.destination_id,
                group: r.relationship_group,
                attribute: r.type_id,
            })
        })
        .collect()
}

fn prune_isolated(nodes: Vec<ConceptNode>, edges: &[EdgeRecord]) -> Vec<ConceptNode> {
    let incident: HashSet<SctId> = edges
        .iter()
        .flat_map(|e| [e.source, e.target, e.attribute])
        .collect();

    let total = nodes.len();
    let kept: Vec<ConceptNode> = nodes
        .into_iter()
        .filter(|n| {
            let keep = incident.contains(&n.id);
            if !keep {
                debug!(concept = n.id, "pruning isolated concept");
            }
            keep
        })
        .collect();

    info!(pruned = total - kept.len(), "pruned isolated concepts");
    kept
}
