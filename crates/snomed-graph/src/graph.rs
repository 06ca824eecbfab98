//! Graph store.
//!
//! [`SnomedGraph`] owns a directed petgraph of [`ConceptNode`]s plus an
//! undirected projection with identical node and edge indices, derived once
//! at construction and never mutated.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use petgraph::graph::{DiGraph, EdgeReference, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use snomed_types::SctId;
use tracing::debug;

use crate::concept::{ConceptNode, Edge, EdgeRecord, Relationship};
use crate::config::GraphConfig;
use crate::error::{GraphError, GraphResult};

/// An immutable SNOMED CT concept graph.
#[derive(Debug, Clone)]
pub struct SnomedGraph {
    pub(crate) graph: DiGraph<ConceptNode, Edge>,
    pub(crate) undirected: UnGraph<(), Edge>,
    index: HashMap<SctId, NodeIndex>,
    root: SctId,
    config: GraphConfig,
}

impl SnomedGraph {
    /// Builds a graph from nodes and edges, in the given order.
    ///
    /// # Errors
    /// Returns [`GraphError::DanglingEdge`] when an edge endpoint is not among
    /// `nodes`. Attribute types are not checked here.
    pub fn from_parts(
        nodes: Vec<ConceptNode>,
        edges: impl IntoIterator<Item = EdgeRecord>,
        root: SctId,
        config: GraphConfig,
    ) -> GraphResult<Self> {
        let mut graph = DiGraph::with_capacity(nodes.len(), 0);
        let mut index = HashMap::with_capacity(nodes.len());

        for node in nodes {
            let id = node.id;
            index.insert(id, graph.add_node(node));
        }

        for edge in edges {
            let lookup = |id: SctId| {
                index.get(&id).copied().ok_or(GraphError::DanglingEdge {
                    source_id: edge.source,
                    target_id: edge.target,
                    missing: id,
                })
            };
            let (source, target) = (lookup(edge.source)?, lookup(edge.target)?);
            graph.add_edge(
                source,
                target,
                Edge {
                    group: edge.group,
                    attribute: edge.attribute,
                },
            );
        }

        let undirected: UnGraph<(), Edge> = graph.map(|_, _| (), |_, edge| *edge).into_edge_type();
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "derived undirected projection"
        );

        Ok(Self {
            graph,
            undirected,
            index,
            root,
            config,
        })
    }

    /// Root concept identifier.
    pub fn root(&self) -> SctId {
        self.root
    }

    /// Configuration the graph was built with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of concepts.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns true if the graph has no concepts.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Number of relationships.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if `id` is a concept of the graph.
    pub fn contains(&self, id: SctId) -> bool {
        self.index.contains_key(&id)
    }

    /// Looks up a concept.
    pub fn concept(&self, id: SctId) -> GraphResult<&ConceptNode> {
        self.node_index(id).map(|idx| &self.graph[idx])
    }

    /// Iterates over concepts in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &ConceptNode> + '_ {
        self.graph.node_weights()
    }

    /// Iterates over relationships in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRecord> + '_ {
        self.graph.edge_references().map(|e| EdgeRecord {
            source: self.graph[e.source()].id,
            target: self.graph[e.target()].id,
            group: e.weight().group,
            attribute: e.weight().attribute,
        })
    }

    /// Every distinct attribute type used by the relationships, by identifier.
    ///
    /// Attribute types missing from the graph are skipped.
    pub fn attributes(&self) -> Vec<&ConceptNode> {
        self.graph
            .edge_weights()
            .map(|e| e.attribute)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter_map(|id| self.concept(id).ok())
            .collect()
    }

    /// Relationships pointing at `id`, in insertion order.
    pub fn in_relationships(&self, id: SctId) -> GraphResult<Vec<Relationship<'_>>> {
        self.relationships(id, Direction::Incoming)
    }

    /// Relationships leaving `id`, in insertion order.
    pub fn out_relationships(&self, id: SctId) -> GraphResult<Vec<Relationship<'_>>> {
        self.relationships(id, Direction::Outgoing)
    }

    fn relationships(&self, id: SctId, direction: Direction) -> GraphResult<Vec<Relationship<'_>>> {
        Ok(self
            .edges_directed(self.node_index(id)?, direction)
            .into_iter()
            .map(|e| self.relationship(e))
            .collect())
    }

    pub(crate) fn relationship(&self, edge: EdgeReference<'_, Edge>) -> Relationship<'_> {
        let weight = edge.weight();
        Relationship {
            source: &self.graph[edge.source()],
            target: &self.graph[edge.target()],
            group: weight.group,
            attribute_id: weight.attribute,
            attribute: self.concept(weight.attribute).ok(),
        }
    }

    /// Edges of `node` in `direction`, in insertion order.
    pub(crate) fn edges_directed(
        &self,
        node: NodeIndex,
        direction: Direction,
    ) -> Vec<EdgeReference<'_, Edge>> {
        let mut edges: Vec<_> = self.graph.edges_directed(node, direction).collect();
        edges.sort_unstable_by_key(|e| e.id());
        edges
    }

    pub(crate) fn node_index(&self, id: SctId) -> GraphResult<NodeIndex> {
        self.index
            .get(&id)
            .copied()
            .ok_or(GraphError::ConceptNotFound(id))
    }

    pub(crate) fn is_hierarchical(&self, edge: &Edge) -> bool {
        edge.attribute == self.config.is_a
    }
}

impl fmt::Display for SnomedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} concepts and {} relationships",
            self.graph.node_count(),
            self.graph.edge_count()
        )
    }
}
