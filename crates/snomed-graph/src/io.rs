//! Graph persistence.
//!
//! A graph is stored as one JSON document holding its root, its nodes and its
//! edges, both in insertion order. The undirected projection is derived again
//! on load.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use snomed_types::SctId;
use tracing::info;

use crate::concept::{ConceptNode, EdgeRecord};
use crate::config::GraphConfig;
use crate::error::GraphResult;
use crate::graph::SnomedGraph;

#[derive(Serialize)]
struct GraphDocumentRef<'g> {
    root: SctId,
    nodes: Vec<&'g ConceptNode>,
    edges: Vec<EdgeRecord>,
}

#[derive(Deserialize)]
struct GraphDocument {
    root: SctId,
    nodes: Vec<ConceptNode>,
    edges: Vec<EdgeRecord>,
}

impl SnomedGraph {
    /// Writes the graph to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> GraphResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;

        info!(path = %path.display(), concepts = self.len(), "saved graph");
        Ok(())
    }

    /// Serializes the graph as JSON into `writer`.
    pub fn to_writer<W: Write>(&self, writer: W) -> GraphResult<()> {
        let document = GraphDocumentRef {
            root: self.root(),
            nodes: self.nodes().collect(),
            edges: self.edges().collect(),
        };
        serde_json::to_writer(writer, &document)?;
        Ok(())
    }

    /// Reads a graph written by [`SnomedGraph::save`].
    ///
    /// The stored root wins over `config.root`.
    pub fn load<P: AsRef<Path>>(path: P, config: GraphConfig) -> GraphResult<Self> {
        let path = path.as_ref();
        let graph = Self::from_reader(BufReader::new(File::open(path)?), config)?;

        info!(
            path = %path.display(),
            concepts = graph.len(),
            relationships = graph.edge_count(),
            "loaded graph"
        );
        Ok(graph)
    }

    /// Deserializes a graph from JSON read from `reader`.
    pub fn from_reader<R: Read>(reader: R, config: GraphConfig) -> GraphResult<Self> {
        let document: GraphDocument = serde_json::from_reader(reader)?;
        Self::from_parts(document.nodes, document.edges, document.root, config)
    }
}
