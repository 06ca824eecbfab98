//! Subgraph extraction.

use std::collections::HashSet;

use snomed_types::SctId;
use tracing::debug;

use crate::error::GraphResult;
use crate::graph::SnomedGraph;

impl SnomedGraph {
    /// Extracts the self-contained fragment around `target`.
    ///
    /// The fragment holds `target`, its descendants and/or ancestors as
    /// requested, then every attribute type and value of their
    /// non-hierarchical relationships together with the ancestors of those,
    /// and the is-a attribute concept when the hierarchy was followed. The
    /// result is a new graph over the induced edges, rooted at `target`.
    pub fn subgraph(
        &self,
        target: SctId,
        include_descendants: bool,
        include_ancestors: bool,
    ) -> GraphResult<SnomedGraph> {
        let mut keep: HashSet<SctId> = HashSet::from([self.concept(target)?.id]);
        if include_descendants {
            keep.extend(self.descendants(target, None)?.iter().map(|c| c.id));
        }
        if include_ancestors {
            keep.extend(self.ancestors(target, None)?.iter().map(|c| c.id));
        }

        let mut attributes = HashSet::new();
        let mut values = HashSet::new();
        for &seed in &keep {
            for rel in self.ungrouped_relationships(seed)? {
                attributes.insert(rel.attribute_id);
                values.insert(rel.target.id);
            }
        }

        if !attributes.is_empty() {
            for &id in attributes.iter().chain(&values) {
                // Attribute types absent from the graph have no ancestors to add.
                if let Ok(ancestors) = self.ancestors(id, None) {
                    keep.extend(ancestors.iter().map(|c| c.id));
                }
            }
            keep.extend(attributes.iter().filter(|&&id| self.contains(id)));
            keep.extend(&values);
            if (include_descendants || include_ancestors) && self.contains(self.config().is_a) {
                keep.insert(self.config().is_a);
            }
        }

        let nodes: Vec<_> = self.nodes().filter(|n| keep.contains(&n.id)).cloned().collect();
        let edges: Vec<_> = self
            .edges()
            .filter(|e| keep.contains(&e.source) && keep.contains(&e.target))
            .collect();

        debug!(
            target,
            nodes = nodes.len(),
            edges = edges.len(),
            "extracted subgraph"
        );
        SnomedGraph::from_parts(nodes, edges, target, self.config().clone())
    }
}
