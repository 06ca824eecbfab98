//! Hierarchy and path queries.
//!
//! Closures are bounded breadth-first walks over is-a edges; paths use A*
//! with unit edge costs over the undirected projection.

use std::collections::{BTreeMap, HashSet, VecDeque};

use petgraph::algo::astar;
use petgraph::graph::NodeIndex;
use petgraph::visit::{Bfs, EdgeFiltered, EdgeRef, Reversed};
use petgraph::Direction;
use snomed_types::SctId;

use crate::concept::{Concept, ConceptNode, Relationship, RelationshipGroup};
use crate::error::GraphResult;
use crate::graph::SnomedGraph;

impl SnomedGraph {
    /// Direct is-a parents of `id`.
    pub fn parents(&self, id: SctId) -> GraphResult<Vec<&ConceptNode>> {
        let idx = self.node_index(id)?;
        Ok(self.nodes_at(&self.parent_indices(idx)))
    }

    /// Direct is-a children of `id`.
    pub fn children(&self, id: SctId) -> GraphResult<Vec<&ConceptNode>> {
        let idx = self.node_index(id)?;
        Ok(self.nodes_at(&self.child_indices(idx)))
    }

    /// Transitive is-a parents of `id`, up to `depth` hops (`None` = unbounded).
    ///
    /// Never includes `id` itself.
    pub fn ancestors(&self, id: SctId, depth: Option<usize>) -> GraphResult<Vec<&ConceptNode>> {
        let reached = self.walk(self.node_index(id)?, depth, |n| self.parent_indices(n));
        Ok(self.nodes_at(&reached[1..]))
    }

    /// Concepts below `id`, up to `depth` is-a hops (`None` = unbounded).
    ///
    /// Hops are counted over is-a edges in either direction. A concept only
    /// qualifies if some chain of relationships leads from it to `id`.
    /// Never includes `id` itself.
    pub fn descendants(&self, id: SctId, depth: Option<usize>) -> GraphResult<Vec<&ConceptNode>> {
        let idx = self.node_index(id)?;
        let reaching = self.reaching(idx);
        let reached = self.walk(idx, depth, |n| self.is_a_neighbor_indices(n));
        let below: Vec<NodeIndex> = reached[1..]
            .iter()
            .copied()
            .filter(|n| reaching.contains(n))
            .collect();
        Ok(self.nodes_at(&below))
    }

    /// Concepts within `degree` is-a hops of `id` in either direction,
    /// including `id`.
    pub fn neighbors(&self, id: SctId, degree: usize) -> GraphResult<Vec<&ConceptNode>> {
        let reached = self.walk(self.node_index(id)?, Some(degree), |n| {
            self.is_a_neighbor_indices(n)
        });
        Ok(self.nodes_at(&reached))
    }

    /// Shortest path between `from` and `to` using is-a edges in either
    /// direction.
    ///
    /// Returns `Ok(None)` when the concepts are not connected that way.
    pub fn shortest_hierarchical_path(
        &self,
        from: SctId,
        to: SctId,
    ) -> GraphResult<Option<Vec<&ConceptNode>>> {
        self.path_between(from, to, true)
    }

    /// Shortest path between `from` and `to` over every relationship, in
    /// either direction.
    ///
    /// Returns `Ok(None)` when the concepts are disconnected.
    pub fn shortest_path(&self, from: SctId, to: SctId) -> GraphResult<Option<Vec<&ConceptNode>>> {
        self.path_between(from, to, false)
    }

    /// Shortest hierarchical path from `id` to the graph's root.
    pub fn hierarchical_path_to_root(&self, id: SctId) -> GraphResult<Option<Vec<&ConceptNode>>> {
        self.shortest_hierarchical_path(id, self.root())
    }

    /// Non-hierarchical relationships of `id`, in insertion order.
    pub fn ungrouped_relationships(&self, id: SctId) -> GraphResult<Vec<Relationship<'_>>> {
        let is_a = self.config().is_a;
        Ok(self
            .out_relationships(id)?
            .into_iter()
            .filter(|r| r.attribute_id != is_a)
            .collect())
    }

    /// Non-hierarchical relationships of `id`, keyed by relationship group.
    pub fn grouped_relationships(
        &self,
        id: SctId,
    ) -> GraphResult<BTreeMap<u16, Vec<Relationship<'_>>>> {
        let mut groups: BTreeMap<u16, Vec<Relationship<'_>>> = BTreeMap::new();
        for rel in self.ungrouped_relationships(id)? {
            groups.entry(rel.group).or_default().push(rel);
        }
        Ok(groups)
    }

    /// Relationship groups of `id`, ordered by group number.
    pub fn relationship_groups(&self, id: SctId) -> GraphResult<Vec<RelationshipGroup<'_>>> {
        Ok(self
            .grouped_relationships(id)?
            .into_iter()
            .map(|(group, relationships)| RelationshipGroup {
                group,
                relationships,
            })
            .collect())
    }

    /// A concept with its parents, children and relationship groups.
    pub fn full_concept(&self, id: SctId) -> GraphResult<Concept<'_>> {
        Ok(Concept {
            node: self.concept(id)?,
            parents: self.parents(id)?,
            children: self.children(id)?,
            groups: self.relationship_groups(id)?,
        })
    }

    fn parent_indices(&self, node: NodeIndex) -> Vec<NodeIndex> {
        self.edges_directed(node, Direction::Outgoing)
            .into_iter()
            .filter(|e| self.is_hierarchical(e.weight()))
            .map(|e| e.target())
            .collect()
    }

    fn child_indices(&self, node: NodeIndex) -> Vec<NodeIndex> {
        self.edges_directed(node, Direction::Incoming)
            .into_iter()
            .filter(|e| self.is_hierarchical(e.weight()))
            .map(|e| e.source())
            .collect()
    }

    fn is_a_neighbor_indices(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let is_a = self.config().is_a;
        self.undirected
            .edges(node)
            .filter(|e| e.weight().attribute == is_a)
            .map(|e| if e.source() == node { e.target() } else { e.source() })
            .collect()
    }

    /// Every node with a directed path to `node` over any relationship.
    fn reaching(&self, node: NodeIndex) -> HashSet<NodeIndex> {
        let reversed = Reversed(&self.graph);
        let mut bfs = Bfs::new(reversed, node);
        let mut found = HashSet::new();
        while let Some(n) = bfs.next(reversed) {
            found.insert(n);
        }
        found
    }

    fn nodes_at(&self, indices: &[NodeIndex]) -> Vec<&ConceptNode> {
        indices.iter().map(|&idx| &self.graph[idx]).collect()
    }

    /// Breadth-first walk from `start`; `start` comes first in the result.
    fn walk<F>(&self, start: NodeIndex, depth: Option<usize>, next: F) -> Vec<NodeIndex>
    where
        F: Fn(NodeIndex) -> Vec<NodeIndex>,
    {
        let mut visited = HashSet::from([start]);
        let mut reached = vec![start];
        let mut queue = VecDeque::from([(start, 0usize)]);

        while let Some((current, distance)) = queue.pop_front() {
            if depth.is_some_and(|max| distance >= max) {
                continue;
            }
            for neighbor in next(current) {
                if visited.insert(neighbor) {
                    reached.push(neighbor);
                    queue.push_back((neighbor, distance + 1));
                }
            }
        }

        reached
    }

    // Searching from the smaller identifier keeps a->b the reverse of b->a.
    fn path_between(
        &self,
        from: SctId,
        to: SctId,
        hierarchical: bool,
    ) -> GraphResult<Option<Vec<&ConceptNode>>> {
        let (a, b) = (self.node_index(from)?, self.node_index(to)?);
        let (start, goal) = if from <= to { (a, b) } else { (b, a) };

        let found = if hierarchical {
            let is_a = self.config().is_a;
            let filtered = EdgeFiltered::from_fn(&self.undirected, |e| e.weight().attribute == is_a);
            astar(&filtered, start, |n| n == goal, |_| 1usize, |_| 0)
        } else {
            astar(&self.undirected, start, |n| n == goal, |_| 1usize, |_| 0)
        };

        Ok(found.map(|(_, mut path)| {
            if from > to {
                path.reverse();
            }
            self.nodes_at(&path)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::EdgeRecord;
    use crate::config::GraphConfig;
    use crate::error::GraphError;
    use crate::test_support::{fixture, ids, node, TEST};
    use snomed_types::well_known::{FINDING_SITE, IS_A};

    #[test]
    fn test_parents_and_children() {
        let g = fixture();
        assert_eq!(ids(g.parents(129574000).unwrap()), vec![404684003]);
        assert_eq!(
            ids(g.children(129574000).unwrap()),
            vec![1163440003, 311796008, 311792005, 311793000]
        );
        assert_eq!(ids(g.parents(TEST).unwrap()), vec![311793000, IS_A]);
    }

    #[test]
    fn test_ancestors() {
        let g = fixture();
        let mut ancestors = ids(g.ancestors(129574000, None).unwrap());
        ancestors.sort_unstable();
        assert_eq!(ancestors, vec![138875005, 404684003]);

        assert_eq!(ids(g.ancestors(129574000, Some(1)).unwrap()), vec![404684003]);
        assert!(g.ancestors(138875005, None).unwrap().is_empty());
    }

    #[test]
    fn test_descendants() {
        let g = fixture();
        let mut descendants = ids(g.descendants(129574000, None).unwrap());
        descendants.sort_unstable();
        assert_eq!(
            descendants,
            vec![TEST, 311792005, 311793000, 311796008, 1163440003]
        );

        let mut direct = ids(g.descendants(129574000, Some(1)).unwrap());
        direct.sort_unstable();
        assert_eq!(direct, vec![311792005, 311793000, 311796008, 1163440003]);
    }

    fn is_a(source: SctId, target: SctId) -> EdgeRecord {
        EdgeRecord {
            source,
            target,
            group: 0,
            attribute: IS_A,
        }
    }

    fn small_graph(count: SctId, edges: Vec<EdgeRecord>) -> SnomedGraph {
        let nodes = (1..=count)
            .map(|id| node(id, &format!("Concept {id} (test)")))
            .collect::<Vec<_>>();
        SnomedGraph::from_parts(nodes, edges, 1, GraphConfig::default()).unwrap()
    }

    #[test]
    fn test_descendants_depth_on_diamond() {
        // 2 is-a 1, 3 is-a 2, 4 is-a 3, 5 is-a 4 and 5 is-a 1.
        let (p, c, x, y, d) = (1, 2, 3, 4, 5);
        let g = small_graph(5, vec![is_a(c, p), is_a(x, c), is_a(y, x), is_a(d, y), is_a(d, p)]);

        let mut two = ids(g.descendants(c, Some(2)).unwrap());
        two.sort_unstable();
        assert_eq!(two, vec![x, y, d]);

        assert_eq!(ids(g.descendants(c, Some(1)).unwrap()), vec![x]);
        assert!(g.descendants(c, Some(0)).unwrap().is_empty());

        let mut all = ids(g.descendants(c, None).unwrap());
        all.sort_unstable();
        assert_eq!(all, vec![x, y, d]);
    }

    #[test]
    fn test_descendants_through_attribute_edge() {
        // Sibling 3 of 2 points at it through a finding site.
        let (p, c, s) = (1, 2, 3);
        let site = EdgeRecord {
            source: s,
            target: c,
            group: 1,
            attribute: FINDING_SITE,
        };
        let g = small_graph(3, vec![is_a(c, p), is_a(s, p), site]);

        assert_eq!(ids(g.descendants(c, None).unwrap()), vec![s]);
        assert!(g.descendants(c, Some(1)).unwrap().is_empty());
        assert_eq!(g.descendants(p, None).unwrap().len(), 2);
    }

    #[test]
    fn test_neighbors() {
        let g = fixture();
        let mut near = ids(g.neighbors(129574000, 3).unwrap());
        near.sort_unstable();

        let mut expected = vec![
            1163440003,
            IS_A,
            123037004,
            129574000,
            138875005,
            311792005,
            311793000,
            311796008,
            362981000,
            404684003,
            71388002,
            900000000000441003,
            TEST,
        ];
        expected.sort_unstable();
        assert_eq!(near, expected);

        assert_eq!(ids(g.neighbors(129574000, 0).unwrap()), vec![129574000]);
    }

    #[test]
    fn test_hierarchy_is_consistent() {
        let g = fixture();
        for concept in g.nodes() {
            for parent in g.parents(concept.id).unwrap() {
                assert!(ids(g.children(parent.id).unwrap()).contains(&concept.id));
            }

            let ancestors = ids(g.ancestors(concept.id, None).unwrap());
            let descendants = ids(g.descendants(concept.id, None).unwrap());
            assert!(!ancestors.contains(&concept.id));
            assert!(ancestors.iter().all(|a| !descendants.contains(a)));
        }
    }

    #[test]
    fn test_ancestors_ignore_attribute_edges() {
        let g = fixture();
        let ancestors = ids(g.ancestors(311793000, None).unwrap());
        assert!(!ancestors.contains(&74281007));
        assert!(!ancestors.contains(&123037004));
    }

    #[test]
    fn test_hierarchical_path() {
        let g = fixture();
        let path = ids(g.hierarchical_path_to_root(TEST).unwrap().unwrap());
        assert_eq!(path, vec![TEST, IS_A, 900000000000441003, 138875005]);

        let back = ids(g.shortest_hierarchical_path(138875005, TEST).unwrap().unwrap());
        assert_eq!(back, vec![138875005, 900000000000441003, IS_A, TEST]);
    }

    #[test]
    fn test_shortest_path_uses_attributes() {
        let g = fixture();
        let path = ids(g.shortest_path(1163440003, 362981000).unwrap().unwrap());
        assert_eq!(path, vec![1163440003, 424124008, 362981000]);

        let hierarchical = ids(g
            .shortest_hierarchical_path(1163440003, 362981000)
            .unwrap()
            .unwrap());
        assert_eq!(hierarchical.len(), 5);
    }

    #[test]
    fn test_paths_are_symmetric() {
        let g = fixture();
        for (a, b) in [(TEST, 55470003), (74281007, 311796008), (424124008, 6975006)] {
            let mut forward = ids(g.shortest_path(a, b).unwrap().unwrap());
            forward.reverse();
            assert_eq!(forward, ids(g.shortest_path(b, a).unwrap().unwrap()));
        }
    }

    #[test]
    fn test_no_path() {
        let edge = EdgeRecord {
            source: 1,
            target: 2,
            group: 1,
            attribute: FINDING_SITE,
        };
        let g = SnomedGraph::from_parts(
            vec![node(1, "One (test)"), node(2, "Two (test)"), node(3, "Three (test)")],
            [edge],
            3,
            GraphConfig::default(),
        )
        .unwrap();

        assert!(g.shortest_hierarchical_path(1, 2).unwrap().is_none());
        assert!(g.shortest_path(1, 3).unwrap().is_none());
        assert_eq!(ids(g.shortest_path(2, 1).unwrap().unwrap()), vec![2, 1]);
    }

    #[test]
    fn test_unknown_concept() {
        let g = fixture();
        assert!(matches!(g.parents(1), Err(GraphError::ConceptNotFound(1))));
        assert!(matches!(
            g.shortest_path(129574000, 1),
            Err(GraphError::ConceptNotFound(1))
        ));
    }

    #[test]
    fn test_grouped_relationships() {
        let g = fixture();
        let groups = g.grouped_relationships(129574000).unwrap();

        let summary: Vec<(u16, Vec<(SctId, SctId)>)> = groups
            .iter()
            .map(|(group, rels)| {
                (
                    *group,
                    rels.iter().map(|r| (r.attribute_id, r.target.id)).collect(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, vec![(FINDING_SITE, 74281007), (116676008, 55641003)]),
                (2, vec![(255234002, 387713003)]),
            ]
        );

        assert_eq!(g.ungrouped_relationships(129574000).unwrap().len(), 3);
        assert!(g.grouped_relationships(TEST).unwrap().is_empty());
    }

    #[test]
    fn test_full_concept() {
        let g = fixture();
        let concept = g.full_concept(1163440003).unwrap();

        assert_eq!(ids(concept.parents.clone()), vec![129574000]);
        assert!(concept.children.is_empty());
        let groups: Vec<u16> = concept.groups.iter().map(|g| g.group).collect();
        assert_eq!(groups, vec![1, 2, 3]);

        let text = concept.to_string();
        assert!(text.starts_with("1163440003 |Postoperative acute myocardial infarction (disorder)|"));
        assert!(text.contains("Acute myocardial infarction following operative procedure"));
    }
}
