use indexmap::IndexMap;

use crate::graph::Graph;

/// Aggregate shape of the graph's current contents.
///
/// Recomputed from scratch on every structural change, never patched
/// incrementally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub node_count: usize,
    pub relationship_count: usize,
    /// Occurrences per node label, in first-seen order.
    pub labels: IndexMap<String, usize>,
    /// Occurrences per relationship type, in first-seen order.
    pub relationship_types: IndexMap<String, usize>,
}

impl GraphStats {
    #[must_use]
    pub fn of(graph: &Graph) -> Self {
        let mut labels = IndexMap::new();
        for node in graph.nodes() {
            for label in &node.labels {
                *labels.entry(label.clone()).or_insert(0) += 1;
            }
        }

        let mut relationship_types = IndexMap::new();
        for rel in graph.relationships() {
            *relationship_types.entry(rel.rel_type.clone()).or_insert(0) += 1;
        }

        GraphStats {
            node_count: graph.node_count(),
            relationship_count: graph.relationship_count(),
            labels,
            relationship_types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GraphStats;
    use crate::{
        entity::{Node, PropertyMap, Relationship},
        graph::Graph,
    };

    #[test]
    fn counts_labels_and_types() {
        let mut graph = Graph::new();
        graph.add_nodes(vec![
            Node::new("a", vec!["Person".into()], PropertyMap::new()),
            Node::new("b", vec!["Person".into(), "Admin".into()], PropertyMap::new()),
            Node::new("c", vec![], PropertyMap::new()),
        ]);
        graph.add_relationships(vec![
            Relationship::new("r1", "a", "b", "KNOWS", PropertyMap::new()),
            Relationship::new("r2", "b", "c", "KNOWS", PropertyMap::new()),
            Relationship::new("r3", "c", "a", "OWNS", PropertyMap::new()),
        ]);

        let stats = GraphStats::of(&graph);
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.relationship_count, 3);
        assert_eq!(stats.labels.get("Person"), Some(&2));
        assert_eq!(stats.labels.get("Admin"), Some(&1));
        assert_eq!(stats.relationship_types.get("KNOWS"), Some(&2));
        assert_eq!(stats.relationship_types.get("OWNS"), Some(&1));
    }
}
