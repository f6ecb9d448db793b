//! Maps wire-shaped query records into graph entities.
//!
//! These are pure functions: they produce fresh entities and aggregates
//! without touching their inputs or the graph.

use serde::Deserialize;

use crate::{
    entity::{Node, NodeId, PropertyMap, RelId, Relationship},
    graph::{Graph, GraphError},
    stats::GraphStats,
};

/// Node record as returned by the data source.
#[derive(Clone, Debug, Deserialize)]
pub struct RawNode {
    pub id: NodeId,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: PropertyMap,
}

/// Relationship record as returned by the data source.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRelationship {
    pub id: RelId,
    pub start_node_id: NodeId,
    pub end_node_id: NodeId,
    #[serde(rename = "type")]
    pub rel_type: String,
    #[serde(default)]
    pub properties: PropertyMap,
}

/// Build fresh node entities; all interaction flags start clear.
#[must_use]
pub fn map_nodes(raw: Vec<RawNode>) -> Vec<Node> {
    raw.into_iter()
        .map(|record| Node::new(record.id, record.labels, record.properties))
        .collect()
}

/// Build relationship entities, resolving both endpoints against the
/// graph. A missing endpoint means the record cannot be represented
/// without breaking the referential invariant.
pub fn map_relationships(
    raw: Vec<RawRelationship>,
    graph: &Graph,
) -> Result<Vec<Relationship>, GraphError> {
    raw.into_iter()
        .map(|record| {
            for endpoint in [&record.start_node_id, &record.end_node_id] {
                if graph.find_node(endpoint).is_none() {
                    return Err(GraphError::DanglingRelationship {
                        rel: record.id.clone(),
                        endpoint: endpoint.clone(),
                    });
                }
            }
            Ok(Relationship::new(
                record.id,
                record.start_node_id,
                record.end_node_id,
                record.rel_type,
                record.properties,
            ))
        })
        .collect()
}

#[must_use]
pub fn get_graph_stats(graph: &Graph) -> GraphStats {
    GraphStats::of(graph)
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use rstest::rstest;

    use super::{RawNode, RawRelationship, map_nodes, map_relationships};
    use crate::{
        entity::{Node, PropertyMap},
        graph::{Graph, GraphError},
    };

    fn seeded() -> Graph {
        let mut graph = Graph::new();
        graph.add_nodes(vec![
            Node::new("a", vec![], PropertyMap::new()),
            Node::new("b", vec![], PropertyMap::new()),
        ]);
        graph
    }

    fn raw_rel(id: &str, start: &str, end: &str) -> RawRelationship {
        RawRelationship {
            id: id.into(),
            start_node_id: start.into(),
            end_node_id: end.into(),
            rel_type: "KNOWS".to_string(),
            properties: PropertyMap::new(),
        }
    }

    #[test]
    fn mapped_nodes_start_with_clear_flags() {
        let raw = RawNode {
            id: "a".into(),
            labels: vec!["Person".into()],
            properties: PropertyMap::new(),
        };
        let nodes = map_nodes(vec![raw]);
        assert!(!nodes[0].selected && !nodes[0].fixed && !nodes[0].expanded);
        assert!(nodes[0].context_menu.is_none());
    }

    #[rstest]
    #[case("a", "b", true)]
    #[case("a", "missing", false)]
    #[case("missing", "b", false)]
    fn endpoints_resolve_or_fail(
        #[case] start: &str,
        #[case] end: &str,
        #[case] ok: bool,
    ) -> Result<()> {
        let graph = seeded();
        let mapped = map_relationships(vec![raw_rel("r1", start, end)], &graph);
        if ok {
            assert_eq!(mapped?.len(), 1);
        } else {
            assert!(matches!(
                mapped,
                Err(GraphError::DanglingRelationship { .. })
            ));
        }
        Ok(())
    }

    #[test]
    fn raw_records_deserialize_from_wire_json() -> Result<()> {
        let rel: RawRelationship = serde_json::from_str(
            r#"{
                "id": "r7",
                "startNodeId": "a",
                "endNodeId": "b",
                "type": "KNOWS",
                "properties": { "since": 2019 }
            }"#,
        )?;
        assert_eq!(rel.rel_type, "KNOWS");
        assert_eq!(rel.start_node_id, "a".into());
        assert_eq!(rel.properties["since"], 2019);
        Ok(())
    }
}
