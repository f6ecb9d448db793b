use indexmap::IndexMap;
use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

use crate::entity::{Node, NodeId, RelId, Relationship};

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no node with id `{0}`")]
    UnknownNode(NodeId),
    #[error("relationship `{rel}` references missing node `{endpoint}`")]
    DanglingRelationship { rel: RelId, endpoint: NodeId },
}

/// Mutable store of every node and relationship currently on display.
///
/// Invariant: both endpoints of every present relationship exist in the
/// node set. Callers removing a node remove its incident relationships
/// first, so the invariant holds at every intermediate step.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: IndexMap<NodeId, Node>,
    relationships: IndexMap<RelId, Relationship>,
    /// Per origin node, the ids that were introduced by expanding it.
    expanded: IndexMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge nodes by id; already-known ids are kept untouched.
    pub fn add_nodes(&mut self, nodes: Vec<Node>) {
        for node in nodes {
            self.nodes.entry(node.id.clone()).or_insert(node);
        }
    }

    /// Merge relationships by id. Endpoints are assumed resolved; the
    /// mapping layer validates them before construction.
    pub fn add_relationships(&mut self, relationships: Vec<Relationship>) {
        for rel in relationships {
            debug_assert!(
                self.nodes.contains_key(&rel.source) && self.nodes.contains_key(&rel.target),
                "relationship endpoints must exist before insertion"
            );
            self.relationships.entry(rel.id.clone()).or_insert(rel);
        }
    }

    /// Merge nodes discovered by expanding `origin`, recording the ids
    /// that were actually new so a later collapse removes exactly them.
    pub fn add_expanded_nodes(&mut self, origin: &NodeId, nodes: Vec<Node>) {
        let mut introduced = Vec::new();
        for node in nodes {
            if !self.nodes.contains_key(&node.id) {
                introduced.push(node.id.clone());
                self.nodes.insert(node.id.clone(), node);
            }
        }
        debug!(origin = %origin, introduced = introduced.len(), "expansion merged");
        self.expanded
            .entry(origin.clone())
            .or_default()
            .extend(introduced);
    }

    /// Remove everything a prior expansion of `origin` introduced,
    /// recursing through chained expansions. Nodes known before the
    /// expansion are never recorded, so pre-existing structure survives.
    pub fn collapse_node(&mut self, origin: &NodeId) {
        let Some(children) = self.expanded.shift_remove(origin) else {
            return;
        };
        debug!(origin = %origin, children = children.len(), "collapsing");
        for child in children {
            self.collapse_node(&child);
            self.remove_connected_relationships(&child);
            self.remove_node(&child);
        }
    }

    pub fn remove_node(&mut self, id: &NodeId) {
        self.nodes.shift_remove(id);
        self.expanded.shift_remove(id);
    }

    pub fn remove_connected_relationships(&mut self, id: &NodeId) {
        self.relationships.retain(|_, rel| !rel.touches(id));
    }

    #[must_use]
    pub fn find_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn find_node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    #[must_use]
    pub fn find_relationship(&self, id: &RelId) -> Option<&Relationship> {
        self.relationships.get(id)
    }

    pub fn find_relationship_mut(&mut self, id: &RelId) -> Option<&mut Relationship> {
        self.relationships.get_mut(id)
    }

    /// Distinct ids of nodes sharing a relationship with `id`.
    #[must_use]
    pub fn neighbour_ids(&self, id: &NodeId) -> Vec<NodeId> {
        self.relationships
            .values()
            .filter(|rel| rel.touches(id))
            .map(|rel| rel.other_end(id).clone())
            .unique()
            .collect()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.values()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
