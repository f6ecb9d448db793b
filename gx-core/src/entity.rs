use derive_more::{Display, From};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifier of a node, as issued by the data source.
#[derive(
    Clone, Debug, Display, From, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct NodeId(pub String);

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        NodeId(value.to_string())
    }
}

/// Identifier of a relationship, as issued by the data source.
#[derive(
    Clone, Debug, Display, From, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RelId(pub String);

impl From<&str> for RelId {
    fn from(value: &str) -> Self {
        RelId(value.to_string())
    }
}

/// Properties in display order.
pub type PropertyMap = IndexMap<String, serde_json::Value>;

/// A context menu attached to a node by the host while it is open.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenu {
    pub label: String,
    pub content: String,
    pub selection: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub labels: Vec<String>,
    pub properties: PropertyMap,
    /// Exactly one entity across the graph may be selected at a time.
    pub selected: bool,
    /// Pinned nodes are exempt from automatic layout repositioning.
    pub fixed: bool,
    /// Whether this node's neighbourhood has been loaded.
    pub expanded: bool,
    pub context_menu: Option<ContextMenu>,
}

impl Node {
    #[must_use]
    pub fn new(id: impl Into<NodeId>, labels: Vec<String>, properties: PropertyMap) -> Self {
        Node {
            id: id.into(),
            labels,
            properties,
            selected: false,
            fixed: false,
            expanded: false,
            context_menu: None,
        }
    }
}

/// A relationship always connects two nodes present in the graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relationship {
    pub id: RelId,
    pub source: NodeId,
    pub target: NodeId,
    pub rel_type: String,
    pub properties: PropertyMap,
    pub selected: bool,
}

impl Relationship {
    #[must_use]
    pub fn new(
        id: impl Into<RelId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        rel_type: impl Into<String>,
        properties: PropertyMap,
    ) -> Self {
        Relationship {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            rel_type: rel_type.into(),
            properties,
            selected: false,
        }
    }

    /// Whether `node` is one of the two endpoints.
    #[must_use]
    pub fn touches(&self, node: &NodeId) -> bool {
        &self.source == node || &self.target == node
    }

    /// The endpoint opposite to `node`.
    #[must_use]
    pub fn other_end(&self, node: &NodeId) -> &NodeId {
        if &self.source == node {
            &self.target
        } else {
            &self.source
        }
    }
}
