use gx_core::{ContextMenu, Node, NodeId, PropertyMap, RelId, Relationship};

/// What is currently under interaction, in the vocabulary spoken to the
/// host. "No selection" is semantically the [`VizItem::Canvas`] variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VizItem {
    Canvas {
        node_count: usize,
        relationship_count: usize,
    },
    Node {
        id: NodeId,
        labels: Vec<String>,
        properties: PropertyMap,
    },
    Relationship {
        id: RelId,
        rel_type: String,
        properties: PropertyMap,
    },
    ContextMenuItem {
        label: String,
        content: String,
        selection: String,
    },
}

impl VizItem {
    #[must_use]
    pub const fn canvas(node_count: usize, relationship_count: usize) -> Self {
        VizItem::Canvas {
            node_count,
            relationship_count,
        }
    }

    #[must_use]
    pub fn for_node(node: &Node) -> Self {
        VizItem::Node {
            id: node.id.clone(),
            labels: node.labels.clone(),
            properties: node.properties.clone(),
        }
    }

    #[must_use]
    pub fn for_relationship(rel: &Relationship) -> Self {
        VizItem::Relationship {
            id: rel.id.clone(),
            rel_type: rel.rel_type.clone(),
            properties: rel.properties.clone(),
        }
    }

    #[must_use]
    pub fn for_menu(menu: &ContextMenu) -> Self {
        VizItem::ContextMenuItem {
            label: menu.label.clone(),
            content: menu.content.clone(),
            selection: menu.selection.clone(),
        }
    }
}

/// Contents of the coordinator's selection slot; the slot itself is an
/// `Option`, so "nothing selected" is an explicit empty variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectedItem {
    Node(NodeId),
    Relationship(RelId),
}
