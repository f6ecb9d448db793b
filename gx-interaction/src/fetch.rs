use std::{cell::RefCell, rc::Rc};

use gx_core::{
    GraphError, Node, NodeId,
    mapping::{self, RawNode, RawRelationship},
};
use tracing::debug;

use crate::{handler::HandlerInner, surface::UpdateRequest};

/// Source of a node's yet-unknown neighbourhood.
///
/// Called once per expansion. The implementation must eventually consume
/// the sink at most once; `known_neighbours` carries the ids the graph
/// already holds for the node so the source can avoid redundant payload.
pub trait NeighborSource {
    fn fetch(&mut self, node: &Node, known_neighbours: &[NodeId], sink: ExpandSink);
}

/// Single-use handle through which one expansion's results re-enter the
/// coordinator.
///
/// Results are applied in arrival order, regardless of what happened to
/// the graph while the fetch was outstanding; there is no staleness
/// check.
pub struct ExpandSink {
    pub(crate) inner: Rc<RefCell<HandlerInner>>,
    pub(crate) origin: NodeId,
}

impl ExpandSink {
    /// Apply the fetched neighbourhood: merge the nodes as expanded from
    /// the origin, resolve and add the relationships, then refresh the
    /// surface and rebroadcast statistics.
    ///
    /// Relationship records that no longer resolve (e.g. the origin was
    /// closed while the fetch was outstanding) are reported back to the
    /// source; the nodes stay merged and the surface is still refreshed,
    /// so view and model never diverge.
    pub fn resolve(
        self,
        nodes: Vec<RawNode>,
        relationships: Vec<RawRelationship>,
    ) -> Result<(), GraphError> {
        debug!(origin = %self.origin, nodes = nodes.len(), relationships = relationships.len(), "expansion resolved");
        let mut inner = self.inner.borrow_mut();
        let mapped = {
            let mut graph = inner.graph.borrow_mut();
            graph.add_expanded_nodes(&self.origin, mapping::map_nodes(nodes));
            mapping::map_relationships(relationships, &graph)
                .map(|rels| graph.add_relationships(rels))
        };
        inner.request_update(UpdateRequest::all());
        inner.graph_model_changed();
        mapped
    }
}
