use gx_core::{NodeId, RelId};

/// Raw interaction events emitted by the view surface.
///
/// Click and unlock events may arrive without a target during transient
/// states (e.g. drag-release over empty canvas); those are no-ops for the
/// coordinator, not errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    NodeMouseOver(NodeId),
    NodeMouseOut,
    MenuMouseOver(NodeId),
    MenuMouseOut,
    RelMouseOver(RelId),
    RelMouseOut,
    RelationshipClicked(RelId),
    CanvasClicked,
    NodeClose(NodeId),
    NodeClicked(Option<NodeId>),
    NodeDblClicked(NodeId),
    NodeUnlock(Option<NodeId>),
}
