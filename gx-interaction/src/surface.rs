use crate::event::SurfaceEvent;

/// A registered surface event listener.
pub type SurfaceListener = Box<dyn FnMut(SurfaceEvent)>;

/// Which element sets the next repaint must re-read from the model.
/// Requests are fire-and-forget and idempotent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateRequest {
    pub update_nodes: bool,
    pub update_relationships: bool,
}

impl UpdateRequest {
    /// Re-read both nodes and relationships.
    #[must_use]
    pub const fn all() -> Self {
        UpdateRequest {
            update_nodes: true,
            update_relationships: true,
        }
    }
}

/// The rendering and layout surface, as seen from the interaction layer.
///
/// The surface is the sole source of raw interaction events. Listeners
/// call back into the surface (`update`), so implementations must not
/// hold their own borrow while delivering an event.
pub trait ViewSurface {
    /// Register a listener for every raw event the surface emits.
    fn subscribe(&mut self, listener: SurfaceListener);

    /// Request that the next repaint re-read the given element sets.
    fn update(&mut self, request: UpdateRequest);
}
