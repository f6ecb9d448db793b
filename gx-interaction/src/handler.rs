use std::{cell::RefCell, rc::Rc};

use delegate::delegate;
use gx_core::{Graph, GraphStats, NodeId, RelId, mapping};
use tracing::debug;

use crate::{
    event::SurfaceEvent,
    fetch::{ExpandSink, NeighborSource},
    item::{SelectedItem, VizItem},
    surface::{SurfaceListener, UpdateRequest, ViewSurface},
};

/// Host-side notification callbacks. All are synchronous and
/// fire-and-forget; no return value is consumed.
pub struct HostCallbacks {
    pub on_graph_model_change: Box<dyn FnMut(GraphStats)>,
    pub on_item_mouse_over: Box<dyn FnMut(VizItem)>,
    pub on_item_selected: Box<dyn FnMut(VizItem)>,
}

impl HostCallbacks {
    /// Callbacks that discard every notification.
    #[must_use]
    pub fn noop() -> Self {
        HostCallbacks {
            on_graph_model_change: Box::new(|_| {}),
            on_item_mouse_over: Box::new(|_| {}),
            on_item_selected: Box::new(|_| {}),
        }
    }
}

pub(crate) struct HandlerInner {
    pub(crate) graph: Rc<RefCell<Graph>>,
    pub(crate) surface: Rc<RefCell<dyn ViewSurface>>,
    pub(crate) fetcher: Rc<RefCell<dyn NeighborSource>>,
    pub(crate) callbacks: HostCallbacks,
    pub(crate) selection: Option<SelectedItem>,
}

impl HandlerInner {
    pub(crate) fn canvas_item(&self) -> VizItem {
        let graph = self.graph.borrow();
        VizItem::canvas(graph.node_count(), graph.relationship_count())
    }

    pub(crate) fn request_update(&self, request: UpdateRequest) {
        self.surface.borrow_mut().update(request);
    }

    pub(crate) fn graph_model_changed(&mut self) {
        let stats = mapping::get_graph_stats(&self.graph.borrow());
        (self.callbacks.on_graph_model_change)(stats);
    }

    fn set_selected(&self, item: &SelectedItem, selected: bool) {
        let mut graph = self.graph.borrow_mut();
        match item {
            SelectedItem::Node(id) => {
                if let Some(node) = graph.find_node_mut(id) {
                    node.selected = selected;
                }
            }
            SelectedItem::Relationship(id) => {
                if let Some(rel) = graph.find_relationship_mut(id) {
                    rel.selected = selected;
                }
            }
        }
    }

    fn select_item(&mut self, item: SelectedItem) {
        if let Some(previous) = self.selection.take() {
            self.set_selected(&previous, false);
        }
        self.set_selected(&item, true);
        self.selection = Some(item);
        // Selection can affect rendering beyond the item itself.
        self.request_update(UpdateRequest::all());
    }

    fn deselect_item(&mut self) {
        if let Some(previous) = self.selection.take() {
            self.set_selected(&previous, false);
        }
        let item = self.canvas_item();
        (self.callbacks.on_item_selected)(item);
        self.request_update(UpdateRequest::all());
    }

    fn selection(&self) -> Option<SelectedItem> {
        self.selection.clone()
    }
}

/// The interaction coordinator.
///
/// Binds to the view surface's events, applies the selection and
/// expansion state machine, mutates the graph, requests visual refreshes
/// and keeps the host informed of hover targets, selection changes and
/// aggregate statistics. Handles are cheap to clone and share one state.
#[derive(Clone)]
pub struct GraphEventHandler {
    inner: Rc<RefCell<HandlerInner>>,
}

impl GraphEventHandler {
    #[must_use]
    pub fn new(
        graph: Rc<RefCell<Graph>>,
        surface: Rc<RefCell<dyn ViewSurface>>,
        fetcher: Rc<RefCell<dyn NeighborSource>>,
        callbacks: HostCallbacks,
    ) -> Self {
        GraphEventHandler {
            inner: Rc::new(RefCell::new(HandlerInner {
                graph,
                surface,
                fetcher,
                callbacks,
                selection: None,
            })),
        }
    }

    delegate! {
        to self.inner.borrow() {
            /// The currently selected item, if any.
            pub fn selection(&self) -> Option<SelectedItem>;
        }
    }

    /// Handle to the underlying graph model.
    #[must_use]
    pub fn graph(&self) -> Rc<RefCell<Graph>> {
        Rc::clone(&self.inner.borrow().graph)
    }

    /// Register against the surface's events exactly once, then emit one
    /// canvas notification so the host holds a valid item before any
    /// interaction occurs.
    pub fn bind_event_handlers(&self) {
        let listener: SurfaceListener = {
            let handler = self.clone();
            Box::new(move |event| handler.handle(event))
        };
        let surface = Rc::clone(&self.inner.borrow().surface);
        surface.borrow_mut().subscribe(listener);
        self.item_mouse_out();
    }

    /// Dispatch one raw surface event. Every mouse-out converges on
    /// [`Self::item_mouse_out`]: leaving an element has no richer
    /// semantics than "nothing is hovered".
    pub fn handle(&self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::NodeMouseOver(id) => self.node_mouse_over(&id),
            SurfaceEvent::MenuMouseOver(id) => self.menu_mouse_over(&id),
            SurfaceEvent::RelMouseOver(id) => self.rel_mouse_over(&id),
            SurfaceEvent::NodeMouseOut | SurfaceEvent::MenuMouseOut | SurfaceEvent::RelMouseOut => {
                self.item_mouse_out();
            }
            SurfaceEvent::RelationshipClicked(id) => self.relationship_clicked(&id),
            SurfaceEvent::CanvasClicked => self.canvas_clicked(),
            SurfaceEvent::NodeClose(id) => self.node_close(&id),
            SurfaceEvent::NodeClicked(id) => self.node_clicked(id.as_ref()),
            SurfaceEvent::NodeDblClicked(id) => self.node_dbl_clicked(&id),
            SurfaceEvent::NodeUnlock(id) => self.node_unlock(id.as_ref()),
        }
    }

    /// Make `item` the single selected entity.
    pub fn select_item(&self, item: SelectedItem) {
        self.inner.borrow_mut().select_item(item);
    }

    /// Clear any selection and rebroadcast the canvas item. Idempotent:
    /// with nothing selected this still re-arms the host's overlays.
    pub fn deselect_item(&self) {
        self.inner.borrow_mut().deselect_item();
    }

    /// Click pins the node, then toggles its selection.
    pub fn node_clicked(&self, node: Option<&NodeId>) {
        let Some(id) = node else { return };
        let mut inner = self.inner.borrow_mut();
        let (was_selected, item) = {
            let mut graph = inner.graph.borrow_mut();
            let Some(node) = graph.find_node_mut(id) else {
                return;
            };
            // Once touched, a node no longer drifts under layout forces.
            node.fixed = true;
            (node.selected, VizItem::for_node(node))
        };
        if was_selected {
            inner.deselect_item();
        } else {
            inner.select_item(SelectedItem::Node(id.clone()));
            (inner.callbacks.on_item_selected)(item);
        }
    }

    /// Unpin the node and deselect unconditionally (never re-selects).
    pub fn node_unlock(&self, node: Option<&NodeId>) {
        let Some(id) = node else { return };
        let mut inner = self.inner.borrow_mut();
        {
            let mut graph = inner.graph.borrow_mut();
            let Some(node) = graph.find_node_mut(id) else {
                return;
            };
            node.fixed = false;
        }
        inner.deselect_item();
    }

    /// Toggle semantics symmetric to node click; no pinning.
    pub fn relationship_clicked(&self, id: &RelId) {
        let mut inner = self.inner.borrow_mut();
        let (was_selected, item) = {
            let graph = inner.graph.borrow();
            let Some(rel) = graph.find_relationship(id) else {
                return;
            };
            (rel.selected, VizItem::for_relationship(rel))
        };
        if was_selected {
            inner.deselect_item();
        } else {
            inner.select_item(SelectedItem::Relationship(id.clone()));
            (inner.callbacks.on_item_selected)(item);
        }
    }

    /// A background click clears any selection.
    pub fn canvas_clicked(&self) {
        self.deselect_item();
    }

    /// Notify the hover target, unless the node owns an open context
    /// menu: the menu is the active surface while open.
    pub fn node_mouse_over(&self, id: &NodeId) {
        let mut inner = self.inner.borrow_mut();
        let item = {
            let graph = inner.graph.borrow();
            let Some(node) = graph.find_node(id) else {
                return;
            };
            if node.context_menu.is_some() {
                return;
            }
            VizItem::for_node(node)
        };
        (inner.callbacks.on_item_mouse_over)(item);
    }

    /// Precondition: the node has an attached context menu. A violation
    /// is a wiring bug between surface and coordinator, not a user-facing
    /// error, and fails loudly.
    pub fn menu_mouse_over(&self, id: &NodeId) {
        let mut inner = self.inner.borrow_mut();
        let item = {
            let graph = inner.graph.borrow();
            let Some(node) = graph.find_node(id) else {
                return;
            };
            let menu = node
                .context_menu
                .as_ref()
                .expect("menu hover dispatched for a node without a context menu");
            VizItem::for_menu(menu)
        };
        (inner.callbacks.on_item_mouse_over)(item);
    }

    pub fn rel_mouse_over(&self, id: &RelId) {
        let mut inner = self.inner.borrow_mut();
        let item = {
            let graph = inner.graph.borrow();
            let Some(rel) = graph.find_relationship(id) else {
                return;
            };
            VizItem::for_relationship(rel)
        };
        (inner.callbacks.on_item_mouse_over)(item);
    }

    /// The single convergence point for every mouse-out: notify the host
    /// with the canvas item carrying current counts.
    pub fn item_mouse_out(&self) {
        let mut inner = self.inner.borrow_mut();
        let item = inner.canvas_item();
        (inner.callbacks.on_item_mouse_over)(item);
    }

    /// Double-click toggles expansion. The `expanded` flag flips before
    /// the fetch resolves, so a second double-click during an outstanding
    /// fetch reads as collapse rather than a duplicate fetch.
    pub fn node_dbl_clicked(&self, id: &NodeId) {
        let expand = {
            let inner = self.inner.borrow();
            let mut graph = inner.graph.borrow_mut();
            let Some(node) = graph.find_node_mut(id) else {
                return;
            };
            node.expanded = !node.expanded;
            node.expanded
        };
        if expand {
            self.fetch_neighbours(id);
        } else {
            self.node_collapse(id);
        }
    }

    fn node_collapse(&self, id: &NodeId) {
        debug!(node = %id, "collapse");
        let mut inner = self.inner.borrow_mut();
        inner.graph.borrow_mut().collapse_node(id);
        inner.request_update(UpdateRequest::all());
        inner.graph_model_changed();
    }

    fn fetch_neighbours(&self, id: &NodeId) {
        let (node, known, fetcher) = {
            let inner = self.inner.borrow();
            let graph = inner.graph.borrow();
            let Some(node) = graph.find_node(id) else {
                return;
            };
            (
                node.clone(),
                graph.neighbour_ids(id),
                Rc::clone(&inner.fetcher),
            )
        };
        debug!(node = %id, known = known.len(), "expansion requested");
        let sink = ExpandSink {
            inner: Rc::clone(&self.inner),
            origin: id.clone(),
        };
        // No borrow is held here: a source resolving synchronously
        // re-enters the coordinator through the sink.
        fetcher.borrow_mut().fetch(&node, &known, sink);
    }

    /// Remove the node and everything incident to it, then deselect:
    /// closing the selected node must not leave a dangling selection.
    pub fn node_close(&self, id: &NodeId) {
        let mut inner = self.inner.borrow_mut();
        {
            let mut graph = inner.graph.borrow_mut();
            if graph.find_node(id).is_none() {
                return;
            }
            graph.remove_connected_relationships(id);
            graph.remove_node(id);
        }
        inner.deselect_item();
        inner.request_update(UpdateRequest::all());
        inner.graph_model_changed();
    }
}
