#![warn(clippy::all, rust_2018_idioms)]

pub mod event;
pub mod fetch;
pub mod handler;
pub mod item;
pub mod surface;

pub use event::SurfaceEvent;
pub use fetch::{ExpandSink, NeighborSource};
pub use handler::{GraphEventHandler, HostCallbacks};
pub use item::{SelectedItem, VizItem};
pub use surface::{SurfaceListener, UpdateRequest, ViewSurface};
