pub mod entity;
pub mod graph;
pub mod layout;
pub mod mapping;
pub mod stats;

pub use entity::{ContextMenu, Node, NodeId, PropertyMap, RelId, Relationship};
pub use graph::{Graph, GraphError};
pub use stats::GraphStats;
