use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::{
    entity::{Node, NodeId, Relationship},
    graph::Graph,
};

pub type PetGraph<'a> = DiGraph<&'a Node, &'a Relationship>;

/// Export the store as a petgraph for the layout and analysis tooling.
#[must_use]
pub fn to_pet(graph: &Graph) -> PetGraph<'_> {
    let mut pet = DiGraph::new();

    // Maps element ids to petgraph indices.
    let mut index: HashMap<&NodeId, NodeIndex> = HashMap::new();

    for node in graph.nodes() {
        index.insert(&node.id, pet.add_node(node));
    }

    for rel in graph.relationships() {
        pet.add_edge(index[&rel.source], index[&rel.target], rel);
    }

    pet
}
