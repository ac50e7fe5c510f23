//! Route extraction from a solved assignment.

use super::{Assignment, RoutingModel};

/// Walks `vehicle`'s successor links from its start to its end and returns
/// the visited nodes, depot first and last.
///
/// An unused vehicle yields `[depot, depot]`.
pub fn extract_route(model: &RoutingModel<'_>, assignment: &Assignment, vehicle: usize) -> Vec<usize> {
    let manager = model.manager();
    let mut index = model.start(vehicle);
    let mut nodes = vec![manager.index_to_node(index)];
    while let Some(next) = model.next(assignment, index) {
        nodes.push(manager.index_to_node(next));
        index = next;
    }
    debug_assert!(model.is_end(index), "route of vehicle {vehicle} stops before its end");
    nodes
}
