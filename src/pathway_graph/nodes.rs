use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use super::PathwayGraph;
use crate::models::{GraphNode, Stop, StopId};
use crate::projection::GraphProjector;

/// Extension trait for stop/node operations on `PathwayGraph`
pub trait Nodes {
    /// Project a stop into the graph. A stop whose id is already present
    /// replaces the old one on the existing node.
    fn add_stop(&mut self, projector: &GraphProjector, stop: Stop) -> NodeIndex;

    /// Add a generic node the user placed at (`x`, `y`) inside `parent_station`
    fn add_new_node(&mut self, projector: &mut GraphProjector, x: f64, y: f64, parent_station: StopId) -> NodeIndex;

    /// Apply an edited stop to its node, keeping the node's position
    fn update_stop(&mut self, projector: &GraphProjector, stop: Stop) -> Option<&GraphNode>;

    /// Move a node, e.g. after the layout engine placed it
    fn set_node_position(&mut self, id: StopId, x: f64, y: f64) -> bool;

    fn get_node(&self, id: StopId) -> Option<&GraphNode>;

    fn get_node_index(&self, id: StopId) -> Option<NodeIndex>;

    /// Remove a stop together with every pathway touching it
    fn remove_stop(&mut self, id: StopId) -> Option<Stop>;
}

impl Nodes for PathwayGraph {
    fn add_stop(&mut self, projector: &GraphProjector, stop: Stop) -> NodeIndex {
        if let Some(&index) = self.stop_index.get(&stop.stop_id) {
            if let Some(node) = self.graph.node_weight_mut(index) {
                *node = projector.attach_stop_to_node(stop, node);
            }
            return index;
        }

        let id = stop.stop_id;
        let index = self.graph.add_node(projector.stop_to_node(&stop));
        self.stop_index.insert(id, index);
        index
    }

    fn add_new_node(&mut self, projector: &mut GraphProjector, x: f64, y: f64, parent_station: StopId) -> NodeIndex {
        let node = projector.prepare_new_node(x, y, parent_station);
        let id = node.id;
        let index = self.graph.add_node(node);
        self.stop_index.insert(id, index);
        index
    }

    fn update_stop(&mut self, projector: &GraphProjector, stop: Stop) -> Option<&GraphNode> {
        let index = self.get_node_index(stop.stop_id)?;
        let node = self.graph.node_weight_mut(index)?;
        *node = projector.attach_stop_to_node(stop, node);
        Some(node)
    }

    fn set_node_position(&mut self, id: StopId, x: f64, y: f64) -> bool {
        let Some(index) = self.get_node_index(id) else {
            return false;
        };
        let Some(node) = self.graph.node_weight_mut(index) else {
            return false;
        };
        node.set_position(x, y);
        true
    }

    fn get_node(&self, id: StopId) -> Option<&GraphNode> {
        self.graph.node_weight(self.get_node_index(id)?)
    }

    fn get_node_index(&self, id: StopId) -> Option<NodeIndex> {
        self.stop_index.get(&id).copied()
    }

    fn remove_stop(&mut self, id: StopId) -> Option<Stop> {
        let index = self.stop_index.shift_remove(&id)?;

        // Edges go with the node; drop them from the id map first
        let touching: Vec<_> = self
            .graph
            .edges_directed(index, Direction::Outgoing)
            .chain(self.graph.edges_directed(index, Direction::Incoming))
            .map(|edge| edge.weight().id)
            .collect();
        for pathway_id in touching {
            self.pathway_index.shift_remove(&pathway_id);
        }

        self.graph.remove_node(index).map(|node| node.stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LocationType, PathwayMode, WheelchairBoarding};
    use crate::pathway_graph::tests::{init_logging, pathway, stop};
    use crate::pathway_graph::Edges;

    #[test]
    fn test_add_stop() {
        init_logging();
        let projector = GraphProjector::new();
        let mut graph = PathwayGraph::new();
        let index = graph.add_stop(&projector, stop(5, LocationType::Platform));

        assert_eq!(graph.get_node_index(5), Some(index));
        let node = graph.get_node(5).expect("node");
        assert_eq!(node.label, "Platform \"Stop 5\"");
        assert_eq!(node.position(), (2.0, 1.0));
    }

    #[test]
    fn test_add_existing_stop_replaces_in_place() {
        init_logging();
        let projector = GraphProjector::new();
        let mut graph = PathwayGraph::new();
        let first = graph.add_stop(&projector, stop(5, LocationType::Platform));
        graph.set_node_position(5, 50.0, 60.0);
        let second = graph.add_stop(&projector, stop(5, LocationType::Station));

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
        let node = graph.get_node(5).expect("node");
        assert_eq!(node.stop.location_type, LocationType::Station);
        assert_eq!(node.position(), (50.0, 60.0));
    }

    #[test]
    fn test_add_new_node() {
        init_logging();
        let mut projector = GraphProjector::new();
        let mut graph = PathwayGraph::new();
        graph.add_stop(&projector, stop(1, LocationType::Station));

        graph.add_new_node(&mut projector, 3.0, 4.0, 1);
        graph.add_new_node(&mut projector, 5.0, 6.0, 1);

        let first = graph.get_node(-1).expect("first new node");
        assert_eq!(first.stop.parent_station, Some(1));
        assert_eq!(first.label, "");
        assert_eq!(graph.get_node(-2).expect("second new node").position(), (5.0, 6.0));
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_update_stop() {
        init_logging();
        let projector = GraphProjector::new();
        let mut graph = PathwayGraph::new();
        graph.add_stop(&projector, stop(4, LocationType::Platform));

        let edited = Stop {
            location_type: LocationType::BoardingArea,
            wheelchair_boarding: WheelchairBoarding::Accessible,
            ..stop(4, LocationType::Platform)
        };
        let node = graph.update_stop(&projector, edited).expect("updated");
        assert_eq!(node.stop.wheelchair_boarding, WheelchairBoarding::NoInfo);
        assert_eq!(node.image, None);

        assert!(graph.update_stop(&projector, stop(40, LocationType::Platform)).is_none());
    }

    #[test]
    fn test_set_node_position_unknown_stop() {
        let mut graph = PathwayGraph::new();
        assert!(!graph.set_node_position(1, 0.0, 0.0));
    }

    #[test]
    fn test_remove_stop_drops_touching_pathways() {
        init_logging();
        let mut projector = GraphProjector::new();
        let mut graph = PathwayGraph::load(
            vec![stop(1, LocationType::Platform), stop(2, LocationType::Platform), stop(3, LocationType::Platform)],
            vec![
                pathway(10, 1, 2, PathwayMode::Walkway),
                pathway(11, 2, 3, PathwayMode::Walkway),
                pathway(12, 3, 1, PathwayMode::Walkway),
            ],
            &mut projector,
        );

        let removed = graph.remove_stop(2).expect("removed");
        assert_eq!(removed.stop_id, 2);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.get_edge(10).is_none());
        assert!(graph.get_edge(11).is_none());
        assert!(graph.get_edge(12).is_some());
        assert_eq!(graph.pathways().len(), 1);
        assert!(graph.remove_stop(2).is_none());
    }
}
