use petgraph::stable_graph::EdgeIndex;
use super::{Nodes, PathwayGraph};
use crate::models::{GraphEdge, Pathway, PathwayId, StopId};
use crate::projection::GraphProjector;

/// Extension trait for pathway/edge operations on `PathwayGraph`
pub trait Edges {
    /// Project a pathway into the graph. Returns `None` when either endpoint
    /// is not in the graph. A pathway whose id is already present is applied
    /// to the existing edge instead.
    fn add_pathway(&mut self, projector: &mut GraphProjector, pathway: Pathway) -> Option<EdgeIndex>;

    /// Add an edge the user drew from `from` to `to`
    fn add_new_edge(&mut self, projector: &mut GraphProjector, from: StopId, to: StopId) -> Option<EdgeIndex>;

    /// Apply an edited pathway to its edge. The endpoints of an edge are
    /// fixed, so an edit that moves them is rejected.
    fn update_pathway(&mut self, projector: &GraphProjector, pathway: Pathway) -> Option<&GraphEdge>;

    fn get_edge(&self, id: PathwayId) -> Option<&GraphEdge>;

    fn get_edge_index(&self, id: PathwayId) -> Option<EdgeIndex>;

    /// All edges joining `a` and `b`, in either direction
    fn edges_between(&self, a: StopId, b: StopId) -> Vec<&GraphEdge>;

    fn remove_pathway(&mut self, id: PathwayId) -> Option<Pathway>;
}

impl Edges for PathwayGraph {
    fn add_pathway(&mut self, projector: &mut GraphProjector, pathway: Pathway) -> Option<EdgeIndex> {
        if let Some(index) = self.get_edge_index(pathway.pathway_id) {
            self.update_pathway(projector, pathway)?;
            return Some(index);
        }

        let (Some(from), Some(to)) = (
            self.get_node_index(pathway.from_stop_id),
            self.get_node_index(pathway.to_stop_id),
        ) else {
            log::warn!(
                "Pathway {} refers to unknown stop {} or {}",
                pathway.pathway_id,
                pathway.from_stop_id,
                pathway.to_stop_id
            );
            return None;
        };

        let id = pathway.pathway_id;
        let index = self.graph.add_edge(from, to, projector.pathway_to_edge(&pathway));
        self.pathway_index.insert(id, index);
        Some(index)
    }

    fn add_new_edge(&mut self, projector: &mut GraphProjector, from: StopId, to: StopId) -> Option<EdgeIndex> {
        let from_index = self.get_node_index(from)?;
        let to_index = self.get_node_index(to)?;

        let edge = projector.prepare_new_edge(from, to);
        let id = edge.id;
        let index = self.graph.add_edge(from_index, to_index, edge);
        self.pathway_index.insert(id, index);
        Some(index)
    }

    fn update_pathway(&mut self, projector: &GraphProjector, pathway: Pathway) -> Option<&GraphEdge> {
        let index = self.get_edge_index(pathway.pathway_id)?;
        let edge = self.graph.edge_weight_mut(index)?;

        if edge.endpoints() != (pathway.from_stop_id, pathway.to_stop_id) {
            log::warn!(
                "Pathway {} cannot move from {:?} to ({}, {})",
                pathway.pathway_id,
                edge.endpoints(),
                pathway.from_stop_id,
                pathway.to_stop_id
            );
            return None;
        }

        *edge = projector.attach_pathway_to_edge(pathway, edge);
        Some(edge)
    }

    fn get_edge(&self, id: PathwayId) -> Option<&GraphEdge> {
        self.graph.edge_weight(self.get_edge_index(id)?)
    }

    fn get_edge_index(&self, id: PathwayId) -> Option<EdgeIndex> {
        self.pathway_index.get(&id).copied()
    }

    fn edges_between(&self, a: StopId, b: StopId) -> Vec<&GraphEdge> {
        self.pathway_index
            .values()
            .filter_map(|&index| self.graph.edge_weight(index))
            .filter(|edge| edge.pathway.connects(a, b))
            .collect()
    }

    fn remove_pathway(&mut self, id: PathwayId) -> Option<Pathway> {
        let index = self.pathway_index.shift_remove(&id)?;
        self.graph.remove_edge(index).map(|edge| edge.pathway)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LocationType, PathwayMode};
    use crate::pathway_graph::tests::{init_logging, pathway, stop};

    fn two_stops(projector: &mut GraphProjector) -> PathwayGraph {
        PathwayGraph::load(
            vec![stop(5, LocationType::Platform), stop(7, LocationType::EntranceExit)],
            Vec::new(),
            projector,
        )
    }

    #[test]
    fn test_add_pathway() {
        init_logging();
        let mut projector = GraphProjector::new();
        let mut graph = two_stops(&mut projector);

        let index = graph.add_pathway(&mut projector, pathway(10, 5, 7, PathwayMode::Stairs));
        assert!(index.is_some());
        assert_eq!(graph.get_edge_index(10), index);
        assert_eq!(graph.get_edge(10).expect("edge").label, "Stairs");
    }

    #[test]
    fn test_add_pathway_with_unknown_endpoint() {
        init_logging();
        let mut projector = GraphProjector::new();
        let mut graph = two_stops(&mut projector);

        assert!(graph.add_pathway(&mut projector, pathway(10, 5, 8, PathwayMode::Stairs)).is_none());
        assert_eq!(graph.edge_count(), 0);
        // a skipped pathway does not use up a curvature level
        assert_eq!(projector.curvature().level_of(5, 8), None);
    }

    #[test]
    fn test_add_existing_pathway_keeps_curvature() {
        init_logging();
        let mut projector = GraphProjector::new();
        let mut graph = two_stops(&mut projector);

        graph.add_pathway(&mut projector, pathway(10, 5, 7, PathwayMode::Stairs));
        graph.add_pathway(&mut projector, pathway(11, 7, 5, PathwayMode::Elevator));
        graph.add_pathway(&mut projector, pathway(11, 7, 5, PathwayMode::Escalator));

        assert_eq!(graph.edge_count(), 2);
        let edge = graph.get_edge(11).expect("edge");
        assert_eq!(edge.label, "Escalator");
        assert!((edge.smooth.roundness - 0.2).abs() < 1e-9);
        assert_eq!(projector.curvature().level_of(5, 7), Some(1));
    }

    #[test]
    fn test_add_new_edges_fan_out() {
        init_logging();
        let mut projector = GraphProjector::new();
        let mut graph = two_stops(&mut projector);

        graph.add_new_edge(&mut projector, 5, 7).expect("first");
        graph.add_new_edge(&mut projector, 7, 5).expect("second");
        assert!(graph.add_new_edge(&mut projector, 5, 99).is_none());

        let first = graph.get_edge(-1).expect("first edge");
        let second = graph.get_edge(-2).expect("second edge");
        assert_eq!(first.smooth.roundness, 0.0);
        assert!((second.smooth.roundness - 0.2).abs() < 1e-9);
        assert_eq!(first.pathway.pathway_mode, PathwayMode::Escalator);
        assert_eq!(graph.edges_between(7, 5).len(), 2);
    }

    #[test]
    fn test_update_pathway() {
        init_logging();
        let mut projector = GraphProjector::new();
        let mut graph = two_stops(&mut projector);
        graph.add_pathway(&mut projector, pathway(10, 5, 7, PathwayMode::Walkway));

        let edited = Pathway {
            traversal_time: Some(45),
            is_bidirectional: true,
            ..pathway(10, 5, 7, PathwayMode::Travelator)
        };
        let edge = graph.update_pathway(&projector, edited).expect("updated");
        assert_eq!(edge.label, "Travelator\n45 s");
        assert!(edge.arrows.from);

        let moved = pathway(10, 7, 5, PathwayMode::Travelator);
        assert!(graph.update_pathway(&projector, moved).is_none());
        assert_eq!(graph.get_edge(10).expect("edge").from, 5);
    }

    #[test]
    fn test_remove_pathway() {
        init_logging();
        let mut projector = GraphProjector::new();
        let mut graph = two_stops(&mut projector);
        graph.add_pathway(&mut projector, pathway(10, 5, 7, PathwayMode::Walkway));

        let removed = graph.remove_pathway(10).expect("removed");
        assert_eq!(removed.pathway_id, 10);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.pathways().is_empty());
        assert!(graph.remove_pathway(10).is_none());
    }
}
