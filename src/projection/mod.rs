//! Stop/pathway to node/edge projection
//!
//! [`GraphProjector`] is the per-session context: it holds the display
//! settings, the two negative-id allocators and the curvature registry.
//! Everything else the projector produces is re-derivable from the stop or
//! pathway a node or edge refers back to.

mod curvature;
mod id;
mod labels;

pub use curvature::CurvatureRegistry;
pub use id::NewIdAllocator;
pub use labels::{edge_label, node_image, node_label};

use crate::constants::{EDGE_SMOOTH_TYPE, NODE_SHAPE};
use crate::models::{
    Arrows, EdgeColor, Font, FontAlign, GraphEdge, GraphNode, LocationType, Pathway, PathwayMode,
    ProjectionSettings, Smooth, Stop, StopId, WheelchairBoarding,
};

/// Mode given to pathways drawn by hand in the editor
pub const NEW_PATHWAY_MODE: PathwayMode = PathwayMode::Escalator;

#[derive(Debug, Clone, Default)]
pub struct GraphProjector {
    settings: ProjectionSettings,
    stop_ids: NewIdAllocator,
    pathway_ids: NewIdAllocator,
    curvature: CurvatureRegistry,
}

impl GraphProjector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: ProjectionSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ProjectionSettings {
        &self.settings
    }

    #[must_use]
    pub fn curvature(&self) -> &CurvatureRegistry {
        &self.curvature
    }

    /// Forget all session state; called whenever a new dataset is loaded
    pub fn reset(&mut self) {
        self.stop_ids.reset();
        self.pathway_ids.reset();
        self.curvature.clear();
        crate::log!("Projector session reset");
    }

    /// Build a node for the stop, placed at the stop's coordinates
    #[must_use]
    pub fn stop_to_node(&self, stop: &Stop) -> GraphNode {
        let (x, y) = stop.canvas_position();
        self.stop_to_node_at(stop, x, y)
    }

    /// Build a node for the stop at an externally computed layout position
    #[must_use]
    pub fn stop_to_node_at(&self, stop: &Stop, x: f64, y: f64) -> GraphNode {
        GraphNode {
            id: stop.stop_id,
            label: node_label(stop),
            color: stop.location_type.color().to_string(),
            x,
            y,
            image: node_image(stop, &self.settings),
            shape: NODE_SHAPE.to_string(),
            size: self.settings.node_size,
            stop: stop.clone(),
        }
    }

    /// Re-derive the appearance of an existing node after its stop was edited.
    /// Id and position are kept. Boarding areas and pads lose any boarding
    /// status before the icon is chosen.
    #[must_use]
    pub fn attach_stop_to_node(&self, stop: Stop, node: &GraphNode) -> GraphNode {
        let stop = stop.normalized();
        GraphNode {
            id: node.id,
            label: node_label(&stop),
            color: stop.location_type.color().to_string(),
            x: node.x,
            y: node.y,
            image: node_image(&stop, &self.settings),
            shape: NODE_SHAPE.to_string(),
            size: self.settings.node_size,
            stop,
        }
    }

    /// Turn a node the user dropped on the canvas into an unlabeled generic
    /// node backed by a fresh, unsaved stop
    pub fn prepare_new_node(&mut self, x: f64, y: f64, parent_station: StopId) -> GraphNode {
        let stop_id = self.stop_ids.allocate();
        crate::log!("New generic node {} under station {}", stop_id, parent_station);

        let stop = Stop {
            stop_id,
            stop_name: String::new(),
            location_type: LocationType::GenericNode,
            wheelchair_boarding: WheelchairBoarding::NoInfo,
            level_id: None,
            platform_code: Some(String::new()),
            signposted_as: Some(String::new()),
            parent_station: Some(parent_station),
            stop_lat: Some(y),
            stop_lon: Some(x),
        };

        GraphNode {
            id: stop_id,
            label: String::new(),
            color: LocationType::GenericNode.color().to_string(),
            x,
            y,
            image: None,
            shape: NODE_SHAPE.to_string(),
            size: self.settings.node_size,
            stop,
        }
    }

    /// Build an edge for the pathway; the pair's curvature level is consumed
    pub fn pathway_to_edge(&mut self, pathway: &Pathway) -> GraphEdge {
        GraphEdge {
            id: pathway.pathway_id,
            from: pathway.from_stop_id,
            to: pathway.to_stop_id,
            color: EdgeColor::uniform(pathway.pathway_mode.color()),
            arrows: Arrows {
                to: true,
                from: pathway.is_bidirectional,
            },
            smooth: self.edge_smooth_variant(pathway.from_stop_id, pathway.to_stop_id),
            font: Font { align: FontAlign::Center },
            label: edge_label(pathway),
            pathway: pathway.clone(),
        }
    }

    /// Re-derive color, arrows and label of an existing edge after its
    /// pathway was edited. Curvature stays as assigned at creation.
    #[must_use]
    pub fn attach_pathway_to_edge(&self, pathway: Pathway, edge: &GraphEdge) -> GraphEdge {
        GraphEdge {
            color: EdgeColor::uniform(pathway.pathway_mode.color()),
            arrows: Arrows {
                to: edge.arrows.to,
                from: pathway.is_bidirectional,
            },
            label: edge_label(&pathway),
            pathway,
            ..edge.clone()
        }
    }

    /// Turn an edge the user drew between two stops into a bidirectional
    /// escalator backed by a fresh, unsaved pathway
    pub fn prepare_new_edge(&mut self, from: StopId, to: StopId) -> GraphEdge {
        let pathway_id = self.pathway_ids.allocate();
        crate::log!("New pathway {} from {} to {}", pathway_id, from, to);

        let pathway = Pathway {
            pathway_id,
            from_stop_id: from,
            to_stop_id: to,
            pathway_mode: NEW_PATHWAY_MODE,
            is_bidirectional: true,
            length: None,
            traversal_time: None,
            stair_count: None,
            max_slope: None,
            min_width: None,
            signposted_as: Some(String::new()),
            reversed_signposted_as: Some(String::new()),
        };

        GraphEdge {
            id: pathway_id,
            from,
            to,
            color: EdgeColor::uniform(NEW_PATHWAY_MODE.color()),
            arrows: Arrows { to: true, from: true },
            smooth: self.edge_smooth_variant(from, to),
            font: Font { align: FontAlign::Center },
            label: String::new(),
            pathway,
        }
    }

    /// Curvature for one more edge between `from` and `to`
    pub fn edge_smooth_variant(&mut self, from: StopId, to: StopId) -> Smooth {
        let roundness = self.curvature.next_roundness(from, to, self.settings.curvature_step);
        crate::log!("Edge {} -> {} roundness {:.1}", from, to, roundness);
        Smooth {
            kind: EDGE_SMOOTH_TYPE.to_string(),
            roundness,
        }
    }
}
