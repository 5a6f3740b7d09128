use indexmap::IndexMap;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use serde::Serialize;
use crate::import::{pathway_from_raw, stop_from_raw, GtfsPathway, GtfsStop};
use crate::models::{GraphEdge, GraphNode, Pathway, PathwayId, Stop, StopId};
use crate::projection::GraphProjector;

mod edges;
mod nodes;

pub use edges::Edges;
pub use nodes::Nodes;

/// Projected dataset of one editing session
///
/// Nodes and edges are kept in a stable graph so indices survive removals;
/// the id maps preserve dataset order for export.
#[derive(Debug, Clone, Default)]
pub struct PathwayGraph {
    pub graph: StableDiGraph<GraphNode, GraphEdge>,
    stop_index: IndexMap<StopId, NodeIndex>,
    pathway_index: IndexMap<PathwayId, EdgeIndex>,
}

/// Payload handed to the renderer
#[derive(Debug, Serialize)]
pub struct RenderPayload<'a> {
    pub nodes: Vec<&'a GraphNode>,
    pub edges: Vec<&'a GraphEdge>,
}

impl PathwayGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Project a freshly loaded dataset. The projector session is reset first,
    /// so new-entity ids and curvature start over. Pathways referring to stops
    /// that are not part of the dataset are skipped.
    pub fn load(stops: Vec<Stop>, pathways: Vec<Pathway>, projector: &mut GraphProjector) -> Self {
        projector.reset();

        let mut graph = Self::new();
        for stop in stops {
            graph.add_stop(projector, stop);
        }

        let total = pathways.len();
        let added = pathways
            .into_iter()
            .filter_map(|pathway| graph.add_pathway(projector, pathway))
            .count();

        if added < total {
            log::warn!("Skipped {} pathways with unknown endpoints", total - added);
        }
        crate::log!("Loaded {} stops and {} pathways", graph.node_count(), added);

        graph
    }

    /// [`load`](Self::load) straight from raw GTFS records
    pub fn from_gtfs(stops: Vec<GtfsStop>, pathways: Vec<GtfsPathway>, projector: &mut GraphProjector) -> Self {
        Self::load(
            stops.into_iter().map(stop_from_raw).collect(),
            pathways.into_iter().map(pathway_from_raw).collect(),
            projector,
        )
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Stops backing the nodes, in insertion order
    #[must_use]
    pub fn stops(&self) -> Vec<Stop> {
        self.stop_index
            .values()
            .filter_map(|&index| self.graph.node_weight(index))
            .map(|node| node.stop.clone())
            .collect()
    }

    /// Pathways backing the edges, in insertion order
    #[must_use]
    pub fn pathways(&self) -> Vec<Pathway> {
        self.pathway_index
            .values()
            .filter_map(|&index| self.graph.edge_weight(index))
            .map(|edge| edge.pathway.clone())
            .collect()
    }

    #[must_use]
    pub fn render_payload(&self) -> RenderPayload<'_> {
        RenderPayload {
            nodes: self
                .stop_index
                .values()
                .filter_map(|&index| self.graph.node_weight(index))
                .collect(),
            edges: self
                .pathway_index
                .values()
                .filter_map(|&index| self.graph.edge_weight(index))
                .collect(),
        }
    }

    /// Serialize all nodes and edges for the renderer
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails
    pub fn to_render_json(&self) -> Result<String, String> {
        serde_json::to_string(&self.render_payload())
            .map_err(|e| format!("Failed to serialize graph: {e}"))
    }
}
