mod graph_edge;
mod graph_node;
mod pathway;
mod settings;
mod stop;

pub use graph_edge::{Arrows, EdgeColor, Font, FontAlign, GraphEdge, Smooth};
pub use graph_node::GraphNode;
pub use pathway::{Pathway, PathwayId, PathwayMode};
pub use settings::ProjectionSettings;
pub use stop::{LocationType, Stop, StopId, WheelchairBoarding};
