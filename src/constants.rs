/// Shape hint handed to the renderer for every stop node
pub const NODE_SHAPE: &str = "circularImage";

/// Rendered node size in canvas units
pub const NODE_SIZE: u32 = 12;

/// Image shown on stops with step-free boarding
pub const WHEELCHAIR_ACCESSIBLE_IMAGE: &str = "images/wheelchair-accessible.png";

/// Image shown on stops that cannot be boarded in a wheelchair
pub const WHEELCHAIR_NOT_POSSIBLE_IMAGE: &str = "images/wheelchair-not-possible.png";

/// Roundness added for each further pathway drawn between the same two stops
pub const CURVATURE_STEP: f64 = 0.2;

/// Smooth type requested from the renderer for pathway edges
pub const EDGE_SMOOTH_TYPE: &str = "curvedCW";

/// First id handed out to entities created during an editing session.
/// Dataset ids are non-negative, so counting down from here never collides.
pub const FIRST_NEW_ID: i64 = -1;
