pub mod csv;
pub mod gtfs;

// Re-export commonly used items
pub use self::csv::{parse_pathways, parse_stops, ImportError};
pub use self::gtfs::{pathway_from_raw, stop_from_raw, GtfsPathway, GtfsStop};
