#![allow(clippy::implicit_hasher)]

pub mod logging;
pub mod models;
pub mod import;
pub mod projection;
pub mod pathway_graph;
pub mod constants;

pub use pathway_graph::{Edges, Nodes, PathwayGraph};
pub use projection::GraphProjector;
