use serde::{Deserialize, Serialize};
use super::stop::{Stop, StopId};

/// Renderer-facing projection of a [`Stop`]
///
/// The embedded `stop` is the only link back to the dataset; the node never
/// owns the stop's lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: StopId,
    pub label: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub shape: String,
    pub size: u32,
    pub stop: Stop,
}

impl GraphNode {
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Label, color and icon: everything derived from the stop
    #[must_use]
    pub fn appearance(&self) -> (&str, &str, Option<&str>) {
        (&self.label, &self.color, self.image.as_deref())
    }
}
