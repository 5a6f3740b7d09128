use serde::{Deserialize, Serialize};
use crate::constants::{
    CURVATURE_STEP, NODE_SIZE, WHEELCHAIR_ACCESSIBLE_IMAGE, WHEELCHAIR_NOT_POSSIBLE_IMAGE,
};

fn default_accessible_image() -> String {
    WHEELCHAIR_ACCESSIBLE_IMAGE.to_string()
}

fn default_not_possible_image() -> String {
    WHEELCHAIR_NOT_POSSIBLE_IMAGE.to_string()
}

fn default_node_size() -> u32 {
    NODE_SIZE
}

fn default_curvature_step() -> f64 {
    CURVATURE_STEP
}

/// Display settings the projector applies to every node and edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSettings {
    #[serde(default = "default_accessible_image")]
    pub wheelchair_accessible_image: String,
    #[serde(default = "default_not_possible_image")]
    pub wheelchair_not_possible_image: String,
    #[serde(default = "default_node_size")]
    pub node_size: u32,
    #[serde(default = "default_curvature_step")]
    pub curvature_step: f64,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            wheelchair_accessible_image: default_accessible_image(),
            wheelchair_not_possible_image: default_not_possible_image(),
            node_size: default_node_size(),
            curvature_step: default_curvature_step(),
        }
    }
}

impl ProjectionSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from JSON; missing fields fall back to the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the step is not positive
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse settings: {e}"))?;

        if settings.curvature_step.is_nan() || settings.curvature_step <= 0.0 {
            return Err(format!("Invalid curvature step: {}", settings.curvature_step));
        }

        Ok(settings)
    }

    /// Serialize settings to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to serialize settings: {e}"))
    }
}
