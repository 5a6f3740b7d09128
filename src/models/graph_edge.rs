use serde::{Deserialize, Serialize};
use super::pathway::{Pathway, PathwayId};
use super::stop::StopId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeColor {
    pub color: String,
    pub highlight: String,
}

impl EdgeColor {
    /// Same color for the normal and the highlighted state
    #[must_use]
    pub fn uniform(color: &str) -> Self {
        Self {
            color: color.to_string(),
            highlight: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrows {
    pub to: bool,
    pub from: bool,
}

/// Curvature descriptor; `roundness` fans out parallel edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Smooth {
    #[serde(rename = "type")]
    pub kind: String,
    pub roundness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontAlign {
    #[default]
    Center,
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Font {
    pub align: FontAlign,
}

/// Renderer-facing projection of a [`Pathway`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: PathwayId,
    pub from: StopId,
    pub to: StopId,
    pub color: EdgeColor,
    pub arrows: Arrows,
    pub smooth: Smooth,
    pub font: Font,
    pub label: String,
    pub pathway: Pathway,
}

impl GraphEdge {
    #[must_use]
    pub fn endpoints(&self) -> (StopId, StopId) {
        (self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_for_renderer() {
        let edge = GraphEdge {
            id: 4,
            from: 5,
            to: 7,
            color: EdgeColor::uniform("#F8E71C"),
            arrows: Arrows { to: true, from: false },
            smooth: Smooth {
                kind: "curvedCW".to_string(),
                roundness: 0.2,
            },
            font: Font::default(),
            label: "Escalator".to_string(),
            pathway: Pathway {
                pathway_id: 4,
                from_stop_id: 5,
                to_stop_id: 7,
                ..Pathway::default()
            },
        };

        let json = serde_json::to_value(&edge).expect("serialize");
        assert_eq!(json["smooth"]["type"], "curvedCW");
        assert_eq!(json["font"]["align"], "center");
        assert_eq!(json["color"]["highlight"], "#F8E71C");
        assert_eq!(json["pathway"]["fromStopId"], 5);
        assert_eq!(edge.endpoints(), (5, 7));
    }
}
