use serde::{Deserialize, Serialize};
use super::stop::StopId;

/// Dataset pathway identifier, with the same negative reservation as [`StopId`]
pub type PathwayId = i64;

/// How a pathway is traversed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PathwayMode {
    #[default]
    Walkway,
    Stairs,
    Travelator,
    Escalator,
    Elevator,
    FareGate,
    ExitGate,
}

impl PathwayMode {
    pub const ALL: [Self; 7] = [
        Self::Walkway,
        Self::Stairs,
        Self::Travelator,
        Self::Escalator,
        Self::Elevator,
        Self::FareGate,
        Self::ExitGate,
    ];

    /// Numeric `pathway_mode` code used in pathways.txt
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Walkway => 1,
            Self::Stairs => 2,
            Self::Travelator => 3,
            Self::Escalator => 4,
            Self::Elevator => 5,
            Self::FareGate => 6,
            Self::ExitGate => 7,
        }
    }

    /// Stroke color for edges of this mode
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Walkway => "#4A4A4A",
            Self::Stairs => "#8B572A",
            Self::Travelator => "#50E3C2",
            Self::Escalator => "#F8E71C",
            Self::Elevator => "#417505",
            Self::FareGate => "#D0021B",
            Self::ExitGate => "#9013FE",
        }
    }

    /// First line of every edge label of this mode
    #[must_use]
    pub const fn label_prefix(self) -> &'static str {
        match self {
            Self::Walkway => "Walkway",
            Self::Stairs => "Stairs",
            Self::Travelator => "Travelator",
            Self::Escalator => "Escalator",
            Self::Elevator => "Elevator",
            Self::FareGate => "Fare Gate",
            Self::ExitGate => "Exit Gate",
        }
    }
}

impl TryFrom<u8> for PathwayMode {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.code() == code)
            .ok_or_else(|| format!("Unknown pathway_mode: {code}"))
    }
}

impl From<PathwayMode> for u8 {
    fn from(mode: PathwayMode) -> Self {
        mode.code()
    }
}

/// Directed, optionally bidirectional connection between two stops
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pathway {
    pub pathway_id: PathwayId,
    pub from_stop_id: StopId,
    pub to_stop_id: StopId,
    #[serde(default)]
    pub pathway_mode: PathwayMode,
    #[serde(default)]
    pub is_bidirectional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Seconds needed to walk or ride the pathway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traversal_time: Option<u32>,
    /// Negative when the stairs go down from `from_stop_id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stair_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_slope: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signposted_as: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reversed_signposted_as: Option<String>,
}

impl Pathway {
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.pathway_id < 0
    }

    /// True when the pathway joins the same two stops, in either direction
    #[must_use]
    pub fn connects(&self, a: StopId, b: StopId) -> bool {
        (self.from_stop_id == a && self.to_stop_id == b) || (self.from_stop_id == b && self.to_stop_id == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pathway_mode_codes_round_trip() {
        for mode in PathwayMode::ALL {
            assert_eq!(PathwayMode::try_from(mode.code()), Ok(mode));
        }
        assert!(PathwayMode::try_from(0).is_err());
        assert!(PathwayMode::try_from(8).is_err());
    }

    #[test]
    fn test_pathway_mode_labels() {
        assert_eq!(PathwayMode::Travelator.label_prefix(), "Travelator");
        assert_eq!(PathwayMode::FareGate.label_prefix(), "Fare Gate");
        assert_eq!(PathwayMode::ExitGate.label_prefix(), "Exit Gate");
    }

    #[test]
    fn test_connects_ignores_direction() {
        let pathway = Pathway {
            pathway_id: 1,
            from_stop_id: 5,
            to_stop_id: 7,
            ..Pathway::default()
        };
        assert!(pathway.connects(5, 7));
        assert!(pathway.connects(7, 5));
        assert!(!pathway.connects(5, 8));
    }

    #[test]
    fn test_deserialize_rejects_unknown_mode() {
        let result: Result<Pathway, _> = serde_json::from_str(
            r#"{"pathwayId": 1, "fromStopId": 1, "toStopId": 2, "pathwayMode": 9}"#,
        );
        assert!(result.is_err());
    }
}
