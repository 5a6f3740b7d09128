use serde::{Deserialize, Serialize};

/// Dataset stop identifier. Negative values belong to stops created in the
/// current editing session that have not been saved yet.
pub type StopId = i64;

/// Role of a stop inside a station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LocationType {
    #[default]
    Platform,
    Station,
    EntranceExit,
    GenericNode,
    BoardingArea,
    Pad,
}

impl LocationType {
    pub const ALL: [Self; 6] = [
        Self::Platform,
        Self::Station,
        Self::EntranceExit,
        Self::GenericNode,
        Self::BoardingArea,
        Self::Pad,
    ];

    /// Numeric `location_type` code used in stops.txt
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Platform => 0,
            Self::Station => 1,
            Self::EntranceExit => 2,
            Self::GenericNode => 3,
            Self::BoardingArea => 4,
            Self::Pad => 5,
        }
    }

    /// Fill color for nodes of this type
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Platform => "#4A90D9",
            Self::Station => "#D0021B",
            Self::EntranceExit => "#7ED321",
            Self::GenericNode => "#9B9B9B",
            Self::BoardingArea => "#F5A623",
            Self::Pad => "#BD10E0",
        }
    }

    /// Prefix that opens every node label of this type
    #[must_use]
    pub const fn label_prefix(self) -> &'static str {
        match self {
            Self::Platform => "Platform",
            Self::Station => "Station",
            Self::EntranceExit => "Entrance/Exit",
            Self::GenericNode => "Generic Node",
            Self::BoardingArea => "Boarding Area",
            Self::Pad => "Pad",
        }
    }

    /// Whether stops of this type carry their own wheelchair boarding information.
    /// Boarding areas and pads inherit it, so any stored value is discarded.
    #[must_use]
    pub const fn carries_wheelchair_info(self) -> bool {
        !matches!(self, Self::BoardingArea | Self::Pad)
    }
}

impl TryFrom<u8> for LocationType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|location_type| location_type.code() == code)
            .ok_or_else(|| format!("Unknown location_type: {code}"))
    }
}

impl From<LocationType> for u8 {
    fn from(location_type: LocationType) -> Self {
        location_type.code()
    }
}

/// Step-free boarding status of a stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WheelchairBoarding {
    #[default]
    NoInfo,
    Accessible,
    NotAccessible,
}

impl WheelchairBoarding {
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::NoInfo => 0,
            Self::Accessible => 1,
            Self::NotAccessible => 2,
        }
    }
}

impl TryFrom<u8> for WheelchairBoarding {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::NoInfo),
            1 => Ok(Self::Accessible),
            2 => Ok(Self::NotAccessible),
            _ => Err(format!("Unknown wheelchair_boarding: {code}")),
        }
    }
}

impl From<WheelchairBoarding> for u8 {
    fn from(boarding: WheelchairBoarding) -> Self {
        boarding.code()
    }
}

/// A station, platform, entrance or any other point of the accessibility network
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub stop_id: StopId,
    #[serde(default)]
    pub stop_name: String,
    #[serde(default)]
    pub location_type: LocationType,
    #[serde(default)]
    pub wheelchair_boarding: WheelchairBoarding,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signposted_as: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_station: Option<StopId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_lon: Option<f64>,
}

impl Stop {
    /// True for stops created during the session and not persisted yet
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.stop_id < 0
    }

    /// Canvas position derived from the stop coordinates (x = longitude, y = latitude)
    #[must_use]
    pub fn canvas_position(&self) -> (f64, f64) {
        (self.stop_lon.unwrap_or(0.0), self.stop_lat.unwrap_or(0.0))
    }

    /// Copy of this stop with boarding information cleared when the
    /// location type does not carry its own
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if !self.location_type.carries_wheelchair_info() {
            self.wheelchair_boarding = WheelchairBoarding::NoInfo;
        }
        self
    }
}
