//! GTFS stop and pathway records
//!
//! Raw records use the snake_case column names of stops.txt and pathways.txt.
//! Converting them to the internal [`Stop`]/[`Pathway`] shape only renames
//! fields; values are carried over untouched.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::models::{
    LocationType, Pathway, PathwayId, PathwayMode, Stop, StopId, WheelchairBoarding,
};

/// Raw stops.txt row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GtfsStop {
    pub stop_id: StopId,
    #[serde(default)]
    pub stop_name: String,
    #[serde(default, deserialize_with = "empty_as_default")]
    pub location_type: LocationType,
    #[serde(default, deserialize_with = "empty_as_default")]
    pub wheelchair_boarding: WheelchairBoarding,
    #[serde(default)]
    pub level_id: Option<String>,
    #[serde(default)]
    pub platform_code: Option<String>,
    #[serde(default)]
    pub signposted_as: Option<String>,
    #[serde(default)]
    pub parent_station: Option<StopId>,
    #[serde(default)]
    pub stop_lat: Option<f64>,
    #[serde(default)]
    pub stop_lon: Option<f64>,
}

/// Raw pathways.txt row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GtfsPathway {
    pub pathway_id: PathwayId,
    pub from_stop_id: StopId,
    pub to_stop_id: StopId,
    pub pathway_mode: PathwayMode,
    #[serde(with = "gtfs_bool")]
    pub is_bidirectional: bool,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub traversal_time: Option<u32>,
    #[serde(default)]
    pub stair_count: Option<i32>,
    #[serde(default)]
    pub max_slope: Option<f64>,
    #[serde(default)]
    pub min_width: Option<f64>,
    #[serde(default)]
    pub signposted_as: Option<String>,
    #[serde(default)]
    pub reversed_signposted_as: Option<String>,
}

// An empty cell means the column default (e.g. `location_type` 0)
fn empty_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// GTFS booleans are the integers 0 and 1
mod gtfs_bool {
    use super::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(serde::de::Error::custom(format!("Expected 0 or 1, got {other}"))),
        }
    }
}

#[must_use]
pub fn stop_from_raw(raw: GtfsStop) -> Stop {
    Stop {
        stop_id: raw.stop_id,
        stop_name: raw.stop_name,
        location_type: raw.location_type,
        wheelchair_boarding: raw.wheelchair_boarding,
        level_id: raw.level_id,
        platform_code: raw.platform_code,
        signposted_as: raw.signposted_as,
        parent_station: raw.parent_station,
        stop_lat: raw.stop_lat,
        stop_lon: raw.stop_lon,
    }
}

#[must_use]
pub fn pathway_from_raw(raw: GtfsPathway) -> Pathway {
    Pathway {
        pathway_id: raw.pathway_id,
        from_stop_id: raw.from_stop_id,
        to_stop_id: raw.to_stop_id,
        pathway_mode: raw.pathway_mode,
        is_bidirectional: raw.is_bidirectional,
        length: raw.length,
        traversal_time: raw.traversal_time,
        stair_count: raw.stair_count,
        max_slope: raw.max_slope,
        min_width: raw.min_width,
        signposted_as: raw.signposted_as,
        reversed_signposted_as: raw.reversed_signposted_as,
    }
}

impl From<GtfsStop> for Stop {
    fn from(raw: GtfsStop) -> Self {
        stop_from_raw(raw)
    }
}

impl From<GtfsPathway> for Pathway {
    fn from(raw: GtfsPathway) -> Self {
        pathway_from_raw(raw)
    }
}

impl From<Stop> for GtfsStop {
    fn from(stop: Stop) -> Self {
        Self {
            stop_id: stop.stop_id,
            stop_name: stop.stop_name,
            location_type: stop.location_type,
            wheelchair_boarding: stop.wheelchair_boarding,
            level_id: stop.level_id,
            platform_code: stop.platform_code,
            signposted_as: stop.signposted_as,
            parent_station: stop.parent_station,
            stop_lat: stop.stop_lat,
            stop_lon: stop.stop_lon,
        }
    }
}

impl From<Pathway> for GtfsPathway {
    fn from(pathway: Pathway) -> Self {
        Self {
            pathway_id: pathway.pathway_id,
            from_stop_id: pathway.from_stop_id,
            to_stop_id: pathway.to_stop_id,
            pathway_mode: pathway.pathway_mode,
            is_bidirectional: pathway.is_bidirectional,
            length: pathway.length,
            traversal_time: pathway.traversal_time,
            stair_count: pathway.stair_count,
            max_slope: pathway.max_slope,
            min_width: pathway.min_width,
            signposted_as: pathway.signposted_as,
            reversed_signposted_as: pathway.reversed_signposted_as,
        }
    }
}
