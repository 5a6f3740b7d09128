use std::fmt::Write;
use crate::models::{LocationType, Pathway, ProjectionSettings, Stop, WheelchairBoarding};

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Multi-line node label built from the stop fields
///
/// Platforms list their code and signage, entrances their number.
#[must_use]
pub fn node_label(stop: &Stop) -> String {
    let prefix = stop.location_type.label_prefix();
    let mut label = if stop.stop_name.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix} \"{}\"", stop.stop_name)
    };

    match stop.location_type {
        LocationType::Platform => {
            if let Some(code) = non_empty(stop.platform_code.as_deref()) {
                let _ = write!(label, "\nCode: \"{code}\"");
            }
            if let Some(signposted) = non_empty(stop.signposted_as.as_deref()) {
                let _ = write!(label, "\nSignposted: \"{signposted}\"");
            }
        }
        LocationType::EntranceExit => {
            if let Some(number) = non_empty(stop.platform_code.as_deref()) {
                let _ = write!(label, "\nNumber: \"{number}\"");
            }
        }
        _ => {}
    }

    label
}

/// Edge label: the mode name, plus the traversal time when one is known
#[must_use]
pub fn edge_label(pathway: &Pathway) -> String {
    let prefix = pathway.pathway_mode.label_prefix();
    match pathway.traversal_time {
        Some(seconds) if seconds != 0 => format!("{prefix}\n{seconds} s"),
        _ => prefix.to_string(),
    }
}

/// Wheelchair icon for the stop, if its boarding status is known
#[must_use]
pub fn node_image(stop: &Stop, settings: &ProjectionSettings) -> Option<String> {
    match stop.wheelchair_boarding {
        WheelchairBoarding::Accessible => Some(settings.wheelchair_accessible_image.clone()),
        WheelchairBoarding::NotAccessible => Some(settings.wheelchair_not_possible_image.clone()),
        WheelchairBoarding::NoInfo => None,
    }
}
