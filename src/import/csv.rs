use serde::de::DeserializeOwned;
use thiserror::Error;
use super::gtfs::{GtfsPathway, GtfsStop};

const STOPS_FILE: &str = "stops.txt";
const PATHWAYS_FILE: &str = "pathways.txt";

const STOP_COLUMNS: &[&str] = &["stop_id"];
const PATHWAY_COLUMNS: &[&str] = &[
    "pathway_id",
    "from_stop_id",
    "to_stop_id",
    "pathway_mode",
    "is_bidirectional",
];

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("{file} is missing required column {column}")]
    MissingColumn {
        file: &'static str,
        column: &'static str,
    },

    #[error("Failed to read {file}: {source}")]
    Csv {
        file: &'static str,
        #[source]
        source: csv::Error,
    },
}

/// Parse the rows of a stops.txt file
///
/// # Errors
/// Returns an error if a required column is missing or a row cannot be parsed
pub fn parse_stops(content: &str) -> Result<Vec<GtfsStop>, ImportError> {
    parse_records(content, STOPS_FILE, STOP_COLUMNS)
}

/// Parse the rows of a pathways.txt file
///
/// # Errors
/// Returns an error if a required column is missing or a row cannot be parsed
pub fn parse_pathways(content: &str) -> Result<Vec<GtfsPathway>, ImportError> {
    parse_records(content, PATHWAYS_FILE, PATHWAY_COLUMNS)
}

fn parse_records<T: DeserializeOwned>(
    content: &str,
    file: &'static str,
    required: &[&'static str],
) -> Result<Vec<T>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.trim_start_matches('\u{feff}').as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| ImportError::Csv { file, source })?
        .clone();

    if let Some(&column) = required
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(ImportError::MissingColumn { file, column });
    }

    let records = reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| ImportError::Csv { file, source })?;

    crate::log!("Read {} records from {}", records.len(), file);
    Ok(records)
}
