//! CSV ingestion
//!
//! Turns an uploaded file body into a [`Dataset`]. The first row names the fields;
//! every later row becomes one [`Record`] with values kept as raw strings.

use csv::ReaderBuilder;
use tracing::debug;

use crate::models::{Dataset, Record};

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ParseError(#[from] csv::Error);

pub fn parse_csv(input: &[u8]) -> Result<Dataset, ParseError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .from_reader(input);

    let headers = rdr.headers()?.clone();

    let mut dataset = Dataset::new();
    for row in rdr.records() {
        let row = row?;
        let record: Record = headers.iter().zip(row.iter()).collect();
        dataset.push(record);
    }

    debug!(columns = headers.len(), rows = dataset.len(), "Parsed CSV");
    Ok(dataset)
}
