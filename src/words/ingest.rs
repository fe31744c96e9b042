use std::path::Path;

use serde_json::{Map, Value};

use crate::error::SpellError;
use crate::words::record::WordRecord;

/// Which parser produced the candidate records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Tabular { delimiter: u8 },
}

/// Turn a raw word-list payload into validated records.
///
/// JSON arrays are tried first; anything else is read as a comma- or
/// tab-delimited table with a header row. Validation is all-or-nothing:
/// the first record missing `word` or `definition` fails the whole batch.
pub fn ingest(payload: &str) -> Result<Vec<WordRecord>, SpellError> {
    let (format, candidates) = match parse_structured(payload) {
        Some(candidates) => (SourceFormat::Json, candidates),
        None => parse_tabular(payload)?,
    };

    let records = validate(candidates)?;
    tracing::debug!(format = ?format, records = records.len(), "Ingested word list");
    Ok(records)
}

/// Read a word list from disk and ingest it
pub fn ingest_file<P: AsRef<Path>>(path: P) -> Result<Vec<WordRecord>, SpellError> {
    let path = path.as_ref();
    let payload = std::fs::read_to_string(path)
        .map_err(|e| SpellError::from(e).with_context(format!("path: {:?}", path)))?;
    ingest(&payload).map_err(|e| e.with_context(format!("path: {:?}", path)))
}

/// The ordered word strings of a record list, as consumed by the challenge selector
pub fn corpus(records: &[WordRecord]) -> Vec<String> {
    records.iter().map(|r| r.word.clone()).collect()
}

fn parse_structured(payload: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(payload) {
        Ok(Value::Array(items)) => Some(items),
        _ => None,
    }
}

fn parse_tabular(payload: &str) -> Result<(SourceFormat, Vec<Value>), SpellError> {
    let lines: Vec<&str> = payload
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(SpellError::format(
            "word list must be a JSON array or a table with a header line and at least one data line",
        ));
    }

    let delimiter = if lines[0].contains(',') { b',' } else { b'\t' };
    let table = lines.join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        // Quotes are ordinary text; each line splits on the delimiter alone
        .quoting(false)
        .delimiter(delimiter)
        .from_reader(table.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut candidates = Vec::new();
    for result in reader.records() {
        let row = result?;
        let fields: Map<String, Value> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let value = row.get(i).map(str::trim).unwrap_or("");
                (header.clone(), Value::String(value.to_string()))
            })
            .collect();
        candidates.push(Value::Object(fields));
    }

    Ok((SourceFormat::Tabular { delimiter }, candidates))
}

fn validate(candidates: Vec<Value>) -> Result<Vec<WordRecord>, SpellError> {
    candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| WordRecord::from_candidate(index, candidate))
        .collect()
}
