//! Decoders for the registry's CSV export bodies.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::types::{TivRow, TivTable, TransferRecord};
use crate::Error;

/// Lines of boilerplate before the header row of a TIV export.
const TIV_PREAMBLE_LINES: usize = 10;
/// Source and footnote lines after the last row of a TIV export.
const TIV_TRAILER_LINES: usize = 3;

/// Decodes a trade-register export into typed records.
///
/// Columns not named by [`TransferRecord`] are ignored.
pub fn parse_trade_registers(body: &str) -> Result<Vec<TransferRecord>, Error> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let mut records = Vec::new();
    for record in reader.deserialize::<TransferRecord>() {
        records.push(record?);
    }
    Ok(records)
}

/// Re-encodes a trade-register export as a map keyed by transfer id.
///
/// Each row becomes a JSON object without its `tidn` cell. Empty cells are
/// dropped and cells that parse as numbers are encoded as JSON numbers.
pub fn parse_trade_registers_indexed(
    body: &str,
) -> Result<BTreeMap<i64, Map<String, Value>>, Error> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let headers = reader.headers()?.clone();
    let tidn_at = headers.iter().position(|h| h == "tidn").ok_or_else(|| {
        Error::MalformedExport("register export has no \"tidn\" column".to_string())
    })?;

    let mut indexed = BTreeMap::new();
    for record in reader.records() {
        let record = record?;
        let tidn: i64 = record
            .get(tidn_at)
            .and_then(|cell| cell.trim().parse().ok())
            .ok_or_else(|| {
                Error::MalformedExport(format!(
                    "unparseable \"tidn\" cell {:?}",
                    record.get(tidn_at).unwrap_or_default()
                ))
            })?;

        let mut row = Map::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            if header == "tidn" || cell.is_empty() {
                continue;
            }
            row.insert(header.to_string(), cell_value(cell));
        }
        indexed.insert(tidn, row);
    }
    Ok(indexed)
}

/// Decodes a TIV-table export, stripping the boilerplate around the table.
///
/// Cells that are empty or not numeric come back as `None`.
pub fn parse_tiv_values(body: &str) -> Result<TivTable, Error> {
    let lines: Vec<&str> = body.split('\n').collect();
    if lines.len() <= TIV_PREAMBLE_LINES + TIV_TRAILER_LINES {
        return Err(Error::MalformedExport(format!(
            "TIV export too short: {} lines",
            lines.len()
        )));
    }
    let table = lines[TIV_PREAMBLE_LINES..lines.len() - TIV_TRAILER_LINES].join("\n");

    let mut reader = csv::Reader::from_reader(table.as_bytes());
    let headers = reader.headers()?.clone();
    let columns: Vec<String> = headers.iter().skip(1).map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut cells = record.iter();
        let label = cells.next().unwrap_or_default().to_string();
        let values = cells
            .map(|cell| cell.trim())
            .map(|cell| {
                if cell.is_empty() {
                    None
                } else {
                    cell.parse::<f64>().ok()
                }
            })
            .collect();
        rows.push(TivRow { label, values });
    }
    Ok(TivTable { columns, rows })
}

fn cell_value(cell: &str) -> Value {
    if let Ok(int) = cell.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(float) = cell.parse::<f64>() {
        if float.is_finite() {
            return Value::from(float);
        }
    }
    Value::from(cell)
}
