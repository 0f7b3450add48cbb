//! Raw growth table: one row per country, one growth column per year

use crate::{DataError, DataPoint, DataResult, Dataset, Year};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;

/// Name of the column holding the category label
pub const COUNTRY_COLUMN: &str = "country";

/// A single country row with raw (unparsed) year cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthRow {
    pub country: String,
    /// Column key (e.g. "y2012") to raw cell text
    pub cells: BTreeMap<String, String>,
}

impl GrowthRow {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn with_cell(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.cells.insert(column.into(), value.into());
        self
    }

    /// Growth for `year`; NaN when the column is absent, blank or unparsable
    pub fn growth(&self, year: &Year) -> f64 {
        self.cells
            .get(&year.column())
            .map(|cell| cell.trim())
            .filter(|cell| !cell.is_empty())
            .and_then(|cell| cell.parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    }
}

/// Ordered table of growth rows, as loaded from the data file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthTable {
    pub rows: Vec<GrowthRow>,
}

impl GrowthTable {
    pub fn new(rows: Vec<GrowthRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Parse a headed CSV with a `country` column and any number of year
    /// columns.
    pub fn from_csv<R: Read>(reader: R) -> DataResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let country_idx = headers
            .iter()
            .position(|h| h == COUNTRY_COLUMN)
            .ok_or_else(|| DataError::MissingColumn(COUNTRY_COLUMN.to_string()))?;

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let mut row = GrowthRow::new(record.get(country_idx).unwrap_or_default());
            for (idx, (header, cell)) in headers.iter().zip(record.iter()).enumerate() {
                if idx != country_idx {
                    row.cells.insert(header.to_string(), cell.to_string());
                }
            }
            rows.push(row);
        }

        tracing::debug!("Loaded growth table: {} rows, {} columns", rows.len(), headers.len());
        Ok(Self { rows })
    }

    /// Parse a JSON array of row objects, e.g.
    /// `[{"country": "X", "y2012": "1.5"}]`. Numeric cells are accepted too.
    pub fn from_json(json: &str) -> DataResult<Self> {
        let raw: Vec<BTreeMap<String, serde_json::Value>> = serde_json::from_str(json)?;

        let rows = raw
            .into_iter()
            .map(|mut object| {
                let country = match object.remove(COUNTRY_COLUMN) {
                    Some(serde_json::Value::String(s)) => s,
                    _ => return Err(DataError::MissingColumn(COUNTRY_COLUMN.to_string())),
                };
                let mut row = GrowthRow::new(country);
                for (column, value) in object {
                    let cell = match value {
                        serde_json::Value::String(s) => s,
                        serde_json::Value::Number(n) => n.to_string(),
                        _ => continue,
                    };
                    row.cells.insert(column, cell);
                }
                Ok(row)
            })
            .collect::<DataResult<Vec<_>>>()?;

        Ok(Self { rows })
    }

    /// Dataset for one year, in row order. Missing cells become NaN points
    /// rather than being dropped, so the category keeps its slot.
    pub fn select_year(&self, year: &Year) -> Dataset {
        self.rows
            .iter()
            .map(|row| DataPoint::new(row.country.clone(), row.growth(year)))
            .collect()
    }

    /// Year columns present in the table, sorted
    pub fn years(&self) -> Vec<Year> {
        let mut years: Vec<Year> = self
            .rows
            .iter()
            .flat_map(|row| row.cells.keys())
            .filter_map(|column| column.strip_prefix('y'))
            .map(Year::from)
            .collect();
        years.sort_by(|a, b| a.0.cmp(&b.0));
        years.dedup();
        years
    }
}
