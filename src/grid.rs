use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Number, Value};
use tracing::debug;

/// A single cell as the Sheets API exchanges it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(Number),
    Text(String),
}

/// Rows or columns of cells, depending on the major dimension of the request.
pub type ValueGrid = Vec<Vec<CellValue>>;

impl From<CellValue> for Value {
    fn from(cell: CellValue) -> Self {
        match cell {
            CellValue::Bool(b) => Value::Bool(b),
            CellValue::Number(n) => Value::Number(n),
            CellValue::Text(s) => Value::String(s),
        }
    }
}

impl TryFrom<Value> for CellValue {
    type Error = Value;

    fn try_from(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Bool(b) => Ok(CellValue::Bool(b)),
            Value::Number(n) => Ok(CellValue::Number(n)),
            Value::String(s) => Ok(CellValue::Text(s)),
            other => Err(other),
        }
    }
}

pub fn parse_grid(input: &str) -> Result<ValueGrid> {
    let grid: ValueGrid =
        serde_json::from_str(input).map_err(|e| Error::MalformedGrid(e.to_string()))?;
    debug!("Parsed value grid with {} lines", grid.len());
    Ok(grid)
}

/// The values API only returns strings, numbers and booleans in a grid; anything else is
/// reported as malformed rather than printed.
pub fn grid_from_api(values: Vec<Vec<Value>>) -> Result<ValueGrid> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            line.into_iter()
                .enumerate()
                .map(|(j, value)| {
                    CellValue::try_from(value).map_err(|other| {
                        Error::MalformedGrid(format!(
                            "unsupported cell value {} at position [{}][{}]",
                            other, i, j
                        ))
                    })
                })
                .collect()
        })
        .collect()
}

pub fn grid_into_api(grid: ValueGrid) -> Vec<Vec<Value>> {
    grid.into_iter()
        .map(|line| line.into_iter().map(Value::from).collect())
        .collect()
}

/// Four space indented JSON, the format printed on stdout.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn to_compact_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
