use clap::{ArgGroup, Parser};

use crate::sheets::{GetRequest, SheetRef};

#[derive(Parser, Debug)]
#[command(name = "gsheets")]
#[command(about = "Read ranges from and append data to Google Sheets spreadsheets")]
#[command(version)]
#[command(group(
    ArgGroup::new("operation")
        .required(true)
        .multiple(false)
        .args(["get_as_json", "append_data"])
))]
pub struct Args {
    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Get range RANGE on sheet SHEET of spreadsheet ID as JSON.
    /// DIMENSION is ROWS or COLUMNS, RENDER is FORMATTED_VALUE, UNFORMATTED_VALUE
    /// or FORMULA, DATETIME_RENDER is SERIAL_NUMBER or FORMATTED_STRING
    #[arg(
        long,
        num_args = 6,
        value_names = ["ID", "SHEET", "RANGE", "DIMENSION", "RENDER", "DATETIME_RENDER"]
    )]
    pub get_as_json: Option<Vec<String>>,

    /// Append the table in JSON (e.g. [["Cell 1 1", "Cell 1 2"], ["Cell 2 1", "Cell 2 2"]])
    /// to the table defined by RANGE (e.g. A:B) on sheet SHEET of spreadsheet ID.
    /// DIMENSION is ROWS or COLUMNS
    #[arg(
        long,
        num_args = 5,
        value_names = ["ID", "SHEET", "RANGE", "DIMENSION", "JSON"]
    )]
    pub append_data: Option<Vec<String>>,
}

/// Append directive before its payload has been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendRaw {
    pub target: SheetRef,
    pub dimension: String,
    pub json: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    GetAsJson(GetRequest),
    AppendData(AppendRaw),
}

impl Args {
    /// The directive selected on the command line. Clap guarantees exactly one is present
    /// with the right number of values.
    pub fn operation(&self) -> Operation {
        match (&self.get_as_json, &self.append_data) {
            (Some(values), _) => {
                let [id, sheet, range, dimension, render, datetime_render] = take::<6>(values);
                Operation::GetAsJson(GetRequest {
                    target: SheetRef::new(id, sheet, range),
                    dimension,
                    value_render: render,
                    date_time_render: datetime_render,
                })
            }
            (None, Some(values)) => {
                let [id, sheet, range, dimension, json] = take::<5>(values);
                Operation::AppendData(AppendRaw {
                    target: SheetRef::new(id, sheet, range),
                    dimension,
                    json,
                })
            }
            (None, None) => unreachable!("clap requires one of --get-as-json or --append-data"),
        }
    }
}

fn take<const N: usize>(values: &[String]) -> [String; N] {
    std::array::from_fn(|i| values.get(i).cloned().unwrap_or_default())
}
