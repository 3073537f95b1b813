use async_trait::async_trait;
use google_sheets4::api::{AppendValuesResponse, Scope, ValueRange};
use google_sheets4::{hyper, hyper_rustls, Sheets};
use tracing::{debug, info};

use crate::error::Result;
use crate::grid::{grid_from_api, grid_into_api, ValueGrid};

pub type Hub = Sheets<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>;

/// Values are interpreted as if typed into the UI by a user.
pub const VALUE_INPUT_USER_ENTERED: &str = "USER_ENTERED";
/// Appended data gets fresh rows instead of overwriting what follows the table.
pub const INSERT_DATA_INSERT_ROWS: &str = "INSERT_ROWS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRef {
    pub spreadsheet_id: String,
    pub sheet: String,
    pub range: String,
}

impl SheetRef {
    pub fn new(
        spreadsheet_id: impl Into<String>,
        sheet: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            sheet: sheet.into(),
            range: range.into(),
        }
    }

    /// A1 notation including the sheet, e.g. `Sheet1!A:B`.
    pub fn a1(&self) -> String {
        format!("{}!{}", self.sheet, self.range)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRequest {
    pub target: SheetRef,
    pub dimension: String,
    pub value_render: String,
    pub date_time_render: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppendRequest {
    pub target: SheetRef,
    pub dimension: String,
    pub values: ValueGrid,
    pub value_input_option: &'static str,
    pub insert_data_option: &'static str,
}

impl AppendRequest {
    pub fn new(target: SheetRef, dimension: impl Into<String>, values: ValueGrid) -> Self {
        Self {
            target,
            dimension: dimension.into(),
            values,
            value_input_option: VALUE_INPUT_USER_ENTERED,
            insert_data_option: INSERT_DATA_INSERT_ROWS,
        }
    }

    /// Request body for `spreadsheets.values.append`.
    pub fn value_range(&self) -> ValueRange {
        ValueRange {
            major_dimension: Some(self.dimension.clone()),
            values: Some(grid_into_api(self.values.clone())),
            ..Default::default()
        }
    }
}

/// The two remote calls the tool makes.
#[async_trait(?Send)]
pub trait SheetsApi {
    async fn get_values(&self, req: &GetRequest) -> Result<ValueGrid>;

    async fn append_values(&self, req: &AppendRequest) -> Result<AppendValuesResponse>;
}

#[async_trait(?Send)]
impl SheetsApi for Hub {
    async fn get_values(&self, req: &GetRequest) -> Result<ValueGrid> {
        let range = req.target.a1();
        info!("Fetching values from spreadsheet {} range {}", req.target.spreadsheet_id, range);

        let (_, value_range) = self
            .spreadsheets()
            .values_get(&req.target.spreadsheet_id, &range)
            .major_dimension(&req.dimension)
            .value_render_option(&req.value_render)
            .date_time_render_option(&req.date_time_render)
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await?;

        let grid = grid_from_api(value_range.values.unwrap_or_default())?;
        debug!("Fetched {} lines", grid.len());
        Ok(grid)
    }

    async fn append_values(&self, req: &AppendRequest) -> Result<AppendValuesResponse> {
        let range = req.target.a1();
        info!(
            "Appending {} lines to spreadsheet {} range {}",
            req.values.len(),
            req.target.spreadsheet_id,
            range
        );

        let (_, response) = self
            .spreadsheets()
            .values_append(req.value_range(), &req.target.spreadsheet_id, &range)
            .value_input_option(req.value_input_option)
            .insert_data_option(req.insert_data_option)
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await?;

        debug!("Append response: {:?}", response);
        Ok(response)
    }
}
